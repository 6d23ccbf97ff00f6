//! Contrôle syntaxique des adresses (grammaire dérivée de RFC 5322).
//!
//! Aucun accès réseau ni état: [`is_syntax_valid`] est un simple prédicat sur
//! la chaîne complète.

mod grammar;

/// `true` si `email` respecte la grammaire en entier (pas de correspondance
/// partielle, pas de trim).
pub fn is_syntax_valid(email: &str) -> bool {
    grammar::matches(email)
}

/// Domaine = tout ce qui suit le premier `@`.
pub fn split_domain(email: &str) -> Option<&str> {
    email.split_once('@').map(|(_, domain)| domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_standard_addresses() {
        for email in [
            "user@example.com",
            "first.last+tag@sub.example.co.uk",
            "User@Example.COM",
            "o'brien@example.ie",
            "x@a1.b2",
        ] {
            assert!(is_syntax_valid(email), "{email} should be accepted");
        }
    }

    #[test]
    fn accepts_documented_edge_cases() {
        assert!(is_syntax_valid("\"john.doe\"@example.com"));
        assert!(is_syntax_valid("\"a\\\"b\"@example.com"));
        assert!(is_syntax_valid("\"\"@example.com"));
        assert!(is_syntax_valid("user@[192.168.0.1]"));
        assert!(is_syntax_valid("user@[255.255.255.255]"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@@example.com",
            ".user@example.com",
            "user.@example.com",
            "user..x@example.com",
            "user@-example.com",
            "user@example-.com",
            "user@[invalid-literal",
            "user@[300.1.1.1]",
            "user@[1.2.3]",
            "\"unterminated@example.com",
            "\"john doe\"@example.com",
            " user@example.com",
            "user@example.com ",
            "user name@example.com",
            "\u{17F}@example.com",
            "user@exampl\u{212A}.com",
            "d\u{e9}j\u{e0}@example.com",
        ] {
            assert!(!is_syntax_valid(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn split_domain_uses_first_at() {
        assert_eq!(split_domain("user@example.com"), Some("example.com"));
        assert_eq!(split_domain("a@b@c"), Some("b@c"));
        assert_eq!(split_domain("plainaddress"), None);
    }

    proptest! {
        #[test]
        fn strings_without_at_are_rejected(s in "[^@]{0,64}") {
            prop_assert!(!is_syntax_valid(&s));
        }

        #[test]
        fn dot_atoms_on_dotted_hosts_are_accepted(
            local in "[a-z0-9]{1,10}(\\.[a-z0-9_+-]{1,10}){0,2}",
            host in "[a-z0-9]{1,12}",
            tld in "[a-z]{2,6}",
        ) {
            let email = format!("{local}@{host}.{tld}");
            prop_assert!(is_syntax_valid(&email), "{}", email);
        }
    }
}
