use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// atext RFC 5322 (sans le point)
const ATEXT: &str = r"[a-z0-9!#$%&'*+/=?^_`{|}~-]";

/// qtext + quoted-pair, espace non échappé exclu
const QUOTED_STRING: &str = r#""(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*""#;

const DNS_LABEL: &str = r"[a-z0-9](?:[a-z0-9-]*[a-z0-9])?";

const IPV4_OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

/// `tag:contenu` accepté à la place du dernier octet
const GENERAL_LITERAL: &str =
    r"[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+";

static ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(&address_pattern())
        .case_insensitive(true)
        .unicode(false)
        .build()
        .unwrap_or_else(|err| panic!("address grammar must compile: {err}"))
});

fn address_pattern() -> String {
    let local = format!("(?:{ATEXT}+(?:\\.{ATEXT}+)*|{QUOTED_STRING})");
    let hostname = format!("(?:{DNS_LABEL}\\.)+{DNS_LABEL}");
    let literal = format!("\\[(?:{IPV4_OCTET}\\.){{3}}(?:{IPV4_OCTET}|{GENERAL_LITERAL})\\]");
    format!("^{local}@(?:{hostname}|{literal})$")
}

pub(crate) fn matches(email: &str) -> bool {
    ADDRESS.is_match(email)
}
