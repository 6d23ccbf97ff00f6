use std::fmt;

use serde::{Deserialize, Serialize};

/// Requête commune aux trois niveaux.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub email: String,
}

impl VerificationRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Niveau de vérification, du moins au plus coûteux.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Syntax,
    Simple,
    Full,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => f.write_str("Syntax"),
            Self::Simple => f.write_str("Simple"),
            Self::Full => f.write_str("Full"),
        }
    }
}

/// Étape en échec. L'affichage donne le message exposé aux appelants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    Syntax,
    Domain,
    /// Vérificateur distant injoignable ou hors délai.
    RemoteUnavailable,
    /// Vérificateur joint, statut non nul.
    RemoteRejected { code: i32, message: String },
    /// Faute interne contenue dans le niveau indiqué.
    Internal(Tier),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => f.write_str("Syntax error"),
            Self::Domain => f.write_str("Domain error"),
            Self::RemoteUnavailable => f.write_str("Vrfy verification error"),
            Self::RemoteRejected { code, message } => write!(f, "code:{code}|message:{message}"),
            Self::Internal(tier) => write!(f, "{tier} verification error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Failure),
}

impl Verdict {
    pub fn invalid(failure: Failure) -> Self {
        Self::Invalid(failure)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Valid => None,
            Self::Invalid(failure) => Some(failure),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.failure().map(ToString::to_string)
    }
}

/// Forme filaire du résultat: `error_message` absent si et seulement si
/// `valid` vaut `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<&Verdict> for VerificationResponse {
    fn from(verdict: &Verdict) -> Self {
        Self {
            valid: verdict.is_valid(),
            error_message: verdict.error_message(),
        }
    }
}

impl From<Verdict> for VerificationResponse {
    fn from(verdict: Verdict) -> Self {
        Self::from(&verdict)
    }
}
