use serde::{Deserialize, Serialize};

use super::PublishError;
use crate::pipeline::Verdict;

/// Événement émis pour chaque vérification terminée.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeEvent {
    pub email: String,
    pub valid: bool,
    pub error_message: Option<String>,
}

impl OutcomeEvent {
    pub fn new(email: impl Into<String>, verdict: &Verdict) -> Self {
        Self {
            email: email.into(),
            valid: verdict.is_valid(),
            error_message: verdict.error_message(),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, PublishError> {
        bincode::serde::encode_to_vec(self, bincode::config::standard())
            .map_err(|source| PublishError::Encode { source })
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::error::DecodeError> {
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())
            .map(|(event, _)| event)
    }
}
