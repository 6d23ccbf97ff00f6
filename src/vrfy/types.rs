use serde::{Deserialize, Serialize};

/// Réponse de `Verify`. Statut `0` = boîte délivrable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrfyReply {
    pub status_code: i32,
    #[serde(default)]
    pub error_message: String,
}

impl VrfyReply {
    pub fn deliverable() -> Self {
        Self {
            status_code: 0,
            error_message: String::new(),
        }
    }

    pub fn rejected(status_code: i32, error_message: impl Into<String>) -> Self {
        Self {
            status_code,
            error_message: error_message.into(),
        }
    }

    pub fn is_deliverable(&self) -> bool {
        self.status_code == 0
    }
}
