use thiserror::Error;

/// Fautes internes d'un niveau. Jamais exposées telles quelles: le niveau
/// les convertit en `Failure::Internal`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no domain part in {email:?}")]
    MissingDomain { email: String },
    #[error("verification panicked: {reason}")]
    Panicked { reason: String },
}

impl PipelineError {
    pub(crate) fn missing_domain(email: impl Into<String>) -> Self {
        Self::MissingDomain {
            email: email.into(),
        }
    }

    pub(crate) fn panicked(payload: &(dyn std::any::Any + Send)) -> Self {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        Self::Panicked { reason }
    }
}
