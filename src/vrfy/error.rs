use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VrfyError {
    #[error("invalid verifier endpoint {endpoint}: {source}")]
    Endpoint {
        endpoint: String,
        #[source]
        source: jsonrpsee::core::client::Error,
    },
    #[error("verify call failed: {source}")]
    Call {
        #[source]
        source: jsonrpsee::core::client::Error,
    },
    #[error("no reply within {}ms", .deadline.as_millis())]
    DeadlineExceeded { deadline: Duration },
}

impl VrfyError {
    pub(crate) fn endpoint(
        endpoint: impl Into<String>,
        source: jsonrpsee::core::client::Error,
    ) -> Self {
        Self::Endpoint {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub(crate) fn call(source: jsonrpsee::core::client::Error) -> Self {
        Self::Call { source }
    }

    pub(crate) fn deadline(deadline: Duration) -> Self {
        Self::DeadlineExceeded { deadline }
    }
}
