use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("outcome event encoding failed: {source}")]
    Encode {
        #[source]
        source: bincode::error::EncodeError,
    },
    #[error("no async runtime to submit the event on")]
    NoRuntime,
}

/// Échec côté transport d'événements.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport client setup failed: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },
    #[error("publish request failed: {source}")]
    Http {
        #[source]
        source: reqwest::Error,
    },
    #[error("topic {topic} rejected the message ({status}): {body}")]
    Rejected {
        topic: String,
        status: u16,
        body: String,
    },
    #[error("publish did not complete within {}s", .timeout.as_secs())]
    Timeout { timeout: std::time::Duration },
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    pub(crate) fn client(source: reqwest::Error) -> Self {
        Self::Client { source }
    }

    pub(crate) fn http(source: reqwest::Error) -> Self {
        Self::Http { source }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
