//! Émission « fire-and-forget » des résultats de vérification.
//!
//! [`Publisher::publish`] encode l'événement, confie l'envoi à une tâche
//! détachée et rend le verdict immédiatement. Un échec d'envoi ne remonte
//! jamais à l'appelant: il incrémente un compteur partagé, journalisé une
//! fois toutes les [`LOG_EVERY`] erreurs.

mod error;
mod event;
mod transport;

pub use error::{PublishError, TransportError};
pub use event::OutcomeEvent;
pub use transport::{EventTransport, PubSubTransport};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::{error, warn};

use crate::pipeline::{VerificationRequest, Verdict};

/// Délai de l'opération d'envoi; jamais attendu par le chemin de réponse.
pub const PUBLISH_TIMEOUT: Duration = Duration::from_secs(100);

pub const LOG_EVERY: u64 = 100_000;

#[derive(Clone)]
pub struct Publisher {
    transport: Arc<dyn EventTransport>,
    topic: Arc<str>,
    errors: Arc<AtomicU64>,
}

impl Publisher {
    pub fn new(transport: Arc<dyn EventTransport>, topic: &str) -> Self {
        Self {
            transport,
            topic: Arc::from(topic),
            errors: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Une tentative d'envoi par appel, puis retour immédiat de `verdict`.
    pub fn publish(&self, request: &VerificationRequest, verdict: Verdict) -> Verdict {
        let submitted = OutcomeEvent::new(request.email.as_str(), &verdict)
            .encode()
            .and_then(|payload| self.submit(payload));
        if let Err(err) = submitted {
            error!(error = %err, "generic error while publishing outcome");
        }
        verdict
    }

    /// Erreurs d'envoi cumulées depuis le démarrage.
    pub fn error_count(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }

    fn submit(&self, payload: Vec<u8>) -> Result<(), PublishError> {
        let runtime = Handle::try_current().map_err(|_| PublishError::NoRuntime)?;
        let publisher = self.clone();
        runtime.spawn(async move {
            let sent = tokio::time::timeout(
                PUBLISH_TIMEOUT,
                publisher.transport.publish(&publisher.topic, payload),
            )
            .await
            .unwrap_or_else(|_| {
                Err(TransportError::Timeout {
                    timeout: PUBLISH_TIMEOUT,
                })
            });
            if let Err(err) = sent {
                publisher.record_failure(&err);
            }
        });
        Ok(())
    }

    fn record_failure(&self, err: &TransportError) {
        let count = self.errors.fetch_add(1, Ordering::Relaxed) + 1;
        if should_log(count) {
            warn!(publish_errors = count, last_error = %err, "outcome publishing keeps failing");
        }
    }
}

fn should_log(count: u64) -> bool {
    count % LOG_EVERY == 0
}

#[cfg(test)]
mod tests;
