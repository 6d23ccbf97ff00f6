//! Délégation au service distant de vérification de boîte (`Verify`).
//!
//! Un seul essai par adresse, borné par [`VRFY_DEADLINE`]. Toute erreur de
//! transport ou dépassement de délai devient
//! [`Failure::RemoteUnavailable`](crate::pipeline::Failure::RemoteUnavailable).

mod client;
mod error;
mod types;

pub use client::{VrfyApiClient, VrfyClient};
pub use error::VrfyError;
pub use types::VrfyReply;

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::pipeline::{Failure, Verdict};

/// Délai fixe, mesuré depuis l'émission de l'appel.
pub const VRFY_DEADLINE: Duration = Duration::from_millis(1000);

#[async_trait]
pub trait MailboxVerifier: Send + Sync {
    async fn verify(&self, email: &str) -> Result<VrfyReply, VrfyError>;
}

pub async fn vrfy_verify<V>(verifier: &V, email: &str) -> Verdict
where
    V: MailboxVerifier + ?Sized,
{
    let outcome = match tokio::time::timeout(VRFY_DEADLINE, verifier.verify(email)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(VrfyError::deadline(VRFY_DEADLINE)),
    };

    match outcome {
        Ok(reply) if reply.is_deliverable() => Verdict::Valid,
        Ok(reply) => Verdict::invalid(Failure::RemoteRejected {
            code: reply.status_code,
            message: reply.error_message,
        }),
        Err(err) => {
            debug!(email, error = %err, "remote verification unavailable");
            Verdict::invalid(Failure::RemoteUnavailable)
        }
    }
}
