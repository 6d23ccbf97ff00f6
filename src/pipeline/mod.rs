//! Les trois niveaux de vérification.
//!
//! Chaque niveau est une chaîne linéaire de portes (syntaxe, domaine,
//! distant) qui s'arrête à la première porte en échec. Les fautes internes,
//! erreurs comme paniques, sont contenues et converties en
//! `Failure::Internal(tier)`: un appel produit toujours un [`Verdict`].

mod error;
mod types;

pub use error::PipelineError;
pub use types::{Failure, Tier, VerificationRequest, VerificationResponse, Verdict};

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::{debug, error};

use crate::mx::{DomainCache, LookupMx};
use crate::validator::{is_syntax_valid, split_domain};
use crate::vrfy::{MailboxVerifier, vrfy_verify};

pub struct Pipeline<R, V> {
    domains: DomainCache<R>,
    verifier: V,
}

impl<R, V> Pipeline<R, V>
where
    R: LookupMx,
    V: MailboxVerifier,
{
    pub fn new(domains: DomainCache<R>, verifier: V) -> Self {
        Self { domains, verifier }
    }

    pub fn domains(&self) -> &DomainCache<R> {
        &self.domains
    }

    /// Niveau 1: syntaxe seule, sans I/O.
    pub fn syntax(&self, request: &VerificationRequest) -> Verdict {
        if is_syntax_valid(&request.email) {
            Verdict::Valid
        } else {
            Verdict::invalid(Failure::Syntax)
        }
    }

    /// Niveau 2: syntaxe puis MX (via le cache).
    pub async fn simple(&self, request: &VerificationRequest) -> Verdict {
        self.contained(Tier::Simple, async {
            Ok::<_, PipelineError>(match self.check_address(&request.email).await? {
                Some(failure) => Verdict::invalid(failure),
                None => Verdict::Valid,
            })
        })
        .await
    }

    /// Niveau 3: syntaxe, MX, puis vérificateur distant. Le verdict distant
    /// est renvoyé tel quel.
    pub async fn full(&self, request: &VerificationRequest) -> Verdict {
        self.contained(Tier::Full, async {
            if let Some(failure) = self.check_address(&request.email).await? {
                return Ok(Verdict::invalid(failure));
            }
            Ok::<_, PipelineError>(vrfy_verify(&self.verifier, &request.email).await)
        })
        .await
    }

    async fn check_address(&self, email: &str) -> Result<Option<Failure>, PipelineError> {
        if !is_syntax_valid(email) {
            return Ok(Some(Failure::Syntax));
        }
        let domain = split_domain(email).ok_or_else(|| PipelineError::missing_domain(email))?;
        if !self.domains.is_domain_valid(domain).await {
            debug!(domain, "domain gate failed");
            return Ok(Some(Failure::Domain));
        }
        Ok(None)
    }

    async fn contained<F>(&self, tier: Tier, run: F) -> Verdict
    where
        F: Future<Output = Result<Verdict, PipelineError>>,
    {
        let outcome = match AssertUnwindSafe(run).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(payload) => Err(PipelineError::panicked(payload.as_ref())),
        };
        outcome.unwrap_or_else(|err| {
            error!(%tier, error = %err, "verification failed internally");
            Verdict::invalid(Failure::Internal(tier))
        })
    }
}

#[cfg(test)]
mod tests;
