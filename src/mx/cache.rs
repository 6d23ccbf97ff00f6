use dashmap::DashMap;
use tracing::{debug, trace};

use super::resolver::{LookupMx, normalize_domain};
use super::types::preferred;

/// Verdicts MX mémorisés pour la vie du processus.
///
/// Pas d'éviction, pas d'expiration, pas de coalescence des requêtes en vol:
/// deux appels concurrents sur un domaine inconnu interrogent chacun le DNS
/// et le dernier à écrire l'emporte. Une erreur DNS, transitoire ou non,
/// marque le domaine invalide définitivement.
pub struct DomainCache<R> {
    resolver: R,
    entries: DashMap<String, bool>,
}

impl<R: LookupMx> DomainCache<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            entries: DashMap::new(),
        }
    }

    pub async fn is_domain_valid(&self, domain: &str) -> bool {
        // sans forme IDNA, la clé et la requête portent sur le domaine brut
        let key = match normalize_domain(domain) {
            Ok(ascii) => ascii,
            Err(err) => {
                debug!(domain, error = %err, "domain cannot be normalized");
                domain.to_string()
            }
        };

        if let Some(valid) = self.entries.get(&key).map(|entry| *entry) {
            trace!(domain = %key, valid, "domain cache hit");
            return valid;
        }

        let valid = self.resolve(&key).await;
        self.entries.insert(key, valid);
        valid
    }

    /// Verdict déjà connu pour `domain` (clé normalisée ou brute).
    pub fn cached(&self, domain: &str) -> Option<bool> {
        let key = normalize_domain(domain).unwrap_or_else(|_| domain.to_string());
        self.entries.get(&key).map(|entry| *entry)
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    async fn resolve(&self, domain: &str) -> bool {
        match self.resolver.lookup_mx(domain).await {
            Ok(records) => {
                let exchange = preferred(&records).map(|mx| mx.exchange.as_str());
                debug!(domain, records = records.len(), ?exchange, "MX lookup succeeded");
                true
            }
            Err(err) => {
                debug!(domain, error = %err, "MX lookup failed");
                false
            }
        }
    }
}
