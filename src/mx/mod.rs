//! Résolution MX et cache de validité des domaines.
//!
//! [`DomainCache::is_domain_valid`] interroge le DNS au plus une fois par
//! domaine et garde le verdict pour toute la durée du processus.

mod cache;
mod error;
mod resolver;
mod types;

pub use cache::DomainCache;
pub use error::MxError;
pub use error::MxError as Error;
pub use resolver::{LookupMx, SystemResolver, normalize_domain};
pub use types::MxRecord;
