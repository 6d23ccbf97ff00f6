#![forbid(unsafe_code)]
//! mailverify : vérification d'adresses e-mail à trois niveaux (syntaxe,
//! MX, vérificateur distant) exposée en JSON-RPC, chaque résultat étant
//! publié comme événement.

pub mod logging;
pub mod mx;
pub mod pipeline;
pub mod publisher;
pub mod service;
pub mod validator;
pub mod vrfy;

pub use mx::{DomainCache, LookupMx, MxError, MxRecord, SystemResolver};
pub use pipeline::{
    Failure, Pipeline, PipelineError, Tier, VerificationRequest, VerificationResponse, Verdict,
};
pub use publisher::{EventTransport, OutcomeEvent, PubSubTransport, Publisher, TransportError};
pub use service::{
    MailVerifierApiClient, MailVerifierApiServer, MailVerifierService, ServiceConfig,
    ServiceError, serve, start,
};
pub use validator::{is_syntax_valid, split_domain};
pub use vrfy::{MailboxVerifier, VRFY_DEADLINE, VrfyClient, VrfyError, VrfyReply, vrfy_verify};
