//! Frontal JSON-RPC: lie les trois niveaux du pipeline aux méthodes
//! `SyntaxVerification`, `SimpleVerification` et `FullVerification`.
//!
//! Chaque appel exécute le niveau demandé, soumet l'événement de résultat
//! sans l'attendre, puis répond.

mod api;
mod config;
mod error;

pub use api::{MailVerifierApiClient, MailVerifierApiServer};
pub use config::{
    DEFAULT_PUBSUB_ENDPOINT, DEFAULT_PUBSUB_PROJECT, DEFAULT_PUBSUB_TOPIC, DEFAULT_SERVER_PORT,
    DEFAULT_VRFY_PORT, ServiceConfig,
};
pub use error::ServiceError;

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use jsonrpsee::core::RpcResult;
use jsonrpsee::server::{Server, ServerHandle};
use tracing::{debug, info};

use crate::mx::{DomainCache, LookupMx, SystemResolver};
use crate::pipeline::{Pipeline, Tier, VerificationRequest, VerificationResponse, Verdict};
use crate::publisher::{PubSubTransport, Publisher};
use crate::vrfy::{MailboxVerifier, VrfyClient};

pub struct MailVerifierService<R, V> {
    pipeline: Arc<Pipeline<R, V>>,
    publisher: Publisher,
}

impl<R, V> MailVerifierService<R, V>
where
    R: LookupMx + 'static,
    V: MailboxVerifier + 'static,
{
    pub fn new(pipeline: Pipeline<R, V>, publisher: Publisher) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            publisher,
        }
    }

    /// Niveau demandé puis publication; le verdict rendu est celui du
    /// pipeline quel que soit le sort de l'envoi.
    pub async fn verify(&self, tier: Tier, request: VerificationRequest) -> VerificationResponse {
        let verdict = match tier {
            Tier::Syntax => self.pipeline.syntax(&request),
            Tier::Simple => self.pipeline.simple(&request).await,
            Tier::Full => self.pipeline.full(&request).await,
        };
        debug!(%tier, email = %request.email, valid = verdict.is_valid(), "verification done");
        self.respond(&request, verdict)
    }

    fn respond(&self, request: &VerificationRequest, verdict: Verdict) -> VerificationResponse {
        VerificationResponse::from(self.publisher.publish(request, verdict))
    }
}

#[async_trait]
impl<R, V> MailVerifierApiServer for MailVerifierService<R, V>
where
    R: LookupMx + 'static,
    V: MailboxVerifier + 'static,
{
    async fn syntax_verification(&self, email: String) -> RpcResult<VerificationResponse> {
        Ok(self.verify(Tier::Syntax, VerificationRequest::new(email)).await)
    }

    async fn simple_verification(&self, email: String) -> RpcResult<VerificationResponse> {
        Ok(self.verify(Tier::Simple, VerificationRequest::new(email)).await)
    }

    async fn full_verification(&self, email: String) -> RpcResult<VerificationResponse> {
        Ok(self.verify(Tier::Full, VerificationRequest::new(email)).await)
    }
}

/// Démarre le serveur sur `addr` et rend l'adresse effective (utile avec le
/// port 0) avec son handle.
pub async fn start<R, V>(
    addr: SocketAddr,
    service: MailVerifierService<R, V>,
) -> Result<(SocketAddr, ServerHandle), ServiceError>
where
    R: LookupMx + 'static,
    V: MailboxVerifier + 'static,
{
    let server = Server::builder()
        .build(addr)
        .await
        .map_err(|source| ServiceError::Bind { addr, source })?;
    let local = server
        .local_addr()
        .map_err(|source| ServiceError::Bind { addr, source })?;
    let handle = server.start(service.into_rpc());
    Ok((local, handle))
}

/// Assemble les collaborateurs de production et sert jusqu'à SIGINT.
pub async fn serve(config: ServiceConfig) -> Result<(), ServiceError> {
    let addr = config.listen_addr()?;
    let verifier = VrfyClient::connect(&config.vrfy_url())?;
    let transport = PubSubTransport::new(
        config.pubsub_endpoint.as_str(),
        config.pubsub_project.as_str(),
        config.pubsub_token.clone(),
    )?;

    let pipeline = Pipeline::new(DomainCache::new(SystemResolver::from_system_conf()), verifier);
    let publisher = Publisher::new(Arc::new(transport), &config.pubsub_topic);
    let service = MailVerifierService::new(pipeline, publisher);

    let (local, handle) = start(addr, service).await?;
    info!(%local, vrfy = %config.vrfy_url(), topic = %config.pubsub_topic, "server listening");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("signal break received");
            let _ = handle.stop();
        }
        _ = handle.clone().stopped() => {}
    }
    handle.stopped().await;
    Ok(())
}
