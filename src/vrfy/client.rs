use async_trait::async_trait;
use jsonrpsee::core::RpcResult;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::proc_macros::rpc;

use super::{MailboxVerifier, VRFY_DEADLINE, VrfyError, VrfyReply};

/// Contrat JSON-RPC du vérificateur distant.
#[rpc(client)]
pub trait VrfyApi {
    #[method(name = "Verify")]
    async fn verify(&self, email: String) -> RpcResult<VrfyReply>;
}

/// Client HTTP du vérificateur distant.
#[derive(Clone)]
pub struct VrfyClient {
    client: HttpClient,
}

impl VrfyClient {
    /// `endpoint` au format `http://host:port`. Aucune connexion n'est ouverte ici.
    pub fn connect(endpoint: &str) -> Result<Self, VrfyError> {
        let client = HttpClientBuilder::default()
            .request_timeout(VRFY_DEADLINE)
            .build(endpoint)
            .map_err(|err| VrfyError::endpoint(endpoint, err))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl MailboxVerifier for VrfyClient {
    async fn verify(&self, email: &str) -> Result<VrfyReply, VrfyError> {
        VrfyApiClient::verify(&self.client, email.to_string())
            .await
            .map_err(VrfyError::call)
    }
}
