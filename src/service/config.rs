use std::net::SocketAddr;

use super::ServiceError;

pub const DEFAULT_SERVER_PORT: u16 = 50051;
pub const DEFAULT_VRFY_PORT: u16 = 9090;
pub const DEFAULT_PUBSUB_PROJECT: &str = "jobrapido-sandbox";
pub const DEFAULT_PUBSUB_TOPIC: &str = "hackathon-q1fy2024-brescianini";
pub const DEFAULT_PUBSUB_ENDPOINT: &str = "https://pubsub.googleapis.com";

/// Paramètres de déploiement du service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub vrfy_endpoint: String,
    pub vrfy_port: u16,
    pub pubsub_project: String,
    pub pubsub_topic: String,
    pub pubsub_endpoint: String,
    pub pubsub_token: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_SERVER_PORT,
            vrfy_endpoint: "localhost".to_string(),
            vrfy_port: DEFAULT_VRFY_PORT,
            pubsub_project: DEFAULT_PUBSUB_PROJECT.to_string(),
            pubsub_topic: DEFAULT_PUBSUB_TOPIC.to_string(),
            pubsub_endpoint: DEFAULT_PUBSUB_ENDPOINT.to_string(),
            pubsub_token: None,
        }
    }
}

impl ServiceConfig {
    pub fn listen_addr(&self) -> Result<SocketAddr, ServiceError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse::<SocketAddr>()
            .map_err(|source| ServiceError::ListenAddr { addr, source })
    }

    pub fn vrfy_url(&self) -> String {
        format!("http://{}:{}", self.vrfy_endpoint, self.vrfy_port)
    }
}
