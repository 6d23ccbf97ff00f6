use clap::Parser;
use mailverify::ServiceConfig;
use mailverify::service::{
    DEFAULT_PUBSUB_ENDPOINT, DEFAULT_PUBSUB_PROJECT, DEFAULT_PUBSUB_TOPIC, DEFAULT_SERVER_PORT,
    DEFAULT_VRFY_PORT,
};

/// Serveur JSON-RPC de vérification d'adresses e-mail.
#[derive(Parser, Debug)]
#[command(name = "mailverify-server", version)]
pub struct ServerArgs {
    /// adresse d'écoute
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// port d'écoute
    #[arg(long, env = "SERVER_PORT", default_value_t = DEFAULT_SERVER_PORT)]
    pub port: u16,

    /// hôte du vérificateur distant
    #[arg(long, env = "VRFY_ENDPOINT", default_value = "localhost")]
    pub vrfy_endpoint: String,

    /// port du vérificateur distant
    #[arg(long, env = "VRFY_PORT", default_value_t = DEFAULT_VRFY_PORT)]
    pub vrfy_port: u16,

    /// projet Pub/Sub
    #[arg(long, env = "PUBSUB_PROJECT", default_value = DEFAULT_PUBSUB_PROJECT)]
    pub pubsub_project: String,

    /// topic des événements de résultat
    #[arg(long, env = "PUBSUB_TOPIC", default_value = DEFAULT_PUBSUB_TOPIC)]
    pub pubsub_topic: String,

    /// racine de l'API Pub/Sub (ou de l'émulateur)
    #[arg(long, env = "PUBSUB_ENDPOINT", default_value = DEFAULT_PUBSUB_ENDPOINT)]
    pub pubsub_endpoint: String,

    /// jeton OAuth2 (inutile avec l'émulateur)
    #[arg(long, env = "PUBSUB_TOKEN", hide_env_values = true)]
    pub pubsub_token: Option<String>,
}

impl ServerArgs {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn into_config(self) -> ServiceConfig {
        ServiceConfig {
            host: self.host,
            port: self.port,
            vrfy_endpoint: self.vrfy_endpoint,
            vrfy_port: self.vrfy_port,
            pubsub_project: self.pubsub_project,
            pubsub_topic: self.pubsub_topic,
            pubsub_endpoint: self.pubsub_endpoint,
            pubsub_token: self.pubsub_token,
        }
    }
}
