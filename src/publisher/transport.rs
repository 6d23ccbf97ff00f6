use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Serialize;
use tracing::trace;

use super::{PUBLISH_TIMEOUT, TransportError};

/// Transport des événements: une charge utile opaque vers un topic nommé.
/// Aucune garantie de livraison n'est attendue.
#[async_trait]
pub trait EventTransport: Send + Sync {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), TransportError>;
}

/// API REST Pub/Sub (`topics.publish`). Fonctionne aussi contre l'émulateur
/// (`PUBSUB_ENDPOINT=http://localhost:8085`, sans jeton).
pub struct PubSubTransport {
    client: reqwest::Client,
    endpoint: String,
    project: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct PublishBody {
    messages: Vec<PubsubMessage>,
}

#[derive(Serialize)]
struct PubsubMessage {
    data: String,
}

impl PubSubTransport {
    pub fn new(
        endpoint: impl Into<String>,
        project: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(PUBLISH_TIMEOUT)
            .build()
            .map_err(TransportError::client)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            project: project.into(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    pub(crate) fn topic_url(&self, topic: &str) -> String {
        format!(
            "{}/v1/projects/{}/topics/{}:publish",
            self.endpoint.trim_end_matches('/'),
            self.project,
            topic
        )
    }
}

#[async_trait]
impl EventTransport for PubSubTransport {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), TransportError> {
        let body = PublishBody {
            messages: vec![PubsubMessage {
                data: STANDARD.encode(payload),
            }],
        };

        let mut request = self.client.post(self.topic_url(topic)).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(TransportError::http)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Rejected {
                topic: topic.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        trace!(topic, "outcome event published");
        Ok(())
    }
}
