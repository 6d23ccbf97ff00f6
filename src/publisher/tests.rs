use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{
    EventTransport, OutcomeEvent, PubSubTransport, Publisher, TransportError, should_log,
};
use crate::pipeline::{Failure, VerificationRequest, Verdict};

/// Transport qui relaie chaque envoi (topic, charge) sur un canal.
struct ChannelTransport {
    sent: mpsc::UnboundedSender<(String, Vec<u8>)>,
    fail: bool,
}

impl ChannelTransport {
    fn new(fail: bool) -> (Self, mpsc::UnboundedReceiver<(String, Vec<u8>)>) {
        let (sent, received) = mpsc::unbounded_channel();
        (Self { sent, fail }, received)
    }
}

#[async_trait]
impl EventTransport for ChannelTransport {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), TransportError> {
        let _ = self.sent.send((topic.to_string(), payload));
        if self.fail {
            Err(TransportError::other("topic unreachable"))
        } else {
            Ok(())
        }
    }
}

struct HangingTransport;

#[async_trait]
impl EventTransport for HangingTransport {
    async fn publish(&self, _topic: &str, _payload: Vec<u8>) -> Result<(), TransportError> {
        std::future::pending().await
    }
}

async fn wait_until(cond: impl Fn() -> bool) {
    for _ in 0..200 {
        if cond() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached");
}

#[tokio::test]
async fn publishes_one_event_per_call() {
    let (transport, mut received) = ChannelTransport::new(false);
    let publisher = Publisher::new(Arc::new(transport), "outcomes");
    let request = VerificationRequest::new("user@example.com");

    let verdict = publisher.publish(&request, Verdict::invalid(Failure::Domain));
    assert_eq!(verdict, Verdict::invalid(Failure::Domain));

    let (topic, payload) = received.recv().await.expect("one event");
    assert_eq!(topic, "outcomes");
    let event = OutcomeEvent::decode(&payload).expect("decodable event");
    assert_eq!(event.email, "user@example.com");
    assert!(!event.valid);
    assert_eq!(event.error_message.as_deref(), Some("Domain error"));
    assert!(received.try_recv().is_err());
}

#[tokio::test]
async fn failing_transport_never_alters_result() {
    let (transport, mut received) = ChannelTransport::new(true);
    let publisher = Publisher::new(Arc::new(transport), "outcomes");
    let request = VerificationRequest::new("user@example.com");

    for _ in 0..3 {
        assert_eq!(publisher.publish(&request, Verdict::Valid), Verdict::Valid);
    }
    for _ in 0..3 {
        received.recv().await.expect("attempted publish");
    }
    wait_until(|| publisher.error_count() == 3).await;
}

#[tokio::test]
async fn hanging_transport_does_not_block_caller() {
    let publisher = Publisher::new(Arc::new(HangingTransport), "outcomes");
    let request = VerificationRequest::new("user@example.com");

    let verdict = tokio::time::timeout(Duration::from_millis(50), async {
        publisher.publish(&request, Verdict::Valid)
    })
    .await
    .expect("publish returns immediately");
    assert!(verdict.is_valid());
    assert_eq!(publisher.error_count(), 0);
}

#[test]
fn publish_without_runtime_is_swallowed() {
    let (transport, _received) = ChannelTransport::new(false);
    let publisher = Publisher::new(Arc::new(transport), "outcomes");
    let verdict = publisher.publish(&VerificationRequest::new("x@example.com"), Verdict::Valid);
    assert!(verdict.is_valid());
}

#[test]
fn errors_are_logged_every_hundred_thousand() {
    assert!(!should_log(1));
    assert!(!should_log(99_999));
    assert!(should_log(100_000));
    assert!(!should_log(100_001));
    assert!(should_log(200_000));
}

#[test]
fn valid_event_has_no_error_message() {
    let event = OutcomeEvent::new("user@example.com", &Verdict::Valid);
    let decoded = OutcomeEvent::decode(&event.encode().unwrap()).unwrap();
    assert_eq!(decoded, event);
    assert_eq!(decoded.error_message, None);
}

#[test]
fn pubsub_topic_url() {
    let transport = PubSubTransport::new("http://localhost:8085/", "sandbox", Some(String::new()))
        .expect("client builds");
    assert_eq!(
        transport.topic_url("outcomes"),
        "http://localhost:8085/v1/projects/sandbox/topics/outcomes:publish"
    );
}
