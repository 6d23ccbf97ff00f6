use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use trust_dns_resolver::error::ResolveError;

use super::{Failure, Pipeline, Tier, VerificationRequest, Verdict};
use crate::mx::{DomainCache, Error as MxError, LookupMx, MxRecord};
use crate::vrfy::VrfyReply;
use crate::vrfy::tests::StubVerifier;

/// Zone DNS figée: domaines présents = MX connus, le reste = NXDOMAIN.
struct Zone {
    records: HashMap<&'static str, Vec<MxRecord>>,
    queries: AtomicUsize,
}

impl Zone {
    fn with_mail_domain(domain: &'static str) -> Self {
        let mut records = HashMap::new();
        records.insert(domain, vec![MxRecord::new(10, format!("mx.{domain}"))]);
        Self {
            records,
            queries: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LookupMx for Zone {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, MxError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.records.get(domain).cloned().ok_or_else(|| MxError::Lookup {
            source: ResolveError::from("no record found"),
        })
    }
}

struct BrokenResolver;

#[async_trait]
impl LookupMx for BrokenResolver {
    async fn lookup_mx(&self, _domain: &str) -> Result<Vec<MxRecord>, MxError> {
        panic!("resolver state corrupted");
    }
}

fn pipeline(verifier: StubVerifier) -> Pipeline<Zone, StubVerifier> {
    Pipeline::new(DomainCache::new(Zone::with_mail_domain("example.com")), verifier)
}

fn request(email: &str) -> VerificationRequest {
    VerificationRequest::new(email)
}

fn message(verdict: &Verdict) -> Option<String> {
    verdict.error_message()
}

#[test]
fn syntax_tier_scenarios() {
    let p = pipeline(StubVerifier::replying(VrfyReply::deliverable()));

    assert_eq!(p.syntax(&request("user@example.com")), Verdict::Valid);
    for email in ["plainaddress", "user@[invalid-literal"] {
        let verdict = p.syntax(&request(email));
        assert_eq!(message(&verdict).as_deref(), Some("Syntax error"), "{email}");
    }
}

#[tokio::test]
async fn simple_tier_checks_domain() {
    let p = pipeline(StubVerifier::unreachable());

    assert_eq!(p.simple(&request("user@example.com")).await, Verdict::Valid);
    let bad = p.simple(&request("user@baddomain.test")).await;
    assert_eq!(message(&bad).as_deref(), Some("Domain error"));
    let syntax = p.simple(&request("plainaddress")).await;
    assert_eq!(syntax, Verdict::invalid(Failure::Syntax));
}

#[tokio::test]
async fn simple_tier_hits_cache_on_repeat() {
    let p = pipeline(StubVerifier::unreachable());

    for _ in 0..3 {
        assert!(p.simple(&request("a@example.com")).await.is_valid());
        assert!(!p.simple(&request("b@baddomain.test")).await.is_valid());
    }
    assert_eq!(p.domains().resolver().queries.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn syntax_failure_skips_dns() {
    let p = pipeline(StubVerifier::unreachable());
    p.simple(&request("not an address")).await;
    assert!(p.domains().is_empty());
}

#[tokio::test]
async fn full_tier_returns_remote_verdict() {
    let p = pipeline(StubVerifier::replying(VrfyReply::deliverable()));
    assert_eq!(p.full(&request("user@example.com")).await, Verdict::Valid);

    let p = pipeline(StubVerifier::replying(VrfyReply::rejected(7, "blocked")));
    let verdict = p.full(&request("user@example.com")).await;
    assert_eq!(message(&verdict).as_deref(), Some("code:7|message:blocked"));
}

#[tokio::test]
async fn full_tier_never_calls_remote_after_gate_failure() {
    let p = pipeline(StubVerifier::replying(VrfyReply::deliverable()));

    let syntax = p.full(&request("plainaddress")).await;
    let domain = p.full(&request("user@baddomain.test")).await;

    assert_eq!(syntax, Verdict::invalid(Failure::Syntax));
    assert_eq!(domain, Verdict::invalid(Failure::Domain));
    assert_eq!(p.verifier.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn full_tier_times_out_slow_remote() {
    let p = pipeline(StubVerifier::delayed(
        VrfyReply::deliverable(),
        Duration::from_secs(30),
    ));
    let verdict = p.full(&request("user@example.com")).await;
    assert_eq!(message(&verdict).as_deref(), Some("Vrfy verification error"));
}

#[tokio::test]
async fn internal_faults_are_contained_per_tier() {
    let p = Pipeline::new(
        DomainCache::new(BrokenResolver),
        StubVerifier::replying(VrfyReply::deliverable()),
    );

    let simple = p.simple(&request("user@example.com")).await;
    let full = p.full(&request("user@example.com")).await;

    assert_eq!(simple, Verdict::invalid(Failure::Internal(Tier::Simple)));
    assert_eq!(message(&simple).as_deref(), Some("Simple verification error"));
    assert_eq!(message(&full).as_deref(), Some("Full verification error"));
    assert_eq!(p.verifier.calls(), 0);
}
