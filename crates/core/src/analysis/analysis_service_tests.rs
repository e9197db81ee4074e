//! Tests for AnalysisService validation and relay behavior.
//!
//! The client is replaced by a stub that counts calls, so every rejection
//! path can assert that nothing reached the analysis service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::analysis::{
    AnalysisClientTrait, AnalysisService, AnalysisServiceTrait, UpstreamResponse,
};
use crate::errors::{Error, UpstreamError, ValidationError};
use crate::tickers::{TickerDirectory, TickerRecord};

// =========================================================================
// Stub client
// =========================================================================

enum StubReply {
    Respond(UpstreamResponse),
    Fail,
}

struct StubClient {
    reply: StubReply,
    calls: AtomicUsize,
    companies: Mutex<Vec<String>>,
}

impl StubClient {
    fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: StubReply::Respond(UpstreamResponse::new(status, body.as_bytes())),
            calls: AtomicUsize::new(0),
            companies: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: StubReply::Fail,
            calls: AtomicUsize::new(0),
            companies: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn companies(&self) -> Vec<String> {
        self.companies.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisClientTrait for StubClient {
    async fn analyze_company(&self, company_name: &str) -> Result<UpstreamResponse, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.companies.lock().unwrap().push(company_name.to_string());
        match &self.reply {
            StubReply::Respond(response) => Ok(response.clone()),
            StubReply::Fail => Err(UpstreamError::Transport("connection refused".into())),
        }
    }
}

fn directory() -> Arc<TickerDirectory> {
    Arc::new(TickerDirectory::from_records(vec![
        TickerRecord::new("AAPL", "Apple Inc."),
        TickerRecord::new("MSFT", "Microsoft Corporation"),
    ]))
}

fn service(client: Arc<StubClient>) -> AnalysisService {
    AnalysisService::new(directory(), client)
}

// =========================================================================
// Validation
// =========================================================================

#[tokio::test]
async fn blank_symbol_is_rejected_without_upstream_call() {
    let client = StubClient::responding(200, "{}");
    let service = service(client.clone());

    for input in ["", " ", "\t\n  "] {
        let err = service.analyze(input).await.unwrap_err();
        assert!(
            matches!(err, Error::Validation(ValidationError::EmptySymbol)),
            "{input:?}: {err:?}"
        );
    }
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn unknown_symbol_is_rejected_without_upstream_call() {
    let client = StubClient::responding(200, "{}");
    let service = service(client.clone());

    let err = service.analyze("ZZZZ").await.unwrap_err();
    match err {
        Error::Validation(ValidationError::UnknownSymbol(symbol)) => assert_eq!(symbol, "ZZZZ"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn unknown_symbol_message_is_user_facing() {
    let service = service(StubClient::responding(200, "{}"));
    let err = service.analyze("zzzz").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid ticker symbol");
}

// =========================================================================
// Translation and relay
// =========================================================================

#[tokio::test]
async fn symbol_is_normalized_and_translated_to_company_name() {
    let client = StubClient::responding(200, "{}");
    let service = service(client.clone());

    service.analyze("  aapl ").await.unwrap();
    service.analyze("Msft").await.unwrap();

    assert_eq!(client.calls(), 2);
    assert_eq!(
        client.companies(),
        vec!["Apple Inc.".to_string(), "Microsoft Corporation".to_string()]
    );
}

#[tokio::test]
async fn success_body_and_status_are_relayed_verbatim() {
    let body = r#"{"symbol":"AAPL","average_sentiment":0.42,"articles":[]}"#;
    let service = service(StubClient::responding(200, body));

    let response = service.analyze("AAPL").await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, body.as_bytes());
    assert_eq!(response.content_type(), "application/json");
}

#[tokio::test]
async fn upstream_error_status_is_relayed_not_synthesized() {
    let body = r#"{"detail":"No articles found for 'Apple Inc.'"}"#;
    let client = StubClient::responding(503, body);
    let service = service(client.clone());

    let response = service.analyze("AAPL").await.unwrap();
    assert_eq!(response.status, 503);
    assert_eq!(response.body, body.as_bytes());
    assert!(!response.is_success());
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn transport_failure_is_an_upstream_error() {
    let client = StubClient::failing();
    let service = service(client.clone());

    let err = service.analyze("AAPL").await.unwrap_err();
    assert!(matches!(err, Error::Upstream(UpstreamError::Transport(_))));
    assert_eq!(client.calls(), 1);
}
