//! Tests for the transport module

use super::*;
use crate::error::{Error, Result};
use crate::types::{BackoffType, Method};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_transport_config_default() {
    let config = HttpTransportConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert_eq!(config.backoff_type, BackoffType::Exponential);
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("cnyes-news/"));
}

#[test]
fn test_http_transport_config_builder() {
    let config = HttpTransportConfig::builder()
        .timeout(Duration::from_secs(60))
        .max_retries(5)
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(200),
            Duration::from_secs(30),
        )
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.backoff_type, BackoffType::Linear);
    assert_eq!(config.initial_backoff, Duration::from_millis(200));
    assert_eq!(config.max_backoff, Duration::from_secs(30));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_transport_request_builder() {
    let request = TransportRequest::new()
        .query("page", "1")
        .query("limit", "30")
        .header("X-Request-Id", "abc123")
        .json(serde_json::json!({"key": "value"}));

    assert_eq!(request.method, Method::GET);
    assert_eq!(request.query.get("page"), Some(&"1".to_string()));
    assert_eq!(request.query.get("limit"), Some(&"30".to_string()));
    assert_eq!(
        request.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert!(request.body.is_some());
}

#[test]
fn test_transport_response_is_success() {
    assert!(TransportResponse::new(200, "").is_success());
    assert!(TransportResponse::new(204, "").is_success());
    assert!(!TransportResponse::new(301, "").is_success());
    assert!(!TransportResponse::new(404, "").is_success());
    assert!(!TransportResponse::new(500, "").is_success());
}

#[test]
fn test_calculate_backoff() {
    let transport = HttpTransport::with_config(
        HttpTransportConfig::builder()
            .backoff(
                BackoffType::Exponential,
                Duration::from_millis(100),
                Duration::from_secs(1),
            )
            .build(),
    );

    assert_eq!(transport.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(transport.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(transport.calculate_backoff(2), Duration::from_millis(400));
    // Clamped by max_backoff
    assert_eq!(transport.calculate_backoff(10), Duration::from_secs(1));

    let constant = HttpTransport::with_config(
        HttpTransportConfig::builder()
            .backoff(
                BackoffType::Constant,
                Duration::from_millis(50),
                Duration::from_secs(1),
            )
            .build(),
    );
    assert_eq!(constant.calculate_backoff(0), Duration::from_millis(50));
    assert_eq!(constant.calculate_backoff(5), Duration::from_millis(50));

    let linear = HttpTransport::with_config(
        HttpTransportConfig::builder()
            .backoff(
                BackoffType::Linear,
                Duration::from_millis(50),
                Duration::from_secs(1),
            )
            .build(),
    );
    assert_eq!(linear.calculate_backoff(0), Duration::from_millis(50));
    assert_eq!(linear.calculate_backoff(2), Duration::from_millis(150));
}

#[tokio::test]
async fn test_http_transport_get_with_query_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/news"))
        .and(query_param("page", "1"))
        .and(header("x-api-key", "secret"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "OK"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::with_config(
        HttpTransportConfig::builder()
            .header("x-api-key", "secret")
            .build(),
    );

    let mut request = TransportRequest::new().query("page", "1");
    request.url = format!("{}/api/news", mock_server.uri());

    let response = transport.send(request).await.unwrap();
    assert_eq!(response.status, 200);
    assert!(response.is_success());
    assert!(response.text.contains("OK"));
}

#[tokio::test]
async fn test_http_transport_retries_then_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_string("recovered"))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::with_config(
        HttpTransportConfig::builder()
            .max_retries(2)
            .backoff(
                BackoffType::Constant,
                Duration::from_millis(10),
                Duration::from_millis(10),
            )
            .build(),
    );

    let mut request = TransportRequest::new();
    request.url = format!("{}/flaky", mock_server.uri());

    let response = transport.send(request).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.text, "recovered");
}

#[tokio::test]
async fn test_http_transport_maps_client_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such category"))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new();
    let mut request = TransportRequest::new();
    request.url = format!("{}/missing", mock_server.uri());

    let err = transport.send(request).await.unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such category");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_transport_gives_up_after_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::with_config(
        HttpTransportConfig::builder()
            .max_retries(1)
            .backoff(
                BackoffType::Constant,
                Duration::from_millis(5),
                Duration::from_millis(5),
            )
            .build(),
    );

    let mut request = TransportRequest::new();
    request.url = format!("{}/down", mock_server.uri());

    let err = transport.send(request).await.unwrap_err();
    assert!(err.is_retryable());
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

// ============================================================================
// Adapter tests
// ============================================================================

#[derive(Clone)]
struct StubTransport {
    body: String,
    calls: Arc<AtomicUsize>,
}

impl StubTransport {
    fn new(body: impl Into<String>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                body: body.into(),
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, _request: TransportRequest) -> Result<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(TransportResponse::new(200, self.body.clone()))
    }
}

#[test]
fn test_adapters_compose_and_delegate() {
    let (stub, calls) = StubTransport::new("ok");
    let limiter = RateLimiter::new(&RateLimiterConfig::new(100, 10));
    let stack: Box<dyn Transport> =
        Box::new(LoggingTransport::new(ThrottledTransport::new(stub, limiter)));

    let response = tokio_test::block_on(stack.send(TransportRequest::new())).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.text, "ok");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_logging_transport_passes_errors_through() {
    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn send(&self, _request: TransportRequest) -> Result<TransportResponse> {
            Err(Error::http_status(502, "bad gateway"))
        }
    }

    let transport = LoggingTransport::new(FailingTransport);
    let err = transport.send(TransportRequest::new()).await.unwrap_err();
    match err {
        Error::HttpStatus { status, .. } => assert_eq!(status, 502),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}
