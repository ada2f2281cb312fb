//! Transport request/response values and the transport trait
//!
//! One `TransportRequest` in, one `TransportResponse` out. Everything above
//! this seam works with typed requests; everything below it talks HTTP.

use crate::error::Result;
use crate::types::{JsonValue, Method, StringMap};
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// A single transport-level request
///
/// Carries everything one exchange needs. The endpoint URL and method are
/// bound by the single-shot client; adapters must pass the value through
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct TransportRequest {
    /// Target URL
    pub url: String,
    /// HTTP method
    pub method: Method,
    /// Request headers
    pub headers: StringMap,
    /// Query parameters
    pub query: StringMap,
    /// Request body (JSON)
    pub body: Option<JsonValue>,
}

impl TransportRequest {
    /// Create an empty transport request
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// A single transport-level response
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub text: String,
}

impl TransportResponse {
    /// Create a response with the given status and body, no headers
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            text: text.into(),
        }
    }

    /// Check whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one logical request and returns one logical response
///
/// Stateless per call. Implementations own connection handling, retries and
/// throttling; callers treat any returned error as fatal for the exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request/response exchange
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

#[async_trait]
impl Transport for Box<dyn Transport> {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        (**self).send(request).await
    }
}
