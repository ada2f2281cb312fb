//! Transport adapters
//!
//! Decorators that wrap an inner transport without changing its contract:
//! request/response logging and rate-limit throttling. Adapters compose;
//! stacking order is the caller's choice.

use super::rate_limit::RateLimiter;
use super::types::{Transport, TransportRequest, TransportResponse};
use crate::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Logs every exchange at debug level, then delegates
#[derive(Debug)]
pub struct LoggingTransport<T> {
    inner: T,
}

impl<T> LoggingTransport<T> {
    /// Wrap an inner transport
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: Transport> Transport for LoggingTransport<T> {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        debug!(
            "Sending {:?} {} query={:?}",
            request.method, request.url, request.query
        );
        let response = self.inner.send(request).await?;
        debug!(
            "Received {} ({} bytes)",
            response.status,
            response.text.len()
        );
        Ok(response)
    }
}

/// Waits for a rate limiter permit before delegating
#[derive(Debug)]
pub struct ThrottledTransport<T> {
    inner: T,
    limiter: RateLimiter,
}

impl<T> ThrottledTransport<T> {
    /// Wrap an inner transport with the given limiter
    pub fn new(inner: T, limiter: RateLimiter) -> Self {
        Self { inner, limiter }
    }
}

#[async_trait]
impl<T: Transport> Transport for ThrottledTransport<T> {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.limiter.wait().await;
        self.inner.send(request).await
    }
}
