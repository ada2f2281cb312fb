//! Transport layer
//!
//! One logical request in, one logical response out. Everything above this
//! seam works with typed requests; everything below it talks HTTP.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Adapters**: Logging and throttling decorators over any transport

mod adapters;
mod http;
mod rate_limit;
mod types;

pub use adapters::{LoggingTransport, ThrottledTransport};
pub use http::{HttpTransport, HttpTransportConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use types::{Transport, TransportRequest, TransportResponse};

#[cfg(test)]
mod tests;
