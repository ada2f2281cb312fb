//! Single-shot API client
//!
//! Turns one typed request into a transport request, performs exactly one
//! transport exchange, and parses the result into one typed response.
//! Pagination lives a layer up, in [`crate::pagination`].

use crate::error::Result;
use crate::transport::{Transport, TransportRequest, TransportResponse};
use crate::types::Method;
use async_trait::async_trait;

// ============================================================================
// Client trait
// ============================================================================

/// One typed request in, one typed response out
///
/// Implemented by [`RestClient`] for single exchanges and by
/// [`crate::pagination::PagedClient`] for aggregated multi-page exchanges,
/// so callers can swap one for the other.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Typed request this client accepts
    type Request: Send;
    /// Typed response this client produces
    type Response: Send;

    /// Perform the exchange
    async fn send_and_receive(&self, request: Self::Request) -> Result<Self::Response>;
}

// ============================================================================
// Endpoint trait
// ============================================================================

/// Category-specific request/response shaping for one fixed endpoint
///
/// An endpoint binds a URL and method at construction and supplies the two
/// pure transformations around the transport exchange. Neither direction
/// performs I/O.
pub trait Endpoint: Send + Sync {
    /// Typed request this endpoint accepts
    type Request: Send + Sync;
    /// Typed response this endpoint produces
    type Response: Send;

    /// Target URL, bound at construction
    fn url(&self) -> &str;

    /// HTTP method for this endpoint
    fn method(&self) -> Method {
        Method::GET
    }

    /// Map the typed request onto a transport request (query, headers, body)
    fn prepare_request(&self, request: &Self::Request) -> TransportRequest;

    /// Decode the raw transport response into the typed response
    fn parse_response(&self, response: TransportResponse) -> Result<Self::Response>;
}

// ============================================================================
// REST client
// ============================================================================

/// Single-shot client over a transport and an endpoint
///
/// Binds the endpoint's URL and method onto the prepared request, makes
/// exactly one transport call, and hands the raw response to the endpoint
/// for decoding. Parse failures are not retried here; they propagate.
pub struct RestClient<E> {
    transport: Box<dyn Transport>,
    endpoint: E,
}

impl<E: Endpoint> RestClient<E> {
    /// Create a client from a transport and an endpoint
    pub fn new(transport: impl Transport + 'static, endpoint: E) -> Self {
        Self {
            transport: Box::new(transport),
            endpoint,
        }
    }

    /// Access the bound endpoint
    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for RestClient<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<E: Endpoint> ApiClient for RestClient<E> {
    type Request = E::Request;
    type Response = E::Response;

    async fn send_and_receive(&self, request: Self::Request) -> Result<Self::Response> {
        let mut prepared = self.endpoint.prepare_request(&request);
        prepared.url = self.endpoint.url().to_string();
        prepared.method = self.endpoint.method();

        let raw = self.transport.send(prepared).await?;
        self.endpoint.parse_response(raw)
    }
}
