//! Paged client
//!
//! The fixed orchestration loop that drives a wrapped single-shot client
//! through every page and presents one aggregate response.

use super::types::Paginator;
use crate::client::ApiClient;
use crate::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Drives a single-shot client through all pages and aggregates the result
///
/// The loop is sealed here; customization enters only through the
/// [`Paginator`] policy. Cursor state (origin template, current request,
/// collected responses) is local to one `send_and_receive` call; nothing
/// persists across calls.
///
/// Implements [`ApiClient`] itself, so a paged client can stand wherever a
/// single-shot client is expected.
pub struct PagedClient<C, P> {
    client: C,
    paginator: P,
}

impl<C, P> PagedClient<C, P> {
    /// Wrap a client with a paging policy
    pub fn new(client: C, paginator: P) -> Self {
        Self { client, paginator }
    }

    /// Access the wrapped client
    pub fn inner(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C, P> ApiClient for PagedClient<C, P>
where
    C: ApiClient,
    C::Request: Clone + std::fmt::Debug + Sync,
    P: Paginator<Request = C::Request, Response = C::Response>,
{
    type Request = C::Request;
    type Response = C::Response;

    /// Fetch every page reachable from `request` and aggregate the results
    ///
    /// The caller's request is kept as an immutable origin template; each
    /// iteration derives a fresh request, sends it, and folds the response
    /// into an ordered accumulator. At least one exchange always happens.
    /// Any client or policy error aborts the call; no partial aggregate is
    /// returned.
    async fn send_and_receive(&self, request: Self::Request) -> Result<Self::Response> {
        let origin = request.clone();
        let mut current = request;
        let mut collected: Vec<C::Response> = Vec::new();

        loop {
            current = self
                .paginator
                .next_request(&origin, &current, collected.last())?;
            debug!("Request {}: {:?}", collected.len() + 1, current);

            let response = self.client.send_and_receive(current.clone()).await?;
            let done = self.paginator.is_end(&origin, &current, &response);
            collected.push(response);
            if done {
                break;
            }
        }

        debug!("Pagination complete after {} responses", collected.len());
        self.paginator.aggregate(collected)
    }
}
