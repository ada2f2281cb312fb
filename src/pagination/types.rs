//! Pagination types and traits
//!
//! Defines the paging policy seam consulted by [`super::PagedClient`].

use crate::error::Result;

/// Paging policy for a request/response pair
///
/// The engine loop is fixed; a policy supplies the three decision points.
/// `origin` is the caller's untouched request template; policies consult it
/// to recover overall bounds that per-iteration requests no longer carry.
pub trait Paginator: Send + Sync {
    /// Typed request the policy derives
    type Request;
    /// Typed per-page response the policy inspects and folds
    type Response;

    /// Derive the next request
    ///
    /// `previous` is `None` exactly once, before the first exchange; the
    /// policy produces the first real request from the origin template.
    /// Must fail with an invalid-paging-state error instead of deriving a
    /// request that cannot make progress.
    fn next_request(
        &self,
        origin: &Self::Request,
        current: &Self::Request,
        previous: Option<&Self::Response>,
    ) -> Result<Self::Request>;

    /// Decide whether the exchange that produced `response` was the last one
    fn is_end(
        &self,
        origin: &Self::Request,
        current: &Self::Request,
        response: &Self::Response,
    ) -> bool;

    /// Fold all collected responses, in call order, into one response
    ///
    /// Implementations must preserve item order across pages and fail on an
    /// empty collection.
    fn aggregate(&self, collected: Vec<Self::Response>) -> Result<Self::Response>;
}
