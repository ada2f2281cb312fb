//! Pagination engine
//!
//! # Overview
//!
//! A fixed control loop that drives a paged request/response exchange to
//! completion and folds per-page results into one aggregate. The loop lives
//! in [`PagedClient`]; the policy decisions (next request, end detection,
//! aggregation) come from a [`Paginator`].
//!
//! Exchanges are strictly sequential: each response is awaited and folded
//! before the next request is derived, because later requests depend on
//! fields of earlier responses.

mod client;
mod types;

pub use client::PagedClient;
pub use types::Paginator;
