// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # cnyes-news
//!
//! A minimal, Rust-native client for the cnyes (Anue) paginated news-listing
//! API. One call fetches a whole date range and returns a single aggregated
//! response, however many pages and query windows that takes.
//!
//! ## Features
//!
//! - **Full-range fetches**: Walk every page of a date range in one call
//! - **Date-window paging**: Split long ranges into API-sized windows and page within each
//! - **Pluggable policies**: The `Paginator` trait keeps paging decisions out of the request loop
//! - **Transport stack**: Retries with backoff, throttling and request logging as composable layers
//! - **Typed wire model**: Serde types for the news-listing envelope and items
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chrono::{TimeZone, Utc};
//! use cnyes_news::client::{ApiClient, RestClient};
//! use cnyes_news::newslist::{
//!     Category, DateWindowPaginator, NewsItem, NewsListEndpoint, NewsListRequest,
//! };
//! use cnyes_news::pagination::PagedClient;
//! use cnyes_news::transport::HttpTransport;
//! use cnyes_news::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let endpoint: NewsListEndpoint<NewsItem> = NewsListEndpoint::new(Category::TwStock);
//!     let client = PagedClient::new(
//!         RestClient::new(HttpTransport::new(), endpoint),
//!         DateWindowPaginator::default(),
//!     );
//!
//!     let request = NewsListRequest::new(
//!         Utc.with_ymd_and_hms(2021, 5, 1, 0, 0, 0).unwrap(),
//!         Utc.with_ymd_and_hms(2021, 6, 30, 0, 0, 0).unwrap(),
//!     );
//!
//!     let news = client.send_and_receive(request).await?;
//!     println!("fetched {} stories", news.items.data.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         PagedClient                          │
//! │  send_and_receive(request) → aggregated Response             │
//! │  derive next request → exchange → collect → check end        │
//! └──────────────────────────────────────────────────────────────┘
//!                 │                           │
//! ┌───────────────┴──────────────┐ ┌──────────┴─────────────────┐
//! │          RestClient          │ │          Paginator         │
//! │  Endpoint: URL + prepare +   │ │  next_request / is_end /   │
//! │  parse per exchange          │ │  aggregate (DateWindow)    │
//! └───────────────┬──────────────┘ └────────────────────────────┘
//!                 │
//! ┌───────────────┴──────────────┐
//! │          Transport           │
//! │  HTTP retry with backoff,    │
//! │  throttling, logging         │
//! └──────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Transport layer with retry, throttling and logging
pub mod transport;

/// Single-shot API client and endpoint binding
pub mod client;

/// Paged request/response orchestration
pub mod pagination;

/// News-listing wire model, endpoints and paging policy
pub mod newslist;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use client::{ApiClient, Endpoint, RestClient};
pub use pagination::{PagedClient, Paginator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
