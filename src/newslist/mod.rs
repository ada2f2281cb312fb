//! Domain adapter for the cnyes (Anue) news-listing API
//!
//! Features:
//! - Typed request/response model for the listing endpoints
//! - Per-category endpoints sharing one wire shape
//! - Date-window paging policy for [`crate::pagination::PagedClient`]

mod endpoint;
mod paging;
mod types;

pub use endpoint::NewsListEndpoint;
pub use paging::{DateWindowPaginator, MAX_WINDOW_DAYS};
pub use types::{
    Category, NewsEnvelope, NewsItem, NewsListRequest, NewsPage, StockTag, DEFAULT_BASE_URL,
};
