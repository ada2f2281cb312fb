//! Wire model for the news-listing API
//!
//! Typed request/response shapes matching the listing endpoints, plus the
//! category catalog. The envelope is generic over the item type so callers
//! can decode into [`NewsItem`] or their own schema.

use crate::error::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Categories
// ============================================================================

/// Default base URL for the news-listing API
pub const DEFAULT_BASE_URL: &str = "https://api.cnyes.com/media/api/v1";

/// News category served by the listing API
///
/// Every category shares the same request/response shape and paging
/// behavior; only the endpoint URL and item payload differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Front-page headline stories
    Headline,
    /// Taiwan stock market stories
    TwStock,
}

impl Category {
    /// All known categories
    pub const ALL: [Category; 2] = [Category::Headline, Category::TwStock];

    /// URL path slug for this category
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Headline => "headline",
            Category::TwStock => "tw_stock",
        }
    }

    /// Full listing URL for this category under the given base
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/newslist/category/{}",
            base_url.trim_end_matches('/'),
            self.slug()
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "headline" => Ok(Category::Headline),
            "twstock" | "tw_stock" | "tw-stock" => Ok(Category::TwStock),
            other => Err(Error::config(format!("unknown category: {other}"))),
        }
    }
}

// ============================================================================
// Request
// ============================================================================

/// One news-listing request: a date window plus paging coordinates
///
/// `start_at`/`end_at` are inclusive instants; `page` is 1-based. Requests
/// are cheap to clone so the paging engine can keep the caller's value as an
/// immutable template while deriving per-iteration requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsListRequest {
    /// Inclusive window start
    pub start_at: DateTime<Utc>,
    /// Inclusive window end
    pub end_at: DateTime<Utc>,
    /// Page size
    pub limit: u32,
    /// 1-based page number
    pub page: u32,
}

impl NewsListRequest {
    /// Default page size, matching the live site's listing requests
    pub const DEFAULT_LIMIT: u32 = 30;

    /// Request for the given window, first page, default page size
    pub fn new(start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        Self {
            start_at,
            end_at,
            limit: Self::DEFAULT_LIMIT,
            page: 1,
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page number
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

// ============================================================================
// Response envelope
// ============================================================================

/// Top-level response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsEnvelope<T> {
    /// Paged payload
    pub items: NewsPage<T>,
    /// API status message, usually `OK`
    #[serde(default)]
    pub message: String,
    /// API status code, stringly typed on the wire
    #[serde(rename = "statusCode", default)]
    pub status_code: String,
}

/// One page of listings plus the API's paging metadata
///
/// `last_page` and `total` describe the queried window, not the caller's
/// whole range; the paging policy accounts for that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsPage<T> {
    /// 1-based page this response covers
    pub current_page: u32,
    /// Last page available for the queried window
    pub last_page: u32,
    /// Total items across the queried window
    pub total: u64,
    /// Page size the API applied
    pub per_page: u32,
    /// Items on this page, in served order
    pub data: Vec<T>,
    /// API-provided URL for the next page, if any
    #[serde(default)]
    pub next_page_url: Option<String>,
    /// API-provided URL for the previous page, if any
    #[serde(default)]
    pub prev_page_url: Option<String>,
    /// 1-based index of the first item on this page
    #[serde(default)]
    pub from: Option<u64>,
    /// 1-based index of the last item on this page
    #[serde(default)]
    pub to: Option<u64>,
}

// ============================================================================
// Items
// ============================================================================

/// One news story as served by the listing API
///
/// Only the fields this crate consumes are modeled; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Story identifier
    pub news_id: u64,
    /// Headline text
    pub title: String,
    /// Publish time, Unix seconds
    pub publish_at: i64,
    /// Teaser text, when present
    #[serde(default)]
    pub summary: Option<String>,
    /// Stocks tagged on the story
    #[serde(default)]
    pub market: Vec<StockTag>,
}

impl NewsItem {
    /// Publish time as a UTC instant, when representable
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.publish_at, 0).single()
    }

    /// Whether this story tags the given stock code
    pub fn mentions_stock(&self, code: &str) -> bool {
        self.market.iter().any(|stock| stock.code == code)
    }
}

/// A stock tagged on a story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockTag {
    /// Exchange code, e.g. `2330`
    #[serde(default)]
    pub code: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Full symbol, e.g. `TWS:2330:STOCK`
    #[serde(default)]
    pub symbol: Option<String>,
}
