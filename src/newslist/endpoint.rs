//! News-listing endpoint
//!
//! Binds one category URL and maps typed requests onto the query parameters
//! the API expects.

use super::types::{Category, NewsEnvelope, NewsListRequest, DEFAULT_BASE_URL};
use crate::client::Endpoint;
use crate::error::{Error, Result};
use crate::transport::{TransportRequest, TransportResponse};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use url::Url;

/// Endpoint for one category of the news-listing API
///
/// Generic over the item type `T` so callers can decode into
/// [`super::NewsItem`] or their own schema.
pub struct NewsListEndpoint<T> {
    url: String,
    _item: PhantomData<fn() -> T>,
}

impl<T> NewsListEndpoint<T> {
    /// Endpoint for a category under the default API base
    pub fn new(category: Category) -> Self {
        Self {
            url: category.url(DEFAULT_BASE_URL),
            _item: PhantomData,
        }
    }

    /// Endpoint for a category under a custom base URL
    ///
    /// The base is validated eagerly so a bad override fails before any
    /// request goes out.
    pub fn with_base_url(category: Category, base_url: &str) -> Result<Self> {
        Url::parse(base_url)?;
        Ok(Self {
            url: category.url(base_url),
            _item: PhantomData,
        })
    }
}

impl<T> std::fmt::Debug for NewsListEndpoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsListEndpoint")
            .field("url", &self.url)
            .finish()
    }
}

impl<T> Endpoint for NewsListEndpoint<T>
where
    T: DeserializeOwned + Send,
{
    type Request = NewsListRequest;
    type Response = NewsEnvelope<T>;

    fn url(&self) -> &str {
        &self.url
    }

    fn prepare_request(&self, request: &NewsListRequest) -> TransportRequest {
        TransportRequest::new()
            .query("startAt", request.start_at.timestamp().to_string())
            .query("endAt", request.end_at.timestamp().to_string())
            .query("limit", request.limit.to_string())
            .query("page", request.page.to_string())
    }

    fn parse_response(&self, response: TransportResponse) -> Result<NewsEnvelope<T>> {
        serde_json::from_str(&response.text).map_err(|e| {
            Error::parse(format!(
                "news listing body did not match the expected shape: {e}"
            ))
        })
    }
}
