//! Date-window paging policy
//!
//! The API bounds every listing query to a date window and pages within it.
//! This policy walks the pages inside a window, then advances the window one
//! day past its end, until the caller's whole range is covered.

use super::types::{NewsEnvelope, NewsListRequest};
use crate::error::{Error, Result};
use crate::pagination::Paginator;
use chrono::Duration;
use std::marker::PhantomData;

/// Widest window the API accepts, in days
///
/// Queries spanning much more than two months are rejected outright, so the
/// default stays well under that.
pub const MAX_WINDOW_DAYS: i64 = 50;

/// Page-within-date-window policy for news listings
///
/// Derived requests only ever move forward: the page number grows inside a
/// window, and each new window starts the day after the previous one ended.
/// A response that would send either direction backwards is reported as an
/// invalid paging state instead of looping.
pub struct DateWindowPaginator<T> {
    window: Duration,
    _item: PhantomData<fn() -> T>,
}

impl<T> DateWindowPaginator<T> {
    /// Policy with the given window length
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            _item: PhantomData,
        }
    }

    /// Policy with a window length in whole days
    pub fn with_window_days(days: i64) -> Self {
        Self::new(Duration::days(days))
    }

    /// Window length in effect
    pub fn window(&self) -> Duration {
        self.window
    }

    /// First window of a range: starts at the origin start, runs one window
    /// length, clamped to the origin end.
    fn first_window(&self, origin: &NewsListRequest) -> NewsListRequest {
        let mut request = origin.clone();
        request.end_at = std::cmp::min(origin.start_at + self.window, origin.end_at);
        request
    }
}

impl<T> Default for DateWindowPaginator<T> {
    fn default() -> Self {
        Self::with_window_days(MAX_WINDOW_DAYS)
    }
}

impl<T> std::fmt::Debug for DateWindowPaginator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateWindowPaginator")
            .field("window", &self.window)
            .finish()
    }
}

impl<T: Send> Paginator for DateWindowPaginator<T> {
    type Request = NewsListRequest;
    type Response = NewsEnvelope<T>;

    fn next_request(
        &self,
        origin: &NewsListRequest,
        current: &NewsListRequest,
        previous: Option<&NewsEnvelope<T>>,
    ) -> Result<NewsListRequest> {
        let previous = match previous {
            Some(previous) => previous,
            None => return Ok(self.first_window(origin)),
        };

        let items = &previous.items;
        if items.current_page < current.page {
            return Err(Error::paging_state(format!(
                "page went backwards: requested page {}, response reports page {}",
                current.page, items.current_page
            )));
        }

        let mut next = current.clone();
        if items.current_page < items.last_page {
            // More pages left in this window
            next.page = items.current_page + 1;
            return Ok(next);
        }

        // Window exhausted; advance to the day after its end
        let start = current.end_at + Duration::days(1);
        if start <= current.start_at {
            return Err(Error::paging_state(format!(
                "date window failed to advance: next start {start} is not past {}",
                current.start_at
            )));
        }

        next.page = 1;
        next.start_at = start;
        next.end_at = std::cmp::min(start + self.window, origin.end_at);
        Ok(next)
    }

    fn is_end(
        &self,
        origin: &NewsListRequest,
        current: &NewsListRequest,
        response: &NewsEnvelope<T>,
    ) -> bool {
        response.items.current_page >= response.items.last_page
            && current.end_at >= origin.end_at
    }

    fn aggregate(&self, mut collected: Vec<NewsEnvelope<T>>) -> Result<NewsEnvelope<T>> {
        let mut aggregate = collected
            .pop()
            .ok_or_else(|| Error::paging_state("cannot aggregate zero responses"))?;

        let mut data: Vec<T> = collected
            .into_iter()
            .flat_map(|envelope| envelope.items.data)
            .collect();
        data.extend(std::mem::take(&mut aggregate.items.data));
        aggregate.items.data = data;
        Ok(aggregate)
    }
}
