//! Continuation-token cursor
//!
//! `PageCursor` walks a paginated list endpoint one page at a time. It owns
//! the `start`/`limit` fields of the request; the caller's filters are
//! frozen at construction.
//!
//! Calling [`PageCursor::get_next`] on an exhausted cursor fails with
//! [`Error::InvalidUsage`] rather than returning an empty page.

use super::types::{PageParams, PageSource};
use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};
use std::fmt;

/// Forward-only cursor over a paginated collection
pub struct PageCursor<'a, S, P>
where
    S: PageSource<P> + ?Sized,
    P: PageParams,
{
    source: &'a S,
    query_params: P,
    page_size: Option<i64>,
    next_token: Option<String>,
    started: bool,
    total_count: Option<i64>,
}

impl<'a, S, P> PageCursor<'a, S, P>
where
    S: PageSource<P> + ?Sized,
    P: PageParams,
{
    /// Create a cursor over `source` filtered by `params`
    ///
    /// A `limit` set on `params` becomes the page size; a `start` set on
    /// `params` is ignored, the first request never carries a token.
    pub fn new(source: &'a S, params: P) -> Self {
        let page_size = params.limit();
        let mut query_params = params;
        query_params.set_start(None);
        query_params.set_limit(None);

        Self {
            source,
            query_params,
            page_size,
            next_token: None,
            started: false,
            total_count: None,
        }
    }

    /// Override the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Check whether another page can be fetched
    ///
    /// True before the first fetch, and afterwards for as long as the last
    /// page carried a continuation token.
    pub fn has_next(&self) -> bool {
        !self.started || self.next_token.is_some()
    }

    /// Check whether the server has reported the last page
    pub fn is_exhausted(&self) -> bool {
        self.started && self.next_token.is_none()
    }

    /// Token that will be sent as `start` on the next fetch
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Page size sent as `limit`, if any
    pub fn page_size(&self) -> Option<i64> {
        self.page_size
    }

    /// The frozen filter parameters
    pub fn query_params(&self) -> &P {
        &self.query_params
    }

    /// Total collection size from the most recent page that reported one
    pub fn total_count(&self) -> Option<i64> {
        self.total_count
    }

    /// Fetch the next page and return its items
    ///
    /// On failure the cursor is left exactly as it was, so the same call can
    /// be retried without skipping or repeating a page.
    pub async fn get_next(&mut self) -> Result<Vec<S::Item>> {
        if !self.has_next() {
            return Err(Error::invalid_usage(
                "get_next called on an exhausted page cursor",
            ));
        }

        let mut params = self.query_params.clone();
        params.set_start(self.next_token.clone());
        params.set_limit(self.page_size);

        let page = self.source.fetch_page(params).await?;

        self.started = true;
        self.next_token = page.next_token().map(str::to_owned);
        if page.total_count.is_some() {
            self.total_count = page.total_count;
        }

        Ok(page.items)
    }

    /// Fetch every remaining page and concatenate the items in page order
    ///
    /// Starts from the cursor's current position. If any page fails, the
    /// items gathered so far are dropped, the cursor is rewound to where
    /// the call started and only the error is returned, so retrying
    /// `get_all` yields the full remaining set.
    pub async fn get_all(&mut self) -> Result<Vec<S::Item>> {
        let started = self.started;
        let next_token = self.next_token.clone();
        let total_count = self.total_count;

        let mut items = Vec::new();
        while self.has_next() {
            match self.get_next().await {
                Ok(page) => items.extend(page),
                Err(e) => {
                    self.started = started;
                    self.next_token = next_token;
                    self.total_count = total_count;
                    return Err(e);
                }
            }
        }
        Ok(items)
    }

    /// Turn the cursor into a stream of items, fetching pages lazily
    ///
    /// The stream ends after the last page, or right after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<S::Item>> + 'a
    where
        S: 'a,
        P: 'a,
        S::Item: 'a,
    {
        stream::try_unfold(self, |mut cursor| async move {
            if !cursor.has_next() {
                return Ok::<_, Error>(None);
            }
            let items = cursor.get_next().await?;
            let page = stream::iter(items.into_iter().map(Ok::<S::Item, Error>));
            Ok(Some((page, cursor)))
        })
        .try_flatten()
    }
}

impl<S, P> fmt::Debug for PageCursor<'_, S, P>
where
    S: PageSource<P> + ?Sized,
    P: PageParams + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCursor")
            .field("query_params", &self.query_params)
            .field("page_size", &self.page_size)
            .field("next_token", &self.next_token)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}
