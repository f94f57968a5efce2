//! Pagination types and traits
//!
//! Defines the uniform page shape every list endpoint is converted into,
//! and the two seams the cursor is generic over: the parameters it merges
//! its token into, and the source it fetches pages from.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Link to another page of a collection
///
/// The service reports both an `href` and the bare `start` token; only
/// `start` is used for continuation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Absolute URL of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Opaque continuation token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl PageLink {
    /// Create a link carrying only a continuation token
    pub fn start(token: impl Into<String>) -> Self {
        Self {
            href: None,
            start: Some(token.into()),
        }
    }
}

/// One page of a list endpoint, independent of the resource type
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page, in server order
    pub items: Vec<T>,
    /// Link to the next page; absent on the last page
    pub next: Option<PageLink>,
    /// Link to the first page
    pub first: Option<PageLink>,
    /// Total number of items in the collection, when reported
    pub total_count: Option<i64>,
    /// Page size the server applied
    pub limit: Option<i64>,
}

impl<T> Page<T> {
    /// Create a page with the given items and no links
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            next: None,
            first: None,
            total_count: None,
            limit: None,
        }
    }

    /// Set the continuation token for the next page
    #[must_use]
    pub fn with_next(mut self, token: impl Into<String>) -> Self {
        self.next = Some(PageLink::start(token));
        self
    }

    /// Set the total count
    #[must_use]
    pub fn with_total_count(mut self, total: i64) -> Self {
        self.total_count = Some(total);
        self
    }

    /// Continuation token for the next page, if any
    ///
    /// An empty token is treated as absent.
    pub fn next_token(&self) -> Option<&str> {
        self.next
            .as_ref()
            .and_then(|link| link.start.as_deref())
            .filter(|token| !token.is_empty())
    }

    /// Check whether the server reported more pages
    pub fn has_more(&self) -> bool {
        self.next_token().is_some()
    }
}

/// Parameters of a paginated list call
///
/// The cursor owns the `start` and `limit` fields; everything else is the
/// caller's frozen filter set.
pub trait PageParams: Clone + Send + Sync {
    /// Set or clear the continuation token
    fn set_start(&mut self, start: Option<String>);

    /// Set or clear the page size
    fn set_limit(&mut self, limit: Option<i64>);

    /// Page size requested by the caller
    fn limit(&self) -> Option<i64>;
}

/// Something that can fetch one page of a list endpoint
///
/// Implemented by the service client once per list operation, and by
/// scripted sources in tests.
#[async_trait]
pub trait PageSource<P: PageParams>: Send + Sync {
    /// Item type of the collection
    type Item: Send;

    /// Fetch the page selected by `params`
    async fn fetch_page(&self, params: P) -> Result<Page<Self::Item>>;
}
