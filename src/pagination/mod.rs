//! Pagination module
//!
//! Every list endpoint of the service pages with an opaque `start` token:
//! each response carries `next.start` until the last page, and the token is
//! echoed back verbatim as the `start` query parameter.
//!
//! # Overview
//!
//! - [`Page`] - the uniform page shape each collection converts into
//! - [`PageParams`] - list parameters the cursor can merge its token into
//! - [`PageSource`] - fetches one page; implemented per list operation
//! - [`PageCursor`] - the token-tracking cursor (single page, drain-all, stream)

mod cursor;
mod types;

pub use cursor::PageCursor;
pub use types::{Page, PageLink, PageParams, PageSource};
