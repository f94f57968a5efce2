// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]

//! # Governance Client
//!
//! Typed client for a cloud governance and compliance service: rules,
//! control libraries, profiles, attachments, scopes and scan reports.
//!
//! Every list operation is paginated with opaque continuation tokens. A
//! single generic cursor, [`PageCursor`], walks any of them.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use governance_client::{ListRulesParams, Result, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let service = ServiceConfig::from_env()?.build_service()?;
//!
//!     let mut pager = service.rules_pager(ListRulesParams {
//!         limit: Some(50),
//!         ..Default::default()
//!     });
//!     while pager.has_next() {
//!         for rule in pager.get_next().await? {
//!             println!("{} {}", rule.id, rule.description);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    GovernanceService                         │
//! │  list_* / get_* / create_* / replace_* / delete_*  *_pager() │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────┬────────────────────────┐
//! │  Pagination  │        HTTP          │         Auth           │
//! ├──────────────┼──────────────────────┼────────────────────────┤
//! │ PageCursor   │ Retry / Backoff      │ Bearer / Basic         │
//! │ PageSource   │ Rate Limit           │ API key                │
//! │ Page         │ ETag responses       │ IAM token exchange     │
//! └──────────────┴──────────────────────┴────────────────────────┘
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// Generic continuation-token pagination
pub mod pagination;

/// Request and response models
pub mod models;

/// Service operations and pagers
pub mod service;

/// Service configuration loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use pagination::{Page, PageCursor, PageLink, PageParams, PageSource};
pub use service::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
