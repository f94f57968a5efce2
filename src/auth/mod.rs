//! Authentication module
//!
//! Supports: Bearer, Basic, API key header, IAM API-key exchange
//!
//! The `Authenticator` applies the configured credentials to each request
//! and caches exchanged IAM tokens until shortly before they expire.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken, DEFAULT_IAM_TOKEN_URL};
