//! Auth configuration types
//!
//! These types represent the runtime auth configuration resolved from
//! a config file or the environment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token endpoint used for IAM API-key exchange when none is configured
pub const DEFAULT_IAM_TOKEN_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Static bearer token
    Bearer {
        /// The bearer token
        token: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// API key sent verbatim in a header
    ApiKey {
        /// Header name (defaults to "Authorization")
        #[serde(default)]
        header_name: Option<String>,
        /// The API key value
        value: String,
    },

    /// IAM API key exchanged for a short-lived bearer token
    Iam {
        /// The IAM API key
        api_key: String,
        /// Token endpoint (defaults to [`DEFAULT_IAM_TOKEN_URL`])
        #[serde(default)]
        token_url: Option<String>,
    },
}

impl AuthConfig {
    /// Check if this auth type needs a token exchange before use
    pub fn requires_token(&self) -> bool {
        matches!(self, Self::Iam { .. })
    }

    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bearer { .. } => "bearer",
            Self::Basic { .. } => "basic",
            Self::ApiKey { .. } => "api_key",
            Self::Iam { .. } => "iam",
        }
    }
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now
    ///
    /// A lifetime too far in the future to represent never expires; one too
    /// far in the past is already expired.
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = chrono::TimeDelta::try_seconds(seconds)
            .and_then(|delta| Utc::now().checked_add_signed(delta));
        let expires_at = match expires_at {
            Some(at) => Some(at),
            None if seconds > 0 => None,
            None => Some(Utc::now()),
        };
        Self { token, expires_at }
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false, // No expiration = never expires
        }
    }
}
