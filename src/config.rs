//! Service configuration
//!
//! A `ServiceConfig` can be loaded from a YAML or JSON file or from
//! `GOVERNANCE_*` environment variables, and turned into a ready
//! [`GovernanceService`].

use crate::auth::AuthConfig;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use crate::service::GovernanceService;
use crate::types::{BackoffType, StringMap};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Environment variable holding the service endpoint
pub const ENV_URL: &str = "GOVERNANCE_URL";
/// Environment variable holding the service instance id
pub const ENV_INSTANCE_ID: &str = "GOVERNANCE_INSTANCE_ID";
/// Environment variable selecting the authentication scheme
pub const ENV_AUTH_TYPE: &str = "GOVERNANCE_AUTH_TYPE";
pub const ENV_APIKEY: &str = "GOVERNANCE_APIKEY";
pub const ENV_BEARER_TOKEN: &str = "GOVERNANCE_BEARER_TOKEN";
/// Environment variable overriding the IAM token endpoint
pub const ENV_AUTH_URL: &str = "GOVERNANCE_AUTH_URL";

// ============================================================================
// Service Config
// ============================================================================

/// Everything needed to reach one service instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service endpoint, e.g. `https://us-south.compliance.cloud.ibm.com`
    #[serde(default)]
    pub service_url: String,

    /// Service instance all requests are scoped to
    #[serde(default)]
    pub instance_id: String,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Transport settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Extra headers sent on every request
    #[serde(default)]
    pub headers: StringMap,
}

// ============================================================================
// HTTP Config
// ============================================================================

/// Transport settings as they appear in a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff configuration
    #[serde(default)]
    pub backoff: BackoffConfig,

    /// Client-side rate limit; `null` disables it
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            backoff: BackoffConfig::default(),
            rate_limit: default_rate_limit(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

/// Backoff configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Backoff type
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::default(),
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    100
}

fn default_max_ms() -> u64 {
    60_000
}

// ============================================================================
// Loading
// ============================================================================

impl ServiceConfig {
    /// Load and validate a config file; `.json` files are parsed as JSON,
    /// anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Build a config from `GOVERNANCE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable lookup
    ///
    /// Without `GOVERNANCE_AUTH_TYPE` the scheme is inferred: an API key
    /// selects IAM, a bearer token selects bearer, otherwise none.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let auth_type = match var(ENV_AUTH_TYPE) {
            Some(kind) => kind.to_ascii_lowercase(),
            None if var(ENV_APIKEY).is_some() => "iam".to_string(),
            None if var(ENV_BEARER_TOKEN).is_some() => "bearer".to_string(),
            None => "none".to_string(),
        };

        let auth = match auth_type.as_str() {
            "iam" => AuthConfig::Iam {
                api_key: var(ENV_APIKEY).ok_or_else(|| Error::missing_field(ENV_APIKEY))?,
                token_url: var(ENV_AUTH_URL),
            },
            "bearer" | "bearertoken" => AuthConfig::Bearer {
                token: var(ENV_BEARER_TOKEN)
                    .ok_or_else(|| Error::missing_field(ENV_BEARER_TOKEN))?,
            },
            "none" | "noauth" => AuthConfig::None,
            other => {
                return Err(Error::invalid_value(
                    ENV_AUTH_TYPE,
                    format!("unsupported authentication type '{other}'"),
                ))
            }
        };

        let config = Self {
            service_url: var(ENV_URL).ok_or_else(|| Error::missing_field(ENV_URL))?,
            instance_id: var(ENV_INSTANCE_ID)
                .ok_or_else(|| Error::missing_field(ENV_INSTANCE_ID))?,
            auth,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check required fields and credentials
    pub fn validate(&self) -> Result<()> {
        if self.service_url.trim().is_empty() {
            return Err(Error::missing_field("service_url"));
        }
        url::Url::parse(&self.service_url)
            .map_err(|e| Error::invalid_value("service_url", e.to_string()))?;

        if self.instance_id.trim().is_empty() {
            return Err(Error::missing_field("instance_id"));
        }

        if self.http.timeout_seconds == 0 {
            return Err(Error::invalid_value(
                "http.timeout_seconds",
                "must be greater than zero",
            ));
        }

        let empty_credential = match &self.auth {
            AuthConfig::None => false,
            AuthConfig::Bearer { token } => token.is_empty(),
            AuthConfig::Basic { username, .. } => username.is_empty(),
            AuthConfig::ApiKey { value, .. } => value.is_empty(),
            AuthConfig::Iam { api_key, .. } => api_key.is_empty(),
        };
        if empty_credential {
            return Err(Error::config(format!(
                "{} authentication is configured without credentials",
                self.auth.kind()
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Transport configuration derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.service_url.clone())
            .timeout(Duration::from_secs(self.http.timeout_seconds))
            .max_retries(self.http.max_retries)
            .backoff(
                self.http.backoff.backoff_type,
                Duration::from_millis(self.http.backoff.initial_ms),
                Duration::from_millis(self.http.backoff.max_ms),
            );

        builder = match &self.http.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };

        for (key, value) in &self.headers {
            builder = builder.header(key.clone(), value.clone());
        }

        builder.build()
    }

    /// Validate and build an authenticated service client
    pub fn build_service(&self) -> Result<GovernanceService> {
        self.validate()?;
        let http = HttpClient::with_auth(self.http_config(), self.auth.clone())?;
        debug!(
            "Built service client for instance {} ({} auth)",
            self.instance_id,
            self.auth.kind()
        );
        Ok(GovernanceService::new(http, self.instance_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
service_url: https://us-south.compliance.cloud.ibm.com
instance_id: inst-1
auth:
  type: iam
  api_key: secret
http:
  timeout_seconds: 10
  backoff:
    type: linear
    initial_ms: 250
  rate_limit: null
headers:
  X-Correlation-ID: abc
"#;
        let config = ServiceConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.instance_id, "inst-1");
        assert_eq!(
            config.auth,
            AuthConfig::Iam {
                api_key: "secret".to_string(),
                token_url: None
            }
        );
        assert_eq!(config.http.timeout_seconds, 10);
        assert_eq!(config.http.max_retries, 3);
        assert_eq!(config.http.backoff.backoff_type, BackoffType::Linear);
        assert_eq!(config.http.backoff.max_ms, 60_000);
        assert!(config.http.rate_limit.is_none());
        assert_eq!(config.headers.get("X-Correlation-ID").unwrap(), "abc");
    }

    #[test]
    fn test_default_http_config() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.backoff.backoff_type, BackoffType::Exponential);
        assert_eq!(config.rate_limit, Some(RateLimiterConfig::default()));
    }

    #[test]
    fn test_from_file_yaml_and_json() {
        let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(yaml, "service_url: https://svc.example.com\ninstance_id: inst-1").unwrap();
        let config = ServiceConfig::from_file(yaml.path()).unwrap();
        assert_eq!(config.auth, AuthConfig::None);

        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            json,
            r#"{{"service_url": "https://svc.example.com", "instance_id": "inst-2",
                "auth": {{"type": "bearer", "token": "t"}}}}"#
        )
        .unwrap();
        let config = ServiceConfig::from_file(json.path()).unwrap();
        assert_eq!(config.instance_id, "inst-2");
        assert_eq!(config.auth.kind(), "bearer");
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServiceConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let err = ServiceConfig::from_yaml_str("instance_id: inst-1").unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == "service_url"));

        let err = ServiceConfig::from_yaml_str("service_url: https://svc").unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == "instance_id"));

        let err =
            ServiceConfig::from_yaml_str("service_url: not a url\ninstance_id: i").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_validate_rejects_empty_credentials() {
        let config = ServiceConfig {
            service_url: "https://svc".to_string(),
            instance_id: "inst-1".to_string(),
            auth: AuthConfig::Iam {
                api_key: String::new(),
                token_url: None,
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_env_infers_iam() {
        let config = ServiceConfig::from_lookup(lookup(&[
            (ENV_URL, "https://svc.example.com"),
            (ENV_INSTANCE_ID, "inst-1"),
            (ENV_APIKEY, "key"),
            (ENV_AUTH_URL, "https://iam.test/identity/token"),
        ]))
        .unwrap();

        assert_eq!(
            config.auth,
            AuthConfig::Iam {
                api_key: "key".to_string(),
                token_url: Some("https://iam.test/identity/token".to_string())
            }
        );
    }

    #[test]
    fn test_env_explicit_bearer_requires_token() {
        let err = ServiceConfig::from_lookup(lookup(&[
            (ENV_URL, "https://svc.example.com"),
            (ENV_INSTANCE_ID, "inst-1"),
            (ENV_AUTH_TYPE, "BEARER"),
        ]))
        .unwrap_err();
        assert!(
            matches!(err, Error::MissingConfigField { ref field } if field == ENV_BEARER_TOKEN)
        );
    }

    #[test]
    fn test_env_unknown_auth_type() {
        let err = ServiceConfig::from_lookup(lookup(&[
            (ENV_URL, "https://svc.example.com"),
            (ENV_INSTANCE_ID, "inst-1"),
            (ENV_AUTH_TYPE, "kerberos"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_env_requires_url() {
        let err = ServiceConfig::from_lookup(lookup(&[(ENV_INSTANCE_ID, "inst-1")])).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == ENV_URL));
    }

    #[test]
    fn test_http_config_mapping() {
        let mut config = ServiceConfig {
            service_url: "https://svc".to_string(),
            instance_id: "inst-1".to_string(),
            ..Default::default()
        };
        config.http.rate_limit = None;
        config
            .headers
            .insert("X-Test".to_string(), "1".to_string());

        let http = config.http_config();
        assert_eq!(http.base_url.as_deref(), Some("https://svc"));
        assert_eq!(http.timeout, Duration::from_secs(30));
        assert!(http.rate_limit.is_none());
        assert_eq!(http.default_headers.get("X-Test").unwrap(), "1");
    }

    #[test]
    fn test_build_service() {
        let config = ServiceConfig {
            service_url: "https://svc".to_string(),
            instance_id: "inst-1".to_string(),
            ..Default::default()
        };
        let service = config.build_service().unwrap();
        assert_eq!(service.instance_id(), "inst-1");
    }
}
