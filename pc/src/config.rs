//! Copilot Chat configuration
//!
//! Everything the client needs from its environment is read exactly once at
//! startup into [`Config`], which is then passed by reference to the
//! transport and the REPL.

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Environment variable holding the Copilot endpoint URL
pub const COPILOT_URL_ENV: &str = "PULUMI_COPILOT_URL";

/// Environment variable holding the Pulumi access token
pub const ACCESS_TOKEN_ENV: &str = "PULUMI_ACCESS_TOKEN";

/// Configuration errors, all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),
}

/// Endpoint and credential for the Copilot service
#[derive(Clone)]
pub struct Config {
    /// Copilot conversation endpoint
    pub endpoint: String,

    /// Pulumi access token, sent as `Authorization: token <token>`
    pub access_token: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset and empty variables are both treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key).filter(|value| !value.is_empty()).ok_or_else(|| {
                debug!(%key, "from_lookup: variable missing");
                ConfigError::Missing(key)
            })
        };

        let endpoint = require(COPILOT_URL_ENV)?;
        let access_token = require(ACCESS_TOKEN_ENV)?;

        Ok(Self { endpoint, access_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_loads_both_variables() {
        let config = Config::from_lookup(lookup_from(&[
            (COPILOT_URL_ENV, "https://api.pulumi.com/api/ai/chat/preview"),
            (ACCESS_TOKEN_ENV, "pul-123"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "https://api.pulumi.com/api/ai/chat/preview");
        assert_eq!(config.access_token, "pul-123");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[(COPILOT_URL_ENV, "http://localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ACCESS_TOKEN_ENV)));
        assert!(err.to_string().contains("PULUMI_ACCESS_TOKEN"));
    }

    #[test]
    fn test_empty_url_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[(COPILOT_URL_ENV, ""), (ACCESS_TOKEN_ENV, "pul-123")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(COPILOT_URL_ENV)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config {
            endpoint: "http://localhost".to_string(),
            access_token: "pul-secret".to_string(),
        };
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("http://localhost"));
        assert!(!rendered.contains("pul-secret"));
    }
}
