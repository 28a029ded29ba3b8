//! Client configuration.
//!
//! Configuration is built from defaults, then environment variables
//! (`NOTEKEEP_*`), then explicit overrides by the caller.

use notekeep_core::defaults;
use std::env;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<ConfigError> for notekeep_core::Error {
    fn from(e: ConfigError) -> Self {
        notekeep_core::Error::Config(e.to_string())
    }
}

/// Settings for [`crate::NotesClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin; the notes resource lives under `/api/notes`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::SERVER_URL.to_string(),
            timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            user_agent: defaults::USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url`, defaults for everything else.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let base_url =
            env::var(defaults::ENV_URL).unwrap_or_else(|_| defaults::SERVER_URL.to_string());
        let timeout_secs = env::var(defaults::ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::REQUEST_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_secs,
            ..Self::default()
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "base_url must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Absolute URL of the notes resource.
    pub fn notes_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            defaults::NOTES_PATH
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, defaults::SERVER_URL);
        assert_eq!(config.timeout_secs, defaults::REQUEST_TIMEOUT_SECS);
        assert!(config.user_agent.starts_with("notekeep/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_notes_url_trims_trailing_slash() {
        let config = ClientConfig::with_base_url("http://localhost:9000/");
        assert_eq!(config.notes_url(), "http://localhost:9000/api/notes");
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let config = ClientConfig::with_base_url("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_scheme() {
        let config = ClientConfig::with_base_url("localhost:8080");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_error_converts_to_core_error() {
        let err: notekeep_core::Error = ConfigError::Validation("bad".to_string()).into();
        assert!(matches!(err, notekeep_core::Error::Config(_)));
    }
}
