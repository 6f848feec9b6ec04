//! Tournament API configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::Environment;
use crate::adapters::TournamentApiConfig;

/// Tournament API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the tournament REST API; sync is disabled when unset
    pub base_url: Option<String>,

    /// Bearer token for the API
    pub api_token: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl RemoteConfig {
    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the API client configuration, if a base URL is configured
    pub fn api_config(&self) -> Option<TournamentApiConfig> {
        let base_url = self.base_url.as_deref()?;
        let mut config = TournamentApiConfig::new(base_url).with_timeout(self.timeout());
        if let Some(token) = &self.api_token {
            config = config.with_token(token.expose_secret().as_str());
        }
        Some(config)
    }

    /// Validate remote configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidApiUrl);
            }
            if environment.is_production() && !url.starts_with("https://") {
                return Err(ValidationError::ApiUrlMustBeHttps);
            }
        }
        Ok(())
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_token: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> RemoteConfig {
        RemoteConfig {
            base_url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_remote_defaults() {
        let config = RemoteConfig::default();
        assert!(config.base_url.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert!(config.api_config().is_none());
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_invalid_url_scheme() {
        let config = with_url("ftp://api.example.com");
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidApiUrl)
        );
    }

    #[test]
    fn test_production_requires_https() {
        let config = with_url("http://api.example.com");
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::ApiUrlMustBeHttps)
        );
    }

    #[test]
    fn test_timeout_bounds() {
        let config = RemoteConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTimeout)
        );
    }

    #[test]
    fn test_api_config_carries_url_and_timeout() {
        let config = RemoteConfig {
            base_url: Some("https://api.example.com/".to_string()),
            api_token: Some(Secret::new("token".to_string())),
            timeout_secs: 5,
        };
        let api = config.api_config().unwrap();
        assert_eq!(api.base_url, "https://api.example.com");
        assert_eq!(api.timeout, Duration::from_secs(5));
    }
}
