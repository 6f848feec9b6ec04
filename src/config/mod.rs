//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `KARATE_ADMIN` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use karate_admin::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Events stored in {}", config.storage.data_dir.display());
//! ```

mod environment;
mod error;
mod logging;
mod remote;
mod storage;

pub use environment::Environment;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use remote::RemoteConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development setup backed by files under `./data/events`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Event storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Tournament API access
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `KARATE_ADMIN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `KARATE_ADMIN__STORAGE__BACKEND=memory` -> `storage.backend = memory`
    /// - `KARATE_ADMIN__REMOTE__BASE_URL=...` -> `remote.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("KARATE_ADMIN")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.remote.validate(&self.environment)?;
        self.logging.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "KARATE_ADMIN__ENVIRONMENT",
        "KARATE_ADMIN__STORAGE__BACKEND",
        "KARATE_ADMIN__STORAGE__DATA_DIR",
        "KARATE_ADMIN__REMOTE__BASE_URL",
        "KARATE_ADMIN__REMOTE__TIMEOUT_SECS",
        "KARATE_ADMIN__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert!(config.remote.base_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("KARATE_ADMIN__STORAGE__BACKEND", "memory");
        env::set_var("KARATE_ADMIN__STORAGE__DATA_DIR", "/var/lib/karate");
        env::set_var("KARATE_ADMIN__REMOTE__BASE_URL", "https://api.example.com");
        env::set_var("KARATE_ADMIN__REMOTE__TIMEOUT_SECS", "30");
        env::set_var("KARATE_ADMIN__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/karate"));
        assert_eq!(config.remote.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.remote.timeout_secs, 30);
        assert!(config.logging.json);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("KARATE_ADMIN__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_production_rejects_plain_http_api() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("KARATE_ADMIN__ENVIRONMENT", "production");
        env::set_var("KARATE_ADMIN__REMOTE__BASE_URL", "http://api.example.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::ApiUrlMustBeHttps));
    }
}
