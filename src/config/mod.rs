//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CASCADE_ENGINE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use cascade_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Log level {}", config.logging.level);
//! ```

mod engine;
mod error;
mod logging;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields the
/// reference configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Engine configuration (policy file, scoring mode)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CASCADE_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CASCADE_ENGINE__ENGINE__POLICY_PATH=policy.yaml` -> `engine.policy_path`
    /// - `CASCADE_ENGINE__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CASCADE_ENGINE")
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
    /// Returns `ValidationError` for an empty log level or a policy path
    /// with an unsupported extension.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("CASCADE_ENGINE__ENGINE__POLICY_PATH");
        env::remove_var("CASCADE_ENGINE__ENGINE__WEIGHTED_SCORING");
        env::remove_var("CASCADE_ENGINE__ENGINE__DEFAULT_TIME_ON_DUTY_MINUTES");
        env::remove_var("CASCADE_ENGINE__LOGGING__LEVEL");
        env::remove_var("CASCADE_ENGINE__LOGGING__JSON");
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.engine.policy_path.is_none());
        assert!(config.engine.weighted_scoring);
        assert_eq!(config.engine.default_time_on_duty_minutes, 0);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CASCADE_ENGINE__ENGINE__POLICY_PATH", "policy.yaml");
        env::set_var("CASCADE_ENGINE__ENGINE__WEIGHTED_SCORING", "false");
        env::set_var("CASCADE_ENGINE__ENGINE__DEFAULT_TIME_ON_DUTY_MINUTES", "480");
        env::set_var("CASCADE_ENGINE__LOGGING__LEVEL", "debug");
        env::set_var("CASCADE_ENGINE__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.policy_path.as_deref(), Some("policy.yaml"));
        assert!(!config.engine.weighted_scoring);
        assert_eq!(config.engine.default_time_on_duty_minutes, 480);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unsupported_policy_path() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CASCADE_ENGINE__ENGINE__POLICY_PATH", "policy.ini");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnsupportedPolicyFormat(_))
        ));
    }
}
