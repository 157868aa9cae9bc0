//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `GREEN_GUARDIAN`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use green_guardian::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod classifier;
mod error;
mod server;
mod vision;

pub use classifier::ClassifierConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig, DEFAULT_MAX_UPLOAD_BYTES};
pub use vision::VisionConfig;

use serde::Deserialize;

/// Unprefixed key name accepted as a fallback for `vision.gemini_api_key`.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, limits)
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini vision configuration
    #[serde(default)]
    pub vision: VisionConfig,

    /// Waste classifier configuration
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GREEN_GUARDIAN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to a bare `GEMINI_API_KEY` for the vision key
    ///
    /// # Environment Variable Format
    ///
    /// - `GREEN_GUARDIAN__SERVER__PORT=5000` -> `server.port = 5000`
    /// - `GREEN_GUARDIAN__CLASSIFIER__ENDPOINT=...` -> `classifier.endpoint = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(key) = std::env::var(GEMINI_API_KEY_ENV) {
            builder = builder.set_default("vision.gemini_api_key", key)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("GREEN_GUARDIAN")
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
    /// Returns `ValidationError` if any configuration value is invalid,
    /// including a missing Gemini key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.vision.validate()?;
        self.classifier.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "GREEN_GUARDIAN__VISION__GEMINI_API_KEY",
        "GREEN_GUARDIAN__SERVER__PORT",
        "GREEN_GUARDIAN__SERVER__ENVIRONMENT",
        "GREEN_GUARDIAN__CLASSIFIER__ENDPOINT",
        GEMINI_API_KEY_ENV,
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("GREEN_GUARDIAN__VISION__GEMINI_API_KEY", "AIza-prefixed");
        env::set_var("GREEN_GUARDIAN__SERVER__PORT", "8088");
        env::set_var(
            "GREEN_GUARDIAN__CLASSIFIER__ENDPOINT",
            "http://localhost:8501/v1/models/waste:predict",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert_eq!(config.server.port, 8088);
        assert_eq!(
            config.vision.gemini_api_key.as_deref(),
            Some("AIza-prefixed")
        );
        assert_eq!(
            config.classifier.endpoint(),
            Some("http://localhost:8501/v1/models/waste:predict")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bare_gemini_key_is_accepted() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(GEMINI_API_KEY_ENV, "AIza-bare");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.vision.gemini_api_key.as_deref(), Some("AIza-bare"));
    }

    #[test]
    fn test_prefixed_key_wins_over_bare_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(GEMINI_API_KEY_ENV, "AIza-bare");
        env::set_var("GREEN_GUARDIAN__VISION__GEMINI_API_KEY", "AIza-prefixed");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(
            result.unwrap().vision.gemini_api_key.as_deref(),
            Some("AIza-prefixed")
        );
    }

    #[test]
    fn test_missing_key_fails_validation() {
        let config = AppConfig::default();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("GEMINI_API_KEY"))
        );
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("GREEN_GUARDIAN__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_invalid_port_is_a_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("GREEN_GUARDIAN__SERVER__PORT", "not-a-port");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
