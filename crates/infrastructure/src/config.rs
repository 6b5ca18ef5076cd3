//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `CANWEATHER_` environment variables. Nested keys use a double
//! underscore, e.g. `CANWEATHER_BACKEND__BASE_URL` or
//! `CANWEATHER_POLLING__INTERVAL_SECS`.

use std::path::Path;
use std::time::Duration;

use config::ConfigError;
use integration_weather::WeatherApiConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::telemetry::LoggingConfig;

/// Default configuration file name (extension resolved by the `config` crate)
const DEFAULT_CONFIG_FILE: &str = "canweather";

/// Prefix for environment variable overrides
const ENV_PREFIX: &str = "CANWEATHER";

/// Regional polling configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Seconds between scheduled regional alert fetches (default: 300)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

const fn default_interval_secs() -> u64 {
    300
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl PollingConfig {
    /// Polling interval as a duration
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather backend connection
    #[serde(default)]
    pub backend: WeatherApiConfig,

    /// Regional alert polling
    #[serde(default)]
    pub polling: PollingConfig,

    /// Logging output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an explicit file (which must exist) or the
    /// default file, then apply environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value fails to parse
    /// or validate.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::build(path, environment())
    }

    fn build(path: Option<&Path>, env: config::Environment) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let defaults = Self::default();
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("backend.base_url", defaults.backend.base_url)?
            .set_default("backend.timeout_secs", defaults.backend.timeout_secs)?
            .set_default("polling.interval_secs", defaults.polling.interval_secs)?
            .set_default("logging.filter", defaults.logging.filter)?
            .set_default("logging.json", defaults.logging.json)?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables
            .add_source(env);

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(
            base_url = %config.backend.base_url,
            interval_secs = config.polling.interval_secs,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check values the type system cannot
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.backend.base_url.as_str();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "backend.base_url must start with http:// or https://, got '{base_url}'"
            )));
        }
        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "backend.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.polling.interval_secs == 0 {
            return Err(ConfigError::Message(
                "polling.interval_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
