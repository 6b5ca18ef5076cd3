//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the weather backend client and
//! provides configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::WeatherBackendAdapter;
pub use config::{AppConfig, PollingConfig};
pub use telemetry::{LoggingConfig, TelemetryError, init_logging};
