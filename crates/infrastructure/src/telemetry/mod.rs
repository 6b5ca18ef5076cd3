//! Logging infrastructure
//!
//! Sets up the `tracing` subscriber used by the binaries.

mod logging;

pub use logging::{LoggingConfig, TelemetryError, init_logging};
