//! Backend health check
//!
//! Checks whether the weather backend is reachable within a timeout and
//! reports how long the check took.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::ports::WeatherBackendPort;

/// Default timeout for the health check in seconds
const DEFAULT_HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

/// Health of the weather backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendHealth {
    /// Whether the backend answered its health endpoint successfully
    pub healthy: bool,
    /// Response time in milliseconds (absent on timeout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl BackendHealth {
    /// Create a healthy status
    #[must_use]
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            healthy: true,
            response_time_ms: Some(response_time_ms),
            error: None,
            checked_at: chrono::Utc::now(),
        }
    }

    /// Create an unhealthy status
    #[must_use]
    pub fn unhealthy(error: impl Into<String>, response_time_ms: Option<u64>) -> Self {
        Self {
            healthy: false,
            response_time_ms,
            error: Some(error.into()),
            checked_at: chrono::Utc::now(),
        }
    }

    /// Create an unhealthy status due to timeout
    #[must_use]
    pub fn timeout() -> Self {
        Self::unhealthy("Health check timed out", None)
    }
}

/// Service probing the weather backend's health endpoint
pub struct HealthService {
    backend: Arc<dyn WeatherBackendPort>,
    timeout: Duration,
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService")
            .field("backend", &"<WeatherBackendPort>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HealthService {
    /// Create a health service with the default timeout
    #[must_use]
    pub fn new(backend: Arc<dyn WeatherBackendPort>) -> Self {
        Self {
            backend,
            timeout: Duration::from_secs(DEFAULT_HEALTH_CHECK_TIMEOUT_SECS),
        }
    }

    /// Override the check timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Probe the backend
    #[instrument(skip(self))]
    pub async fn check(&self) -> BackendHealth {
        let start = Instant::now();

        match timeout(self.timeout, self.backend.is_available()).await {
            Ok(true) => {
                let elapsed = elapsed_ms(start);
                debug!(response_time_ms = elapsed, "Weather backend healthy");
                BackendHealth::healthy(elapsed)
            },
            Ok(false) => {
                let elapsed = elapsed_ms(start);
                warn!(response_time_ms = elapsed, "Weather backend unhealthy");
                BackendHealth::unhealthy("Backend reported unhealthy", Some(elapsed))
            },
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "Weather backend health check timed out");
                BackendHealth::timeout()
            },
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
