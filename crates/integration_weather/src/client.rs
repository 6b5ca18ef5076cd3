//! Weather backend client
//!
//! HTTP client for the CanWeatherWatch weather backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentConditions, WeatherAlert, decode_alerts, decode_conditions};

const CURRENT_PATH: &str = "/api/weather/current";
const ALERTS_PATH: &str = "/api/weather/alerts";
const REGIONAL_ALERTS_PATH: &str = "/api/weather/alerts/regions";
const HEALTH_PATH: &str = "/health";

/// Weather backend client errors
#[derive(Debug, Error)]
pub enum WeatherApiError {
    /// The HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the backend failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the backend
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Backend is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// Backend base URL (default: <http://localhost:8000>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather backend operations
#[async_trait]
pub trait WeatherApiClient: Send + Sync {
    /// Get current conditions at a coordinate
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherApiError>;

    /// Get active alerts at a coordinate
    async fn get_alerts(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<WeatherAlert>, WeatherApiError>;

    /// Get active alerts across all predefined cities
    async fn get_regional_alerts(&self) -> Result<Vec<WeatherAlert>, WeatherApiError>;

    /// Check if the backend is reachable and healthy
    async fn is_healthy(&self) -> bool;
}

/// `reqwest`-based implementation
#[derive(Debug)]
pub struct HttpWeatherApiClient {
    client: Client,
    config: WeatherApiConfig,
}

impl HttpWeatherApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &WeatherApiConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Issue a GET and decode the body as JSON
    async fn get_json(
        &self,
        path: &str,
        coordinate: Option<(f64, f64)>,
    ) -> Result<Value, WeatherApiError> {
        let url = self.endpoint(path);
        let mut request = self.client.get(&url);
        if let Some((lat, lon)) = coordinate {
            request = request.query(&[("lat", lat), ("lon", lon)]);
        }

        debug!(url = %url, "Calling weather backend");

        let response = request
            .send()
            .await
            .map_err(|e| WeatherApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherApiError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherApiError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherApiError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherApiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherApiClient for HttpWeatherApiClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherApiError> {
        let body = self
            .get_json(CURRENT_PATH, Some((latitude, longitude)))
            .await?;
        Ok(decode_conditions(&body))
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_alerts(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<WeatherAlert>, WeatherApiError> {
        let body = self
            .get_json(ALERTS_PATH, Some((latitude, longitude)))
            .await?;
        let alerts = decode_alerts(body);
        debug!(count = alerts.len(), "Received point alerts");
        Ok(alerts)
    }

    #[instrument(skip(self))]
    async fn get_regional_alerts(&self) -> Result<Vec<WeatherAlert>, WeatherApiError> {
        let body = self.get_json(REGIONAL_ALERTS_PATH, None).await?;
        let alerts = decode_alerts(body);
        debug!(count = alerts.len(), "Received regional alerts");
        Ok(alerts)
    }

    async fn is_healthy(&self) -> bool {
        match self.client.get(self.endpoint(HEALTH_PATH)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "Weather backend health check failed");
                false
            },
        }
    }
}
