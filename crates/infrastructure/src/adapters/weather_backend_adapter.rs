//! Weather backend adapter - Implements WeatherBackendPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherBackendPort;
use async_trait::async_trait;
use domain::{Alert, ConditionsSnapshot, Coordinate};
use integration_weather::{
    CurrentConditions, HttpWeatherApiClient, WeatherAlert, WeatherApiClient, WeatherApiConfig,
    WeatherApiError,
};
use tracing::{debug, instrument};

/// Adapter for the CanWeatherWatch weather backend
pub struct WeatherBackendAdapter {
    client: HttpWeatherApiClient,
}

impl std::fmt::Debug for WeatherBackendAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherBackendAdapter")
            .field("base_url", &self.client.config().base_url)
            .finish()
    }
}

impl WeatherBackendAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherApiConfig) -> Result<Self, ApplicationError> {
        let client = HttpWeatherApiClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration error to application error
    fn map_error(err: WeatherApiError) -> ApplicationError {
        match err {
            WeatherApiError::ConnectionFailed(e) => ApplicationError::Internal(e),
            WeatherApiError::RequestFailed(e) | WeatherApiError::ServiceUnavailable(e) => {
                ApplicationError::ExternalService(e)
            },
            WeatherApiError::ParseError(e) => ApplicationError::Parse(e),
            WeatherApiError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    fn map_conditions(conditions: CurrentConditions) -> ConditionsSnapshot {
        ConditionsSnapshot {
            temperature: conditions.temperature,
            condition: conditions.condition,
        }
    }

    fn map_alert(alert: WeatherAlert) -> Alert {
        Alert {
            id: alert.id,
            title: alert.title,
            description: alert.description,
            severity: alert.severity,
            alert_type: alert.alert_type,
            city: alert.city,
        }
    }

    fn map_alerts(alerts: Vec<WeatherAlert>) -> Vec<Alert> {
        alerts.into_iter().map(Self::map_alert).collect()
    }
}

#[async_trait]
impl WeatherBackendPort for WeatherBackendAdapter {
    #[instrument(skip(self), fields(coordinate = %coordinate))]
    async fn get_conditions(
        &self,
        coordinate: &Coordinate,
    ) -> Result<ConditionsSnapshot, ApplicationError> {
        let conditions = self
            .client
            .get_current(coordinate.latitude(), coordinate.longitude())
            .await
            .map_err(Self::map_error)?;
        Ok(Self::map_conditions(conditions))
    }

    #[instrument(skip(self), fields(coordinate = %coordinate))]
    async fn get_point_alerts(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Vec<Alert>, ApplicationError> {
        let alerts = self
            .client
            .get_alerts(coordinate.latitude(), coordinate.longitude())
            .await
            .map_err(Self::map_error)?;
        Ok(Self::map_alerts(alerts))
    }

    #[instrument(skip(self))]
    async fn get_regional_alerts(&self) -> Result<Vec<Alert>, ApplicationError> {
        let alerts = self
            .client
            .get_regional_alerts()
            .await
            .map_err(Self::map_error)?;
        debug!(count = alerts.len(), "Mapped regional alerts");
        Ok(Self::map_alerts(alerts))
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
