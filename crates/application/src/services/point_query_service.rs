//! Point query flow
//!
//! Turns a clicked coordinate into a [`PointWeatherResult`] by fetching the
//! current conditions and the point alerts concurrently.

use std::sync::Arc;

use domain::{Coordinate, PointWeatherResult};
use tracing::{debug, instrument, warn};

use crate::ports::WeatherBackendPort;

/// Service answering point queries against the weather backend
#[derive(Clone)]
pub struct PointQueryService {
    backend: Arc<dyn WeatherBackendPort>,
}

impl std::fmt::Debug for PointQueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointQueryService")
            .field("backend", &"<WeatherBackendPort>")
            .finish()
    }
}

impl PointQueryService {
    /// Create a new point query service
    #[must_use]
    pub fn new(backend: Arc<dyn WeatherBackendPort>) -> Self {
        Self { backend }
    }

    /// Query conditions and alerts for a coordinate
    ///
    /// Both backend requests are in flight before either is awaited, and both
    /// run to completion. If either fails the error is logged and an empty
    /// result for `coordinate` is returned instead, so this never fails.
    #[instrument(skip(self), fields(coordinate = %coordinate))]
    pub async fn query(&self, coordinate: Coordinate) -> PointWeatherResult {
        let (conditions, alerts) = tokio::join!(
            self.backend.get_conditions(&coordinate),
            self.backend.get_point_alerts(&coordinate),
        );

        match (conditions, alerts) {
            (Ok(conditions), Ok(alerts)) => {
                debug!(
                    temperature = ?conditions.temperature,
                    alert_count = alerts.len(),
                    "Point query completed"
                );
                PointWeatherResult::new(coordinate, conditions, alerts)
            },
            (Err(e), _) | (_, Err(e)) => {
                warn!(
                    latitude = coordinate.latitude(),
                    longitude = coordinate.longitude(),
                    error = %e,
                    "Point query failed, using empty result"
                );
                PointWeatherResult::empty(coordinate)
            },
        }
    }
}
