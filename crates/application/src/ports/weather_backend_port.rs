//! Weather backend port
//!
//! Defines the interface to the weather backend used by both flows.

use async_trait::async_trait;
use domain::{Alert, ConditionsSnapshot, Coordinate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather backend operations
///
/// Coordinates are passed through unchanged; the port performs no range
/// validation of its own.
#[allow(clippy::struct_field_names)] // automock generates struct with `get_*` prefixes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherBackendPort: Send + Sync {
    /// Get current conditions at a coordinate
    async fn get_conditions(
        &self,
        coordinate: &Coordinate,
    ) -> Result<ConditionsSnapshot, ApplicationError>;

    /// Get active alerts at a coordinate
    ///
    /// An absent or `null` alert list from the backend yields an empty vector.
    async fn get_point_alerts(&self, coordinate: &Coordinate)
    -> Result<Vec<Alert>, ApplicationError>;

    /// Get the full set of active alerts across the predefined major cities
    async fn get_regional_alerts(&self) -> Result<Vec<Alert>, ApplicationError>;

    /// Check if the backend is reachable and healthy
    async fn is_available(&self) -> bool;
}
