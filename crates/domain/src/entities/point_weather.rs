//! Result of a point query

use serde::{Deserialize, Serialize};

use super::{Alert, ConditionsSnapshot};
use crate::value_objects::Coordinate;

/// Conditions and alerts for one clicked coordinate
///
/// Only ever built once both backend requests have resolved, either with
/// their data or with the empty default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointWeatherResult {
    /// The coordinate that was queried
    pub coordinate: Coordinate,
    /// Current conditions (possibly all-absent)
    pub conditions: ConditionsSnapshot,
    /// Active alerts at the coordinate (possibly empty)
    pub alerts: Vec<Alert>,
}

impl PointWeatherResult {
    /// Build a result from both resolved responses
    #[must_use]
    pub const fn new(
        coordinate: Coordinate,
        conditions: ConditionsSnapshot,
        alerts: Vec<Alert>,
    ) -> Self {
        Self {
            coordinate,
            conditions,
            alerts,
        }
    }

    /// The recovered result used when a query fails
    #[must_use]
    pub const fn empty(coordinate: Coordinate) -> Self {
        Self::new(coordinate, ConditionsSnapshot::absent(), Vec::new())
    }

    /// True when there are no conditions and no alerts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_absent() && self.alerts.is_empty()
    }

    /// Whether any alert is active at the coordinate
    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }
}
