//! Snapshot of all active regional alerts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Alert;
use crate::value_objects::SeverityCategory;

/// The full set of active alerts across the predefined cities
///
/// Each successful refresh produces a new set that replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalAlertSet {
    alerts: Vec<Alert>,
    fetched_at: DateTime<Utc>,
}

impl RegionalAlertSet {
    /// Create a set fetched at the given instant
    #[must_use]
    pub const fn new(alerts: Vec<Alert>, fetched_at: DateTime<Utc>) -> Self {
        Self { alerts, fetched_at }
    }

    /// Create a set fetched now
    #[must_use]
    pub fn fetched_now(alerts: Vec<Alert>) -> Self {
        Self::new(alerts, Utc::now())
    }

    /// Alerts in backend order
    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// When the backend answered
    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Number of alerts
    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// True when no alert is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Iterate over alerts
    pub fn iter(&self) -> std::slice::Iter<'_, Alert> {
        self.alerts.iter()
    }

    /// Count of alerts in a given severity category
    #[must_use]
    pub fn count_by_category(&self, category: SeverityCategory) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.severity_category() == category)
            .count()
    }
}

impl<'a> IntoIterator for &'a RegionalAlertSet {
    type Item = &'a Alert;
    type IntoIter = std::slice::Iter<'a, Alert>;

    fn into_iter(self) -> Self::IntoIter {
        self.alerts.iter()
    }
}
