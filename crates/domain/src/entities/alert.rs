//! Weather alert entity

use serde::{Deserialize, Serialize};

use crate::text::truncate_description;
use crate::value_objects::SeverityCategory;

/// An active weather alert as reported by the backend
///
/// Alerts are replaced wholesale on every fetch; nothing mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Backend identifier
    pub id: String,
    /// Short headline, e.g. "Winter Storm Warning"
    pub title: String,
    /// Free-text body, may be long
    pub description: String,
    /// Raw severity label (case-insensitive)
    pub severity: String,
    /// Free-text category, e.g. "storm"
    pub alert_type: String,
    /// City the alert was reported for (regional alerts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Alert {
    /// Create an alert without a city
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: impl Into<String>,
        alert_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            severity: severity.into(),
            alert_type: alert_type.into(),
            city: None,
        }
    }

    /// Attach the reporting city
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Presentation category of this alert's severity label
    #[must_use]
    pub fn severity_category(&self) -> SeverityCategory {
        SeverityCategory::classify(&self.severity)
    }

    /// Description cut to `limit` characters, with a trailing ellipsis when cut
    #[must_use]
    pub fn short_description(&self, limit: usize) -> std::borrow::Cow<'_, str> {
        truncate_description(&self.description, limit)
    }
}
