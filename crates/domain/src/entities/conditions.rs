//! Current conditions snapshot

use serde::{Deserialize, Serialize};

/// Current conditions at a point; either field may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionsSnapshot {
    /// Temperature in °C
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Short condition label, e.g. "Snow"
    #[serde(default)]
    pub condition: Option<String>,
}

impl ConditionsSnapshot {
    /// Snapshot with both fields set
    pub fn new(temperature: f64, condition: impl Into<String>) -> Self {
        Self {
            temperature: Some(temperature),
            condition: Some(condition.into()),
        }
    }

    /// Snapshot with every field absent
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            temperature: None,
            condition: None,
        }
    }

    /// True when no field is present
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.temperature.is_none() && self.condition.is_none()
    }

    /// Temperature formatted with its unit, if present
    #[must_use]
    pub fn format_temperature(&self) -> Option<String> {
        self.temperature.map(|t| format!("{t}°C"))
    }
}
