//! Point popup view model
//!
//! Derives the popup shown at the clicked coordinate from a
//! [`PointQueryState`].

use domain::{Coordinate, POPUP_DESCRIPTION_LIMIT, SeverityCategory};

use super::PointQueryState;

/// One alert line in the popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupAlert {
    /// Alert title
    pub title: String,
    /// Description cut to the popup limit
    pub description: String,
    /// Presentation category of the severity
    pub category: SeverityCategory,
}

/// Rendered popup contents
#[derive(Debug, Clone, PartialEq)]
pub struct PopupView {
    /// Coordinate the popup is anchored to
    pub coordinate: Coordinate,
    /// Point loading indicator
    pub loading: bool,
    /// Temperature with unit, when present
    pub temperature: Option<String>,
    /// Condition label, when present
    pub condition: Option<String>,
    /// Active alerts at the point
    pub alerts: Vec<PopupAlert>,
}

impl PopupView {
    /// Message shown when there are no alerts at the point
    pub const NO_ALERTS: &'static str = "No active weather alerts";

    /// Build the popup for a session state, `None` before the first click
    ///
    /// While a query is in flight the popup is anchored to the pending
    /// coordinate and shows only the loading indicator.
    #[must_use]
    pub fn from_state(state: &PointQueryState) -> Option<Self> {
        if state.loading {
            let coordinate = state
                .pending
                .or_else(|| state.result.as_ref().map(|r| r.coordinate))?;
            return Some(Self {
                coordinate,
                loading: true,
                temperature: None,
                condition: None,
                alerts: Vec::new(),
            });
        }

        let result = state.result.as_ref()?;
        Some(Self {
            coordinate: result.coordinate,
            loading: false,
            temperature: result.conditions.format_temperature(),
            condition: result.conditions.condition.clone(),
            alerts: result
                .alerts
                .iter()
                .map(|alert| PopupAlert {
                    title: alert.title.clone(),
                    description: alert.short_description(POPUP_DESCRIPTION_LIMIT).into_owned(),
                    category: alert.severity_category(),
                })
                .collect(),
        })
    }

    /// Location line with four decimals
    #[must_use]
    pub fn location(&self) -> String {
        format!("Location: {}", self.coordinate)
    }
}
