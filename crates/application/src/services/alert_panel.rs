//! Regional alert panel view model
//!
//! Derives what the side panel shows from a [`RegionalAlertState`]. The
//! loading indicator takes precedence over any data, and an empty set
//! ("all clear") is kept distinct from "not fetched yet".

use chrono::{DateTime, Utc};
use domain::{PANEL_DESCRIPTION_LIMIT, SeverityCategory};

use super::RegionalAlertState;

/// What the panel body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStatus {
    /// A fetch is in flight
    Loading,
    /// No fetch has succeeded yet
    NotFetched,
    /// The latest set is empty
    AllClear,
    /// The latest set holds this many alerts
    Alerts(usize),
}

/// One alert row in the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    /// Alert title
    pub title: String,
    /// Reporting city, if any
    pub city: Option<String>,
    /// Description cut to the panel limit
    pub description: String,
    /// Raw severity label as sent by the backend
    pub severity: String,
    /// Presentation category of the severity
    pub category: SeverityCategory,
}

/// Rendered panel contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    /// Whether the panel body is expanded
    pub expanded: bool,
    /// Body status
    pub status: PanelStatus,
    /// One-line summary for the current status
    pub summary: String,
    /// Alert rows (empty unless `status` is `Alerts`)
    pub rows: Vec<PanelRow>,
    /// Non-zero alert counts per category, most severe first
    pub breakdown: Vec<(SeverityCategory, usize)>,
    /// The last fetch failed; shown data may be stale
    pub fetch_failed: bool,
    /// When the shown set was fetched
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Side panel state owned by the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertPanel {
    expanded: bool,
}

impl Default for AlertPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertPanel {
    /// Create a panel; it starts expanded
    #[must_use]
    pub const fn new() -> Self {
        Self { expanded: true }
    }

    /// Whether the panel body is expanded
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the expanded state, returning the new value
    pub const fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Build the panel view for a polling state
    #[must_use]
    pub fn view(&self, state: &RegionalAlertState) -> PanelView {
        let status = match (&state.alerts, state.loading) {
            (_, true) => PanelStatus::Loading,
            (None, false) => PanelStatus::NotFetched,
            (Some(set), false) if set.is_empty() => PanelStatus::AllClear,
            (Some(set), false) => PanelStatus::Alerts(set.len()),
        };

        let rows = match (&state.alerts, status) {
            (Some(set), PanelStatus::Alerts(_)) => set
                .iter()
                .map(|alert| PanelRow {
                    title: alert.title.clone(),
                    city: alert.city.clone(),
                    description: alert.short_description(PANEL_DESCRIPTION_LIMIT).into_owned(),
                    severity: alert.severity.clone(),
                    category: alert.severity_category(),
                })
                .collect(),
            _ => Vec::new(),
        };

        let breakdown = match (&state.alerts, status) {
            (Some(set), PanelStatus::Alerts(_)) => SeverityCategory::all()
                .into_iter()
                .map(|category| (category, set.count_by_category(category)))
                .filter(|(_, count)| *count > 0)
                .collect(),
            _ => Vec::new(),
        };

        PanelView {
            expanded: self.expanded,
            status,
            summary: summary_line(status),
            rows,
            breakdown,
            fetch_failed: state.last_fetch_failed(),
            fetched_at: state.alerts.as_ref().map(domain::RegionalAlertSet::fetched_at),
        }
    }
}

fn summary_line(status: PanelStatus) -> String {
    match status {
        PanelStatus::Loading => "Loading alerts...".to_string(),
        PanelStatus::NotFetched => "Regional alerts have not been loaded yet".to_string(),
        PanelStatus::AllClear => {
            "No active weather alerts across major Canadian cities".to_string()
        },
        PanelStatus::Alerts(1) => "1 active alert across Canada".to_string(),
        PanelStatus::Alerts(count) => format!("{count} active alerts across Canada"),
    }
}

#[cfg(test)]
mod tests {
    use domain::{Alert, RegionalAlertSet};

    use super::*;
    use crate::services::FetchOutcome;

    fn state_with(alerts: Vec<Alert>) -> RegionalAlertState {
        RegionalAlertState {
            alerts: Some(RegionalAlertSet::fetched_now(alerts)),
            loading: false,
            last_outcome: Some(FetchOutcome::Succeeded),
            successful_fetches: 1,
            failed_fetches: 0,
        }
    }

    fn heat_warning() -> Alert {
        Alert::new("t1", "Heat Warning", "Hot and humid", "moderate", "heat").with_city("Toronto")
    }

    #[test]
    fn panel_starts_expanded_and_toggles() {
        let mut panel = AlertPanel::new();
        assert!(panel.is_expanded());
        assert!(!panel.toggle());
        assert!(!panel.is_expanded());
        assert!(panel.toggle());
    }

    #[test]
    fn toggle_does_not_change_data() {
        let state = state_with(vec![heat_warning()]);
        let mut panel = AlertPanel::new();

        let expanded = panel.view(&state);
        panel.toggle();
        let collapsed = panel.view(&state);

        assert!(!collapsed.expanded);
        assert_eq!(expanded.rows, collapsed.rows);
        assert_eq!(expanded.status, collapsed.status);
    }

    #[test]
    fn before_first_fetch_is_not_fetched() {
        let view = AlertPanel::new().view(&RegionalAlertState::default());
        assert_eq!(view.status, PanelStatus::NotFetched);
        assert!(view.rows.is_empty());
        assert!(view.fetched_at.is_none());
    }

    #[test]
    fn loading_takes_precedence_over_data() {
        let mut state = state_with(vec![heat_warning()]);
        state.loading = true;

        let view = AlertPanel::new().view(&state);

        assert_eq!(view.status, PanelStatus::Loading);
        assert_eq!(view.summary, "Loading alerts...");
        assert!(view.rows.is_empty());
    }

    #[test]
    fn empty_set_is_all_clear() {
        let view = AlertPanel::new().view(&state_with(Vec::new()));

        assert_eq!(view.status, PanelStatus::AllClear);
        assert_eq!(
            view.summary,
            "No active weather alerts across major Canadian cities"
        );
        assert!(view.fetched_at.is_some());
    }

    #[test]
    fn summary_pluralisation() {
        let one = AlertPanel::new().view(&state_with(vec![heat_warning()]));
        assert_eq!(one.summary, "1 active alert across Canada");

        let three = AlertPanel::new().view(&state_with(vec![
            heat_warning(),
            heat_warning(),
            heat_warning(),
        ]));
        assert_eq!(three.status, PanelStatus::Alerts(3));
        assert_eq!(three.summary, "3 active alerts across Canada");
    }

    #[test]
    fn rows_carry_city_category_and_truncated_description() {
        let long = "x".repeat(200);
        let alert = Alert::new("w1", "Wind Warning", long, "HIGH", "wind").with_city("Halifax");

        let view = AlertPanel::new().view(&state_with(vec![alert]));
        let row = &view.rows[0];

        assert_eq!(row.city.as_deref(), Some("Halifax"));
        assert_eq!(row.category, SeverityCategory::Critical);
        assert_eq!(row.severity, "HIGH");
        assert_eq!(row.description.chars().count(), PANEL_DESCRIPTION_LIMIT + 3);
        assert!(row.description.ends_with("..."));
    }

    #[test]
    fn breakdown_counts_categories_most_severe_first() {
        let view = AlertPanel::new().view(&state_with(vec![
            Alert::new("r1", "Rainfall Warning", "Wet", "minor", "rain"),
            heat_warning(),
            Alert::new("s1", "Winter Storm Warning", "Snow", "severe", "storm"),
            heat_warning(),
        ]));

        assert_eq!(
            view.breakdown,
            vec![
                (SeverityCategory::Critical, 1),
                (SeverityCategory::Warning, 2),
                (SeverityCategory::Info, 1),
            ]
        );
    }

    #[test]
    fn breakdown_empty_without_alerts() {
        assert!(AlertPanel::new().view(&state_with(Vec::new())).breakdown.is_empty());
        assert!(
            AlertPanel::new()
                .view(&RegionalAlertState::default())
                .breakdown
                .is_empty()
        );
    }

    #[test]
    fn failed_fetch_is_flagged_with_stale_rows() {
        let mut state = state_with(vec![heat_warning()]);
        state.last_outcome = Some(FetchOutcome::Failed);
        state.failed_fetches = 1;

        let view = AlertPanel::new().view(&state);

        assert!(view.fetch_failed);
        assert_eq!(view.rows.len(), 1);
    }
}
