//! Application services - Flow orchestration and view models

mod alert_panel;
mod health_service;
mod point_popup;
mod point_query_service;
mod point_query_session;
mod regional_alert_poller;

pub use alert_panel::{AlertPanel, PanelRow, PanelStatus, PanelView};
pub use health_service::{BackendHealth, HealthService};
pub use point_popup::{PopupAlert, PopupView};
pub use point_query_service::PointQueryService;
pub use point_query_session::{PointQuerySession, PointQueryState};
pub use regional_alert_poller::{
    DEFAULT_POLL_INTERVAL, FetchOutcome, RegionalAlertPoller, RegionalAlertState,
    RegionalPollingHandle,
};
