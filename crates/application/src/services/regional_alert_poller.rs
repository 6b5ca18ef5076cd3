//! Regional polling flow
//!
//! Keeps a [`RegionalAlertSet`] in sync with the backend's regional alerts
//! endpoint. The first fetch happens on start, later fetches follow a fixed
//! cadence anchored to the start instant. The polling task is owned by a
//! [`RegionalPollingHandle`]; stopping or dropping the handle tears it down.

use std::sync::Arc;
use std::time::Duration;

use domain::RegionalAlertSet;
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::ports::WeatherBackendPort;

/// Default time between scheduled fetches (5 minutes)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(300);

/// Shortest interval accepted; `tokio::time::interval` rejects zero
const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Result of the most recent fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The set was replaced with fresh data
    Succeeded,
    /// The fetch failed and the previous set was kept
    Failed,
}

/// Snapshot of the regional polling state observed by the rendering surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionalAlertState {
    /// Latest successfully fetched set, `None` before the first success
    pub alerts: Option<RegionalAlertSet>,
    /// Regional loading indicator, on for the duration of each fetch
    pub loading: bool,
    /// Outcome of the most recent completed fetch
    pub last_outcome: Option<FetchOutcome>,
    /// Number of fetches that replaced the set
    pub successful_fetches: u64,
    /// Number of fetches that failed
    pub failed_fetches: u64,
}

impl RegionalAlertState {
    /// Total number of completed fetches
    #[must_use]
    pub const fn completed_fetches(&self) -> u64 {
        self.successful_fetches + self.failed_fetches
    }

    /// Whether the last fetch failed and the shown data may be stale
    #[must_use]
    pub fn last_fetch_failed(&self) -> bool {
        self.last_outcome == Some(FetchOutcome::Failed)
    }
}

/// Configures and starts the regional polling task
pub struct RegionalAlertPoller {
    backend: Arc<dyn WeatherBackendPort>,
    interval: Duration,
}

impl std::fmt::Debug for RegionalAlertPoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionalAlertPoller")
            .field("backend", &"<WeatherBackendPort>")
            .field("interval", &self.interval)
            .finish()
    }
}

impl RegionalAlertPoller {
    /// Create a poller with the default 5 minute interval
    #[must_use]
    pub fn new(backend: Arc<dyn WeatherBackendPort>) -> Self {
        Self {
            backend,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the polling interval (clamped to at least one second)
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_POLL_INTERVAL);
        self
    }

    /// Configured polling interval
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn the polling task
    ///
    /// The first fetch is issued immediately. Must be called from within a
    /// Tokio runtime.
    pub fn start(&self) -> RegionalPollingHandle {
        let (state_tx, state_rx) = watch::channel(RegionalAlertState::default());
        let refresh = Arc::new(Notify::new());

        info!(
            interval_secs = self.interval.as_secs(),
            "Starting regional alert polling"
        );

        let task = tokio::spawn(run_polling(
            Arc::clone(&self.backend),
            self.interval,
            state_tx,
            Arc::clone(&refresh),
        ));

        RegionalPollingHandle {
            task: Some(task),
            refresh,
            state: state_rx,
        }
    }
}

async fn run_polling(
    backend: Arc<dyn WeatherBackendPort>,
    interval: Duration,
    state: watch::Sender<RegionalAlertState>,
    refresh: Arc<Notify>,
) {
    let mut ticker = tokio::time::interval(interval);
    // Late ticks are skipped so the cadence stays on multiples of the interval
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => debug!("Scheduled regional alert fetch"),
            () = refresh.notified() => debug!("Manual regional alert refresh"),
        }

        fetch_once(backend.as_ref(), &state).await;
    }
}

async fn fetch_once(backend: &dyn WeatherBackendPort, state: &watch::Sender<RegionalAlertState>) {
    state.send_modify(|s| s.loading = true);

    match backend.get_regional_alerts().await {
        Ok(alerts) => {
            let set = RegionalAlertSet::fetched_now(alerts);
            info!(alert_count = set.len(), "Regional alerts refreshed");
            state.send_modify(|s| {
                s.alerts = Some(set);
                s.loading = false;
                s.last_outcome = Some(FetchOutcome::Succeeded);
                s.successful_fetches += 1;
            });
        },
        Err(e) => {
            warn!(error = %e, "Failed to fetch regional alerts, keeping previous set");
            state.send_modify(|s| {
                s.loading = false;
                s.last_outcome = Some(FetchOutcome::Failed);
                s.failed_fetches += 1;
            });
        },
    }
}

/// Owned handle to a running regional polling task
///
/// Dropping the handle aborts the task; [`stop`](Self::stop) additionally
/// waits until it has finished.
#[derive(Debug)]
pub struct RegionalPollingHandle {
    task: Option<JoinHandle<()>>,
    refresh: Arc<Notify>,
    state: watch::Receiver<RegionalAlertState>,
}

impl RegionalPollingHandle {
    /// Fetch now, out of band, without moving the scheduled ticks
    pub fn refresh_now(&self) {
        debug!("Regional alert refresh requested");
        self.refresh.notify_one();
    }

    /// Subscribe to state changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RegionalAlertState> {
        self.state.clone()
    }

    /// Current state snapshot
    #[must_use]
    pub fn state(&self) -> RegionalAlertState {
        self.state.borrow().clone()
    }

    /// Whether the polling task is still running
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop polling and wait for the task to finish
    pub async fn stop(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            if task.await.is_err_and(|e| e.is_panic()) {
                warn!("Regional alert polling task panicked");
            }
            info!("Regional alert polling stopped");
        }
    }
}

impl Drop for RegionalPollingHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Regional alert polling aborted on drop");
        }
    }
}
