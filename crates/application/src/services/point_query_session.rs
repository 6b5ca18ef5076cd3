//! Latest-click-wins session over the point query flow
//!
//! Every click is tagged with a generation number. Queries are never
//! cancelled, but a completed query is only published while its generation is
//! still the latest one issued, so a slow earlier click can never overwrite
//! the result of a later click.

use std::sync::Arc;

use domain::{Coordinate, PointWeatherResult};
use tokio::sync::watch;
use tracing::debug;

use super::PointQueryService;

/// Snapshot of the point query state observed by the rendering surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointQueryState {
    /// Result of the latest completed query, `None` before the first one
    pub result: Option<PointWeatherResult>,
    /// Point loading indicator
    pub loading: bool,
    /// Generation of the most recently issued query (0 before any click)
    pub latest_generation: u64,
    /// Coordinate of the latest query while it is still in flight
    pub pending: Option<Coordinate>,
}

/// Point query session for one view
#[derive(Debug, Clone)]
pub struct PointQuerySession {
    service: PointQueryService,
    state: Arc<watch::Sender<PointQueryState>>,
}

impl PointQuerySession {
    /// Create a session with no result yet
    #[must_use]
    pub fn new(service: PointQueryService) -> Self {
        let (state, _) = watch::channel(PointQueryState::default());
        Self {
            service,
            state: Arc::new(state),
        }
    }

    /// Subscribe to state changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PointQueryState> {
        self.state.subscribe()
    }

    /// Current state snapshot
    #[must_use]
    pub fn state(&self) -> PointQueryState {
        self.state.borrow().clone()
    }

    /// Register a click and run its query in the background
    ///
    /// The loading indicator turns on immediately. Returns the generation
    /// assigned to this click. Must be called from within a Tokio runtime.
    pub fn click(&self, coordinate: Coordinate) -> u64 {
        let generation = self.register(coordinate);
        let service = self.service.clone();
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            let result = service.query(coordinate).await;
            publish(&state, generation, result);
        });

        generation
    }

    /// Register a click and run its query on the caller's task
    ///
    /// Returns `true` if the result was published, `false` if a newer click
    /// superseded it while it was in flight.
    pub async fn query_now(&self, coordinate: Coordinate) -> bool {
        let generation = self.register(coordinate);
        let result = self.service.query(coordinate).await;
        publish(&self.state, generation, result)
    }

    fn register(&self, coordinate: Coordinate) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|state| {
            state.latest_generation += 1;
            state.loading = true;
            state.pending = Some(coordinate);
            generation = state.latest_generation;
        });
        debug!(generation, coordinate = %coordinate, "Point query issued");
        generation
    }
}

/// Publish a completed query if it is still the latest one
fn publish(
    state: &watch::Sender<PointQueryState>,
    generation: u64,
    result: PointWeatherResult,
) -> bool {
    let published = state.send_if_modified(|state| {
        if state.latest_generation != generation {
            return false;
        }
        state.result = Some(result);
        state.loading = false;
        state.pending = None;
        true
    });

    if !published {
        debug!(generation, "Dropping superseded point query result");
    }
    published
}
