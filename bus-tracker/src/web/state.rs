//! Application state for the web layer.

use std::sync::Arc;

use chrono::{DateTime, Local};
use rand::Rng;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::RouteDefinition;
use crate::generate::generate_bus_states;
use crate::query::{Fleet, StopIndex};

/// A fleet and when it was generated.
#[derive(Debug, Clone)]
pub struct FleetSnapshot {
    pub fleet: Arc<Fleet>,
    pub updated_at: DateTime<Local>,
}

/// Shared application state.
///
/// The fleet is regenerated from the route catalog on refresh; readers
/// always see a complete snapshot.
#[derive(Clone)]
pub struct AppState {
    routes: Arc<Vec<RouteDefinition>>,

    /// Stop → buses lookup for stop searches
    stops: Arc<StopIndex>,

    current: Arc<RwLock<FleetSnapshot>>,
}

impl AppState {
    /// Create state with an initial fleet generated from `routes`.
    pub fn new<R: Rng + ?Sized>(routes: Vec<RouteDefinition>, rng: &mut R) -> Self {
        let stops = StopIndex::from_routes(&routes);
        let snapshot = FleetSnapshot {
            fleet: Arc::new(Fleet::new(generate_bus_states(&routes, rng))),
            updated_at: Local::now(),
        };

        Self {
            routes: Arc::new(routes),
            stops: Arc::new(stops),
            current: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Create state around an existing fleet.
    pub fn with_fleet(
        routes: Vec<RouteDefinition>,
        fleet: Fleet,
        updated_at: DateTime<Local>,
    ) -> Self {
        let stops = StopIndex::from_routes(&routes);
        Self {
            routes: Arc::new(routes),
            stops: Arc::new(stops),
            current: Arc::new(RwLock::new(FleetSnapshot {
                fleet: Arc::new(fleet),
                updated_at,
            })),
        }
    }

    pub fn stops(&self) -> &StopIndex {
        &self.stops
    }

    /// The current fleet.
    pub async fn snapshot(&self) -> FleetSnapshot {
        self.current.read().await.clone()
    }

    /// Regenerate the fleet, replacing the current one.
    ///
    /// Returns the number of buses generated.
    pub async fn refresh<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let fleet = Fleet::new(generate_bus_states(&self.routes, rng));
        let count = fleet.len();

        let mut guard = self.current.write().await;
        *guard = FleetSnapshot {
            fleet: Arc::new(fleet),
            updated_at: Local::now(),
        };

        debug!(count, "fleet refreshed");
        count
    }
}
