//! Web layer for the bus tracker.
//!
//! Serves the read endpoint dashboards poll, computed over a fleet
//! generated from the route catalog.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, FleetSnapshot};
