//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::{BusState, BusStatus};

/// A bus as served by the read endpoint.
///
/// This is the loosely-typed shape the normalizer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusRecord {
    pub id: Option<String>,

    pub number: String,

    pub route: String,

    pub current_stop: String,

    pub next_stop: String,

    /// Minutes until the route's final stop
    pub eta_minutes: u32,

    pub status: BusStatus,

    pub delay_minutes: u32,

    pub occupancy: u32,

    pub capacity: u32,

    pub driver_name: String,

    pub driver_phone: String,

    /// When the fleet was last refreshed (RFC 3339)
    pub last_update: String,
}

impl BusRecord {
    /// Build the wire record for a bus from a fleet refreshed at `updated_at`.
    pub fn from_state(bus: &BusState, updated_at: DateTime<Local>) -> Self {
        Self {
            id: bus.id.clone(),
            number: bus.number.clone(),
            route: bus.route.clone(),
            current_stop: bus.current_stop.clone(),
            next_stop: bus.next_stop.clone(),
            eta_minutes: bus.eta_minutes,
            status: bus.status,
            delay_minutes: bus.delay,
            occupancy: bus.occupancy,
            capacity: bus.capacity,
            driver_name: bus.driver.clone(),
            driver_phone: bus.driver_phone.clone(),
            last_update: updated_at.to_rfc3339(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
