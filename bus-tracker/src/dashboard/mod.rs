//! State behind the student, parent and driver dashboards.
//!
//! These are plain values; persist them through [`crate::store::Repository`]
//! under the well-known keys.

mod alerts;
mod children;
mod driver;
mod favorites;
mod settings;

pub use alerts::{AlertLog, BusAlert};
pub use children::{
    Child, ChildRoster, ChildSort, ChildTracking, NewChild, ParentAlert, RosterError, SafetyStatus,
    emergency_buses,
};
pub use driver::{DriverConsole, DriverError, parse_delay};
pub use favorites::FavoriteStops;
pub use settings::ParentSettings;
