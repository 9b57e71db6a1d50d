//! Domain types for the bus tracker.
//!
//! Route timetables, schedule times and the canonical bus state record.
//! Timetable types validate at construction, so code holding a
//! `RouteDefinition` can rely on well-formed stop times.

mod bus;
mod route;
mod time;

pub use bus::{BusState, BusStatus, DEFAULT_CAPACITY, OccupancyLevel, format_display_timestamp};
pub use route::{RouteDefinition, RouteError, Stop};
pub use time::{ScheduleTime, TimeError, compute_eta_minutes, parse_time_of_day};

#[cfg(test)]
pub(crate) use bus::test_support;
