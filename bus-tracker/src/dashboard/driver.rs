//! A driver's trip console.

use tracing::{info, warn};

use crate::catalog::driver_roster;
use crate::domain::BusState;

/// Error returned by console actions that may only happen once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    #[error("trip already started")]
    TripAlreadyStarted,

    #[error("emergency already active")]
    EmergencyAlreadyActive,
}

/// Trip state for the bus a driver is assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConsole {
    bus_number: String,
    trip_started: bool,
    delay: u32,
    emergency_active: bool,
    status_message: String,
}

impl DriverConsole {
    pub fn new(bus_number: impl Into<String>) -> Self {
        Self {
            bus_number: bus_number.into(),
            trip_started: false,
            delay: 0,
            emergency_active: false,
            status_message: "Ready to start trip.".to_string(),
        }
    }

    /// A console for a rostered driver, on the bus they are assigned to.
    pub fn for_driver(name: &str) -> Option<Self> {
        driver_roster()
            .iter()
            .find(|d| d.name == name)
            .map(|d| Self::new(d.assigned_bus))
    }

    pub fn bus_number(&self) -> &str {
        &self.bus_number
    }

    pub fn trip_started(&self) -> bool {
        self.trip_started
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn emergency_active(&self) -> bool {
        self.emergency_active
    }

    /// The last status line shown to the driver.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn start_trip(&mut self) -> Result<(), DriverError> {
        if self.trip_started {
            return Err(DriverError::TripAlreadyStarted);
        }
        self.trip_started = true;
        self.status_message = "Trip started! ETA enabled.".to_string();
        info!(bus = %self.bus_number, "trip started");
        Ok(())
    }

    pub fn update_delay(&mut self, minutes: u32) {
        self.delay = minutes;
        self.status_message = format!("Delay updated: {minutes} min.");
    }

    pub fn send_emergency(&mut self) -> Result<(), DriverError> {
        if self.emergency_active {
            return Err(DriverError::EmergencyAlreadyActive);
        }
        self.emergency_active = true;
        self.status_message = "Emergency alert sent!".to_string();
        warn!(bus = %self.bus_number, "emergency alert sent");
        Ok(())
    }

    /// Push the console's delay onto the bus it drives.
    ///
    /// Sets both the delay and the status; a cancelled bus stays cancelled.
    pub fn apply_to(&self, bus: &mut BusState) {
        bus.set_delay(self.delay);
    }
}

/// Read a delay typed by a driver.
///
/// Leading digits are used; anything unreadable or negative is zero, and
/// values too large for a `u32` saturate.
///
/// # Examples
///
/// ```
/// use bus_tracker::dashboard::parse_delay;
///
/// assert_eq!(parse_delay("12"), 12);
/// assert_eq!(parse_delay(" 7 min"), 7);
/// assert_eq!(parse_delay("soon"), 0);
/// assert_eq!(parse_delay("-5"), 0);
/// assert_eq!(parse_delay("99999999999"), u32::MAX);
/// ```
pub fn parse_delay(input: &str) -> u32 {
    input
        .trim()
        .chars()
        .map_while(|c| c.to_digit(10))
        .try_fold(0u32, |acc, d| acc.checked_mul(10)?.checked_add(d))
        .unwrap_or(u32::MAX)
}
