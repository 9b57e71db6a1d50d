//! Canonical bus state records.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Seat capacity used when nothing else is known.
pub const DEFAULT_CAPACITY: u32 = 40;

/// Running status of a bus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusStatus {
    #[default]
    OnTime,
    Delayed,
    Cancelled,
}

impl BusStatus {
    /// Parse a wire status string.
    ///
    /// Accepts the legacy `ontime` spelling alongside `on-time`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_tracker::domain::BusStatus;
    ///
    /// assert_eq!(BusStatus::parse("on-time"), Some(BusStatus::OnTime));
    /// assert_eq!(BusStatus::parse("ontime"), Some(BusStatus::OnTime));
    /// assert_eq!(BusStatus::parse("delayed"), Some(BusStatus::Delayed));
    /// assert_eq!(BusStatus::parse("late"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "on-time" | "ontime" => Some(Self::OnTime),
            "delayed" => Some(Self::Delayed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// The wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnTime => "on-time",
            Self::Delayed => "delayed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How full a bus is, for colouring occupancy bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyLevel {
    Low,
    Busy,
    Full,
}

/// A bus's progress along its route at one point in its schedule.
///
/// `status` and `delay` are independent fields: nothing here keeps them
/// in agreement. Use [`BusState::with_delay`] to set both together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusState {
    /// `"{route}-{stop index}"` for generated buses; may be absent on wire records.
    pub id: Option<String>,
    /// Bus number. Generated buses on one route share it.
    pub number: String,
    pub route: String,
    pub current_stop: String,
    pub next_stop: String,
    /// Minutes from the current stop to the end of the route.
    pub eta_minutes: u32,
    pub status: BusStatus,
    /// Delay in minutes.
    pub delay: u32,
    pub occupancy: u32,
    pub capacity: u32,
    pub driver: String,
    pub driver_phone: String,
    /// Display timestamp; not meant to be parsed back.
    pub last_update: String,
}

impl BusState {
    /// ETA display string, e.g. "80 minutes".
    pub fn eta(&self) -> String {
        format!("{} minutes", self.eta_minutes)
    }

    /// Human-readable status, e.g. "On Time" or "12 min late".
    pub fn status_text(&self) -> String {
        match self.status {
            BusStatus::OnTime => "On Time".to_string(),
            BusStatus::Delayed => format!("{} min late", self.delay),
            BusStatus::Cancelled => "Cancelled".to_string(),
        }
    }

    /// Occupancy as a rounded percentage of capacity.
    pub fn occupancy_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        let occupancy = u64::from(self.occupancy);
        let capacity = u64::from(self.capacity);
        ((occupancy * 100 + capacity / 2) / capacity) as u32
    }

    pub fn occupancy_level(&self) -> OccupancyLevel {
        match self.occupancy_percent() {
            p if p > 90 => OccupancyLevel::Full,
            p if p > 70 => OccupancyLevel::Busy,
            _ => OccupancyLevel::Low,
        }
    }

    /// Set the delay and the matching status together.
    ///
    /// A cancelled bus stays cancelled.
    pub fn with_delay(mut self, minutes: u32) -> Self {
        self.set_delay(minutes);
        self
    }

    /// In-place form of [`BusState::with_delay`].
    pub fn set_delay(&mut self, minutes: u32) {
        self.delay = minutes;
        if self.status != BusStatus::Cancelled {
            self.status = if minutes > 0 {
                BusStatus::Delayed
            } else {
                BusStatus::OnTime
            };
        }
    }
}

/// Format a timestamp the way dashboards display "last updated".
///
/// # Examples
///
/// ```
/// use bus_tracker::domain::format_display_timestamp;
/// use chrono::NaiveDate;
///
/// let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
///     .unwrap()
///     .and_hms_opt(7, 25, 0)
///     .unwrap();
/// assert_eq!(format_display_timestamp(dt), "5/3/2024, 7:25:00 AM");
/// ```
pub fn format_display_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%-d/%-m/%Y, %-I:%M:%S %p").to_string()
}
