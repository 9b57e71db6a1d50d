//! Schedule time handling for route timetables.
//!
//! Timetables give stop times as 12-hour "H:MM AM" strings. This module
//! converts them to minutes since midnight and derives the minute gaps
//! that become a bus's ETA.

use std::fmt;

/// Minutes in a day.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing a malformed time-of-day string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse a "H:MM AM" / "H:MM PM" string into minutes since midnight.
///
/// The hour is 1-12 with an optional leading digit, the minute is always
/// two digits, and the period is separated by a single space.
///
/// # Examples
///
/// ```
/// use bus_tracker::domain::parse_time_of_day;
///
/// assert_eq!(parse_time_of_day("7:25 AM").unwrap(), 445);
/// assert_eq!(parse_time_of_day("12:00 PM").unwrap(), 720);
/// assert_eq!(parse_time_of_day("12:00 AM").unwrap(), 0);
///
/// assert!(parse_time_of_day("7:25").is_err());
/// assert!(parse_time_of_day("13:00 PM").is_err());
/// ```
pub fn parse_time_of_day(s: &str) -> Result<u32, TimeError> {
    let (time, period) = s
        .split_once(' ')
        .ok_or_else(|| TimeError::new(s, "expected \"H:MM AM\" or \"H:MM PM\""))?;

    let pm = match period {
        "AM" => false,
        "PM" => true,
        _ => return Err(TimeError::new(s, "period must be AM or PM")),
    };

    let (hour, minute) = time
        .split_once(':')
        .ok_or_else(|| TimeError::new(s, "expected colon between hour and minute"))?;

    if hour.is_empty() || hour.len() > 2 {
        return Err(TimeError::new(s, "hour must be 1 or 2 digits"));
    }
    if minute.len() != 2 {
        return Err(TimeError::new(s, "minute must be 2 digits"));
    }

    let mut hour = parse_digits(hour).ok_or_else(|| TimeError::new(s, "invalid hour digits"))?;
    let minute =
        parse_digits(minute).ok_or_else(|| TimeError::new(s, "invalid minute digits"))?;

    if !(1..=12).contains(&hour) {
        return Err(TimeError::new(s, "hour must be 1-12"));
    }
    if minute > 59 {
        return Err(TimeError::new(s, "minute must be 0-59"));
    }

    if pm && hour != 12 {
        hour += 12;
    }
    if !pm && hour == 12 {
        hour = 0;
    }

    Ok(hour * 60 + minute)
}

/// Minutes from `from` until `to`, clamped at zero.
///
/// A `to` time that parses earlier than `from` yields 0 rather than an
/// error.
///
/// # Examples
///
/// ```
/// use bus_tracker::domain::compute_eta_minutes;
///
/// assert_eq!(compute_eta_minutes("7:25 AM", "8:45 AM").unwrap(), 80);
/// assert_eq!(compute_eta_minutes("9:00 AM", "8:00 AM").unwrap(), 0);
/// ```
pub fn compute_eta_minutes(from: &str, to: &str) -> Result<u32, TimeError> {
    let from = ScheduleTime::parse(from)?;
    let to = ScheduleTime::parse(to)?;
    Ok(from.minutes_until(to))
}

/// A validated time of day from a route timetable.
///
/// Stored as minutes since midnight, so any `ScheduleTime` is in
/// `0..1440` by construction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleTime(u32);

impl ScheduleTime {
    /// Parse from "H:MM AM|PM" format.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        parse_time_of_day(s).map(Self)
    }

    /// Build from minutes since midnight, if in range.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// Minutes from `self` until `other`, or 0 if `other` is earlier.
    pub fn minutes_until(&self, other: Self) -> u32 {
        other.0.saturating_sub(self.0)
    }
}

impl fmt::Debug for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleTime({self})")
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.0 / 60;
        let minute = self.0 % 60;
        let period = if hour < 12 { "AM" } else { "PM" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{hour12}:{minute:02} {period}")
    }
}

/// Parse a short run of ASCII digits.
fn parse_digits(s: &str) -> Option<u32> {
    s.chars()
        .try_fold(0u32, |acc, c| Some(acc * 10 + c.to_digit(10)?))
}
