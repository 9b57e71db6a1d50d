//! Route timetable types.

use super::time::{ScheduleTime, TimeError};

/// Error returned when building an invalid route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Route has no stops
    #[error("route {0} has no stops")]
    NoStops(String),

    /// Route number is empty
    #[error("route number must not be empty")]
    EmptyNumber,

    /// A stop time failed to parse
    #[error("route {route}, stop {pickup:?}: {source}")]
    Time {
        route: String,
        pickup: String,
        #[source]
        source: TimeError,
    },
}

/// A named pickup point with its scheduled time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub pickup: String,
    pub time: ScheduleTime,
}

impl Stop {
    pub fn new(pickup: impl Into<String>, time: ScheduleTime) -> Self {
        Self {
            pickup: pickup.into(),
            time,
        }
    }
}

/// A route: a route number and its ordered stops.
///
/// A `RouteDefinition` always has at least one stop, so the final stop
/// is always defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    number: String,
    stops: Vec<Stop>,
}

impl RouteDefinition {
    /// Build a route from already-validated stops.
    pub fn new(number: impl Into<String>, stops: Vec<Stop>) -> Result<Self, RouteError> {
        let number = number.into();
        if number.is_empty() {
            return Err(RouteError::EmptyNumber);
        }
        if stops.is_empty() {
            return Err(RouteError::NoStops(number));
        }
        Ok(Self { number, stops })
    }

    /// Build a route from `(pickup, "H:MM AM")` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_tracker::domain::RouteDefinition;
    ///
    /// let route = RouteDefinition::from_timetable(
    ///     "VV-22",
    ///     &[("Tadepalli", "8:15 AM"), ("VIT-AP Campus", "8:45 AM")],
    /// )
    /// .unwrap();
    /// assert_eq!(route.final_stop().pickup, "VIT-AP Campus");
    ///
    /// assert!(RouteDefinition::from_timetable("VV-22", &[("Tadepalli", "8:15")]).is_err());
    /// ```
    pub fn from_timetable(number: &str, timetable: &[(&str, &str)]) -> Result<Self, RouteError> {
        let stops = timetable
            .iter()
            .map(|&(pickup, time)| {
                ScheduleTime::parse(time)
                    .map(|time| Stop::new(pickup, time))
                    .map_err(|source| RouteError::Time {
                        route: number.to_string(),
                        pickup: pickup.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(number, stops)
    }

    /// The route number (e.g. "VV-1").
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Stops in route order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// The last stop on the route.
    pub fn final_stop(&self) -> &Stop {
        // Non-empty by construction
        &self.stops[self.stops.len() - 1]
    }

    /// Whether the route calls at a pickup with this exact name.
    pub fn serves(&self, pickup: &str) -> bool {
        self.stops.iter().any(|s| s.pickup == pickup)
    }
}
