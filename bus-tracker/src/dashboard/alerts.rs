//! Append-only alert logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::Fleet;

/// A student's request to be alerted about a bus reaching a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusAlert {
    pub bus_number: String,
    pub stop_name: String,
    pub timestamp: DateTime<Utc>,
}

/// An ordered log of alerts. Entries are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertLog<A> {
    entries: Vec<A>,
}

impl<A> Default for AlertLog<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<A> AlertLog<A> {
    pub fn push(&mut self, alert: A) {
        self.entries.push(alert);
    }

    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.entries.iter()
    }

    /// The most recent `n` entries, newest last.
    pub fn recent(&self, n: usize) -> &[A] {
        &self.entries[self.entries.len().saturating_sub(n)..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AlertLog<BusAlert> {
    /// Record an alert for a bus's next stop.
    ///
    /// Returns `None`, logging nothing, if the fleet has no such bus.
    pub fn set_alert(&mut self, fleet: &Fleet, bus_number: &str, now: DateTime<Utc>) -> Option<BusAlert> {
        let bus = fleet.get_by_number(bus_number)?;
        let alert = BusAlert {
            bus_number: bus.number.clone(),
            stop_name: bus.next_stop.clone(),
            timestamp: now,
        };
        self.entries.push(alert.clone());
        Some(alert)
    }

    /// Alerts recorded for one bus.
    pub fn for_bus<'a>(&'a self, bus_number: &'a str) -> impl Iterator<Item = &'a BusAlert> + 'a {
        self.entries.iter().filter(move |a| a.bus_number == bus_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::bus;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 2, 0, 0).unwrap()
    }

    #[test]
    fn set_alert_uses_next_stop() {
        let fleet = Fleet::new(vec![bus("VV-1", "VV-1")]);
        let mut log = AlertLog::default();

        let alert = log.set_alert(&fleet, "VV-1", now()).unwrap();
        assert_eq!(alert.bus_number, "VV-1");
        assert_eq!(alert.stop_name, "Gosala");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn unknown_bus_logs_nothing() {
        let fleet = Fleet::new(vec![bus("VV-1", "VV-1")]);
        let mut log = AlertLog::default();
        assert!(log.set_alert(&fleet, "VV-9", now()).is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn log_is_append_only_and_ordered() {
        let fleet = Fleet::new(vec![bus("VV-1", "VV-1"), bus("VV-2", "VV-2")]);
        let mut log = AlertLog::default();
        log.set_alert(&fleet, "VV-1", now());
        log.set_alert(&fleet, "VV-2", now());
        log.set_alert(&fleet, "VV-1", now());

        let numbers: Vec<_> = log.iter().map(|a| a.bus_number.as_str()).collect();
        assert_eq!(numbers, ["VV-1", "VV-2", "VV-1"]);
        assert_eq!(log.for_bus("VV-1").count(), 2);
        assert_eq!(log.recent(2).len(), 2);
        assert_eq!(log.recent(10).len(), 3);
        assert_eq!(log.recent(1)[0].bus_number, "VV-1");
    }

    #[test]
    fn wire_shape() {
        let fleet = Fleet::new(vec![bus("VV-1", "VV-1")]);
        let mut log = AlertLog::default();
        log.set_alert(&fleet, "VV-1", now());

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json[0]["busNumber"], "VV-1");
        assert_eq!(json[0]["stopName"], "Gosala");
        assert_eq!(json[0]["timestamp"], "2024-03-05T02:00:00Z");

        let back: AlertLog<BusAlert> = serde_json::from_value(json).unwrap();
        assert_eq!(back, log);
    }
}
