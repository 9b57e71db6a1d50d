//! A caller-owned bus collection.

use crate::domain::BusState;

use super::{BusQuery, StopIndex, query_buses};

/// Minimum query length (in characters) before suggestions are offered.
const MIN_SUGGESTION_CHARS: usize = 2;

/// Error returned when a bus cannot be added to a fleet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FleetError {
    /// The bus has no number
    #[error("bus number is required")]
    MissingNumber,

    /// A bus with this number is already in the fleet
    #[error("bus with number {0} already exists")]
    DuplicateNumber(String),
}

/// A bus collection owned by whoever generated or fetched it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    buses: Vec<BusState>,
}

impl Fleet {
    pub fn new(buses: Vec<BusState>) -> Self {
        Self { buses }
    }

    /// All buses in collection order.
    pub fn buses(&self) -> &[BusState] {
        &self.buses
    }

    pub fn len(&self) -> usize {
        self.buses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }

    /// Run a query over this fleet. See [`query_buses`].
    pub fn query(&self, params: &BusQuery, stops: &StopIndex) -> Vec<BusState> {
        query_buses(&self.buses, params, stops)
    }

    /// The first bus with this number.
    pub fn get_by_number(&self, number: &str) -> Option<&BusState> {
        self.buses.iter().find(|b| b.number == number)
    }

    /// Add a bus, rejecting a missing or already-present number.
    ///
    /// The fleet is left untouched on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_tracker::query::{Fleet, FleetError};
    /// # use bus_tracker::normalize::normalize_bus;
    /// # let bus = |n: &str| normalize_bus(&serde_json::json!({"number": n})).unwrap();
    ///
    /// let mut fleet = Fleet::default();
    /// fleet.add_bus(bus("VV-1")).unwrap();
    /// assert_eq!(
    ///     fleet.add_bus(bus("VV-1")),
    ///     Err(FleetError::DuplicateNumber("VV-1".into()))
    /// );
    /// assert_eq!(fleet.len(), 1);
    /// ```
    pub fn add_bus(&mut self, bus: BusState) -> Result<(), FleetError> {
        if bus.number.trim().is_empty() {
            return Err(FleetError::MissingNumber);
        }
        if self.buses.iter().any(|b| b.number == bus.number) {
            return Err(FleetError::DuplicateNumber(bus.number));
        }
        self.buses.push(bus);
        Ok(())
    }

    /// Remove the first bus with this number. Returns whether one was removed.
    pub fn delete_bus(&mut self, number: &str) -> bool {
        match self.buses.iter().position(|b| b.number == number) {
            Some(idx) => {
                self.buses.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Swap in a freshly fetched collection.
    pub fn replace_all(&mut self, buses: Vec<BusState>) {
        self.buses = buses;
    }

    /// Distinct routes in first-seen order, for a route filter.
    pub fn route_options(&self) -> Vec<&str> {
        let mut routes: Vec<&str> = Vec::new();
        for bus in &self.buses {
            if !routes.contains(&bus.route.as_str()) {
                routes.push(&bus.route);
            }
        }
        routes
    }

    /// Distinct current and next stops in first-seen order.
    pub fn all_stops(&self) -> Vec<&str> {
        let mut stops: Vec<&str> = Vec::new();
        for bus in &self.buses {
            for stop in [&bus.current_stop, &bus.next_stop] {
                if !stops.contains(&stop.as_str()) {
                    stops.push(stop);
                }
            }
        }
        stops
    }

    /// Autocomplete candidates: numbers, routes and stops containing the query.
    ///
    /// Queries shorter than two characters get no suggestions.
    pub fn suggestions(&self, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_SUGGESTION_CHARS {
            return Vec::new();
        }

        let mut out: Vec<&str> = Vec::new();
        for bus in &self.buses {
            for field in [&bus.number, &bus.route, &bus.current_stop, &bus.next_stop] {
                if field.to_lowercase().contains(&query) && !out.contains(&field.as_str()) {
                    out.push(field);
                }
            }
        }
        out
    }
}

impl From<Vec<BusState>> for Fleet {
    fn from(buses: Vec<BusState>) -> Self {
        Self::new(buses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::bus;

    fn fleet() -> Fleet {
        let mut a = bus("VV-1", "VV-1");
        a.current_stop = "Kankipadu".into();
        a.next_stop = "Gosala".into();
        let mut b = bus("VV-1", "VV-1");
        b.current_stop = "Gosala".into();
        b.next_stop = "Edupugallu".into();
        let mut c = bus("VV-2", "VV-2");
        c.current_stop = "Poranki Center".into();
        c.next_stop = "Thumu Center".into();
        Fleet::new(vec![a, b, c])
    }

    #[test]
    fn add_rejects_duplicate_without_mutation() {
        let mut f = fleet();
        let err = f.add_bus(bus("VV-1", "VV-1")).unwrap_err();
        assert_eq!(err, FleetError::DuplicateNumber("VV-1".into()));
        assert_eq!(err.to_string(), "bus with number VV-1 already exists");
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn add_rejects_missing_number() {
        let mut f = fleet();
        assert_eq!(f.add_bus(bus("", "VV-9")), Err(FleetError::MissingNumber));
        assert_eq!(f.add_bus(bus("  ", "VV-9")), Err(FleetError::MissingNumber));
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn add_appends() {
        let mut f = fleet();
        f.add_bus(bus("VV-3", "VV-3")).unwrap();
        assert_eq!(f.len(), 4);
        assert_eq!(f.buses().last().unwrap().number, "VV-3");
    }

    #[test]
    fn delete_removes_first_match_only() {
        let mut f = fleet();
        assert!(f.delete_bus("VV-1"));
        assert_eq!(f.len(), 2);
        assert_eq!(f.get_by_number("VV-1").unwrap().current_stop, "Gosala");

        assert!(!f.delete_bus("VV-99"));
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn route_options_are_distinct() {
        assert_eq!(fleet().route_options(), ["VV-1", "VV-2"]);
    }

    #[test]
    fn all_stops_are_distinct() {
        assert_eq!(
            fleet().all_stops(),
            ["Kankipadu", "Gosala", "Edupugallu", "Poranki Center", "Thumu Center"]
        );
    }

    #[test]
    fn suggestions_cover_numbers_and_stops() {
        let f = fleet();
        assert!(f.suggestions("v").is_empty());
        assert_eq!(f.suggestions("vv"), ["VV-1", "VV-2"]);
        assert_eq!(f.suggestions("CENTER"), ["Poranki Center", "Thumu Center"]);
        assert_eq!(f.suggestions("gos"), ["Gosala"]);
    }

    #[test]
    fn replace_all_swaps_collection() {
        let mut f = fleet();
        f.replace_all(vec![bus("VIT-101", "Katpadi")]);
        assert_eq!(f.len(), 1);
        assert!(f.get_by_number("VV-1").is_none());
    }
}
