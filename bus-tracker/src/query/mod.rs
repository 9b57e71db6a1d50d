//! Bus query engine.
//!
//! Answers the dashboard's search box, route and status drop-downs and sort
//! selector over a bus collection. Queries never modify the collection they
//! read; results are fresh vectors, empty when nothing matches.

mod fleet;
mod stop_index;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{BusState, BusStatus};

pub use fleet::{Fleet, FleetError};
pub use stop_index::StopIndex;

/// Parameters of a bus query, as sent on the read endpoint's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusQuery {
    /// Free text matched against bus numbers and stop names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Exact route filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    /// Exact status filter (`on-time`, `delayed`, `cancelled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Sort key name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl BusQuery {
    /// A free-text query.
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Trim every parameter and drop the empty ones.
    ///
    /// Two queries that select the same buses normalize to the same value.
    pub fn normalized(&self) -> Self {
        fn clean(v: &Option<String>) -> Option<String> {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        }

        Self {
            query: clean(&self.query).map(|q| q.to_lowercase()),
            route: clean(&self.route),
            status: clean(&self.status),
            sort: clean(&self.sort),
        }
    }
}

/// Field a query result can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Number,
    Route,
    Eta,
    Delay,
    Occupancy,
    Status,
    CurrentStop,
    NextStop,
}

impl SortKey {
    /// Parse a sort parameter; both camelCase and snake_case names are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "number" => Some(Self::Number),
            "route" => Some(Self::Route),
            "eta" | "etaMinutes" | "eta_minutes" => Some(Self::Eta),
            "delay" | "delay_minutes" => Some(Self::Delay),
            "occupancy" => Some(Self::Occupancy),
            "status" => Some(Self::Status),
            "currentStop" | "current_stop" => Some(Self::CurrentStop),
            "nextStop" | "next_stop" => Some(Self::NextStop),
            _ => None,
        }
    }

    /// Ascending comparison of two buses on this key.
    pub fn compare(&self, a: &BusState, b: &BusState) -> Ordering {
        match self {
            Self::Number => a.number.cmp(&b.number),
            Self::Route => a.route.cmp(&b.route),
            Self::Eta => a.eta_minutes.cmp(&b.eta_minutes),
            Self::Delay => a.delay.cmp(&b.delay),
            Self::Occupancy => a.occupancy.cmp(&b.occupancy),
            Self::Status => a.status.as_str().cmp(b.status.as_str()),
            Self::CurrentStop => a.current_stop.cmp(&b.current_stop),
            Self::NextStop => a.next_stop.cmp(&b.next_stop),
        }
    }
}

/// How a free-text search is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Substring of the bus number
    Number,
    /// Buses calling at the first stop whose name matches
    Stop,
}

/// Filter, search and sort a bus collection.
///
/// The query text matches a bus when it is a case-insensitive substring of
/// the bus number, or when the bus calls at the first stop in `stops` whose
/// name contains it. Route and status filters are exact. Sorting is stable
/// and ascending; an unknown sort key keeps collection order.
///
/// # Examples
///
/// ```
/// use bus_tracker::catalog::RouteCatalog;
/// use bus_tracker::generate::generate_bus_states_at;
/// use bus_tracker::query::{BusQuery, StopIndex, query_buses};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let catalog = RouteCatalog::load().unwrap();
/// let buses = generate_bus_states_at(catalog.routes(), &mut StdRng::seed_from_u64(0), "now");
/// let stops = StopIndex::from_routes(catalog.routes());
///
/// let hits = query_buses(&buses, &BusQuery::text("vv-1"), &stops);
/// assert!(hits.iter().any(|b| b.number == "VV-1"));
///
/// let none = query_buses(&buses, &BusQuery::text("no such bus"), &stops);
/// assert!(none.is_empty());
/// ```
pub fn query_buses(collection: &[BusState], params: &BusQuery, stops: &StopIndex) -> Vec<BusState> {
    let params = params.normalized();

    let at_stop = params
        .query
        .as_deref()
        .map(|q| stops.buses_at_matching_stop(q))
        .unwrap_or(&[]);

    // A status filter that names no known status matches nothing.
    let status = params.status.as_deref().map(BusStatus::parse);

    let mut results: Vec<BusState> = collection
        .iter()
        .filter(|bus| match params.query.as_deref() {
            Some(q) => bus.number.to_lowercase().contains(q) || at_stop.contains(&bus.number),
            None => true,
        })
        .filter(|bus| params.route.as_deref().is_none_or(|r| bus.route == r))
        .filter(|bus| match status {
            Some(Some(s)) => bus.status == s,
            Some(None) => false,
            None => true,
        })
        .cloned()
        .collect();

    if let Some(sort) = params.sort.as_deref() {
        match SortKey::parse(sort) {
            // sort_by is stable: ties keep collection order
            Some(key) => results.sort_by(|a, b| key.compare(a, b)),
            None => debug!(sort, "ignoring unknown sort key"),
        }
    }

    debug!(
        total = collection.len(),
        matched = results.len(),
        "bus query"
    );
    results
}

/// Search by bus number or by stop, as the student dashboard's two search buttons do.
///
/// An empty or whitespace query returns the whole collection.
pub fn search_buses(
    collection: &[BusState],
    query: &str,
    mode: SearchMode,
    stops: &StopIndex,
) -> Vec<BusState> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return collection.to_vec();
    }

    match mode {
        SearchMode::Number => collection
            .iter()
            .filter(|bus| bus.number.to_lowercase().contains(&query))
            .cloned()
            .collect(),
        SearchMode::Stop => {
            let at_stop = stops.buses_at_matching_stop(&query);
            collection
                .iter()
                .filter(|bus| at_stop.contains(&bus.number))
                .cloned()
                .collect()
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::test_support::bus;
    use proptest::prelude::*;

    proptest! {
        /// Sorting by ETA orders ascending and keeps ties in input order.
        #[test]
        fn eta_sort_stable(etas in prop::collection::vec(0u32..5, 0..20)) {
            let buses: Vec<BusState> = etas
                .iter()
                .enumerate()
                .map(|(i, eta)| {
                    let mut b = bus(&format!("VV-{i}"), "VV");
                    b.id = Some(i.to_string());
                    b.eta_minutes = *eta;
                    b
                })
                .collect();

            let sorted = query_buses(&buses, &BusQuery::default().with_sort("eta"), &StopIndex::default());
            prop_assert_eq!(sorted.len(), buses.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].eta_minutes <= pair[1].eta_minutes);
                if pair[0].eta_minutes == pair[1].eta_minutes {
                    let a: usize = pair[0].id.as_deref().unwrap().parse().unwrap();
                    let b: usize = pair[1].id.as_deref().unwrap().parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }

        /// Every result of a text query is in the input and matches the text.
        #[test]
        fn results_are_subset(q in "[a-zA-Z0-9-]{0,4}") {
            let buses: Vec<BusState> = ["VV-1", "VV-10", "VV-22", "VIT-101"]
                .iter()
                .map(|n| bus(n, n))
                .collect();
            let hits = query_buses(&buses, &BusQuery::text(q.clone()), &StopIndex::default());
            let needle = q.trim().to_lowercase();
            for hit in &hits {
                prop_assert!(buses.contains(hit));
                prop_assert!(hit.number.to_lowercase().contains(&needle));
            }
        }
    }
}
