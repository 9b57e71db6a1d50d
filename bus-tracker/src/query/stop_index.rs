//! Stop name → bus numbers lookup for "search by stop".

use crate::domain::RouteDefinition;

/// Ordered mapping from stop names to the bus numbers that call there.
///
/// Order matters: a stop search picks the first stop whose name matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopIndex {
    entries: Vec<(String, Vec<String>)>,
}

impl StopIndex {
    /// Build from a fixed `(stop, buses)` registry, keeping its order.
    pub fn from_registry(registry: &[(&str, &[&str])]) -> Self {
        let entries = registry
            .iter()
            .map(|(stop, buses)| {
                (
                    stop.to_string(),
                    buses.iter().map(|b| b.to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Derive from route timetables: every pickup maps to the routes serving it.
    ///
    /// Stops appear in first-seen order across the routes.
    pub fn from_routes(routes: &[RouteDefinition]) -> Self {
        let mut entries: Vec<(String, Vec<String>)> = Vec::new();

        for route in routes {
            for stop in route.stops() {
                let idx = match entries.iter().position(|(name, _)| *name == stop.pickup) {
                    Some(idx) => idx,
                    None => {
                        entries.push((stop.pickup.clone(), Vec::new()));
                        entries.len() - 1
                    }
                };
                let buses = &mut entries[idx].1;
                if !buses.iter().any(|b| b == route.number()) {
                    buses.push(route.number().to_string());
                }
            }
        }

        Self { entries }
    }

    /// Bus numbers at the first stop whose name contains `query`
    /// (case-insensitive). Empty if no stop matches.
    pub fn buses_at_matching_stop(&self, query: &str) -> &[String] {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| name.to_lowercase().contains(&query))
            .map(|(_, buses)| buses.as_slice())
            .unwrap_or(&[])
    }

    /// Bus numbers at the stop with exactly this name.
    pub fn buses_at(&self, stop: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == stop)
            .map(|(_, buses)| buses.as_slice())
            .unwrap_or(&[])
    }

    /// Stop names in index order.
    pub fn stops(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
