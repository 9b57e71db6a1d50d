//! A student's favorite stops.

use serde::{Deserialize, Serialize};

/// Stop names in the order they were favorited, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteStops {
    stops: Vec<String>,
}

impl FavoriteStops {
    /// Add the stop if absent, remove it if present.
    ///
    /// Returns `true` if the stop is now a favorite.
    pub fn toggle(&mut self, stop: &str) -> bool {
        if self.remove(stop) {
            false
        } else {
            self.stops.push(stop.to_string());
            true
        }
    }

    /// Remove a stop. Returns whether it was a favorite.
    pub fn remove(&mut self, stop: &str) -> bool {
        let before = self.stops.len();
        self.stops.retain(|s| s != stop);
        self.stops.len() != before
    }

    pub fn contains(&self, stop: &str) -> bool {
        self.stops.iter().any(|s| s == stop)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stops.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut favs = FavoriteStops::default();
        assert!(favs.toggle("Gosala"));
        assert!(favs.toggle("Poranki"));
        assert!(favs.contains("Gosala"));

        assert!(!favs.toggle("Gosala"));
        assert!(!favs.contains("Gosala"));
        assert_eq!(favs.iter().collect::<Vec<_>>(), ["Poranki"]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut favs = FavoriteStops::default();
        assert!(!favs.remove("Gosala"));
        assert!(favs.is_empty());
    }

    #[test]
    fn legacy_duplicates_removed_together() {
        let mut favs: FavoriteStops = serde_json::from_str(r#"["Gosala","Gosala"]"#).unwrap();
        assert_eq!(favs.len(), 2);
        assert!(!favs.toggle("Gosala"));
        assert!(favs.is_empty());
    }

    #[test]
    fn serializes_as_plain_list() {
        let mut favs = FavoriteStops::default();
        favs.toggle("Varadhi");
        assert_eq!(serde_json::to_string(&favs).unwrap(), r#"["Varadhi"]"#);
    }
}
