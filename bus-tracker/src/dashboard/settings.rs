//! A parent's notification settings.

use serde::{Deserialize, Serialize};

/// Stored under the parent settings key. Missing fields read as defaults,
/// so an empty `{}` document is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParentSettings {
    /// Alert when a child's bus reaches its stop
    pub notify_arrival: bool,

    /// Alert when a child's bus is delayed
    pub notify_delay: bool,

    pub display_name: String,
}

impl ParentSettings {
    /// Settings for a parent, with notifications off.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    pub fn with_arrival_alerts(mut self, on: bool) -> Self {
        self.notify_arrival = on;
        self
    }

    pub fn with_delay_alerts(mut self, on: bool) -> Self {
        self.notify_delay = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueStore, MemoryStore, PARENT_SETTINGS_KEY, Repository};

    #[test]
    fn missing_document_is_all_off() {
        let repo = Repository::new(MemoryStore::default());
        let settings: ParentSettings = repo.load(PARENT_SETTINGS_KEY).unwrap();
        assert_eq!(settings, ParentSettings::default());
        assert!(!settings.notify_arrival);
        assert_eq!(settings.display_name, "");
    }

    #[test]
    fn partial_document_fills_defaults() {
        let settings: ParentSettings = serde_json::from_str(r#"{"notifyDelay": true}"#).unwrap();
        assert!(settings.notify_delay);
        assert!(!settings.notify_arrival);
        assert_eq!(settings.display_name, "");

        let empty: ParentSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ParentSettings::default());
    }

    #[test]
    fn saved_settings_round_trip_through_store() {
        let mut repo = Repository::new(MemoryStore::default());
        let settings = ParentSettings::new("Mr. Kumar")
            .with_arrival_alerts(true)
            .with_delay_alerts(false);
        repo.save(PARENT_SETTINGS_KEY, &settings).unwrap();

        let stored = repo.store().get(PARENT_SETTINGS_KEY).unwrap().unwrap();
        let raw: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(raw["notifyArrival"], true);
        assert_eq!(raw["notifyDelay"], false);
        assert_eq!(raw["displayName"], "Mr. Kumar");

        assert_eq!(repo.load::<ParentSettings>(PARENT_SETTINGS_KEY).unwrap(), settings);
    }
}
