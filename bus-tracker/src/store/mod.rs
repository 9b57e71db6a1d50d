//! Persistence for dashboard state.
//!
//! Dashboards keep small JSON documents (favorite stops, alert logs, a
//! parent's children) under string keys. The engine never touches storage
//! directly: callers load a document through a [`Repository`], update it
//! and save it back. Unlike browser storage, a corrupt document is an
//! error the caller sees, not an empty default.

mod file;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key for the student's favorite stops.
pub const FAVORITE_STOPS_KEY: &str = "favoriteStops";

/// Key for the student's bus alert log.
pub const BUS_ALERTS_KEY: &str = "busNotifications";

/// Key for the parent's arrival alert log.
pub const PARENT_ALERTS_KEY: &str = "parentAlerts";

/// Key for the parent's children.
pub const PARENT_CHILDREN_KEY: &str = "parentChildren";

/// Key for the parent's notification settings.
pub const PARENT_SETTINGS_KEY: &str = "parentSettings";

/// Errors from a key-value store or repository.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document is not valid JSON for the expected type
    #[error("stored value for {key:?} is corrupt: {message}")]
    Corrupt { key: String, message: String },

    /// A value could not be serialized
    #[error("failed to serialize value for {key:?}: {message}")]
    Serialize { key: String, message: String },
}

/// A string key → string value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Typed JSON documents on top of a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct Repository<S> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load a document, or `T::default()` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_tracker::store::{KeyValueStore, MemoryStore, Repository};
    ///
    /// let mut repo = Repository::new(MemoryStore::default());
    /// let empty: Vec<String> = repo.load("favoriteStops").unwrap();
    /// assert!(empty.is_empty());
    ///
    /// repo.save("favoriteStops", &vec!["Gosala".to_string()]).unwrap();
    /// let loaded: Vec<String> = repo.load("favoriteStops").unwrap();
    /// assert_eq!(loaded, ["Gosala"]);
    ///
    /// repo.store_mut().set("favoriteStops", "not json".into()).unwrap();
    /// assert!(repo.load::<Vec<String>>("favoriteStops").is_err());
    /// ```
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StorageError> {
        match self.store.get(key)? {
            None => Ok(T::default()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Serialize and store a document.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.store.set(key, json)
    }

    /// Drop a document.
    pub fn clear(&mut self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
