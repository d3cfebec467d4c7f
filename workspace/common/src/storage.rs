//! Persistence of saved locations and the weather cache in a string
//! key-value store (browser local storage in production).

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

pub const LOCATIONS_KEY: &str = "locations";
pub const WEATHER_CACHE_KEY: &str = "weatherData";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value.
///
/// A missing key decodes to `None`; undecodable content is an error.
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Malformed {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Read a JSON value, substituting the default when it is absent, malformed
/// or the store cannot be read.
pub fn read_json_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match read_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::debug!("No persisted value under '{}', using default", key);
            T::default()
        }
        Err(e) => {
            tracing::warn!("Discarding persisted value: {}", e);
            T::default()
        }
    }
}

pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Write {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set(key, &raw)
}

/// In-memory store, for tests and environments without local storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_defaults() {
        let store = MemoryStore::new();
        let locations: Vec<String> = read_json_or_default(&store, LOCATIONS_KEY);
        assert!(locations.is_empty());
        assert!(read_json::<Vec<String>, _>(&store, LOCATIONS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_malformed_value_defaults() {
        let store = MemoryStore::new().with_entry(LOCATIONS_KEY, "{not json");
        let err = read_json::<Vec<String>, _>(&store, LOCATIONS_KEY).unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));

        let locations: Vec<String> = read_json_or_default(&store, LOCATIONS_KEY);
        assert!(locations.is_empty());
    }

    #[test]
    fn test_wrong_shape_defaults() {
        let store = MemoryStore::new().with_entry(LOCATIONS_KEY, r#"{"Paris": 1}"#);
        let locations: Vec<String> = read_json_or_default(&store, LOCATIONS_KEY);
        assert!(locations.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStore::new();
        let saved = vec!["Paris".to_string(), "Tokyo".to_string()];
        write_json(&store, LOCATIONS_KEY, &saved).unwrap();

        assert_eq!(
            store.get(LOCATIONS_KEY).unwrap().as_deref(),
            Some(r#"["Paris","Tokyo"]"#)
        );
        let loaded: Vec<String> = read_json_or_default(&store, LOCATIONS_KEY);
        assert_eq!(loaded, saved);
    }
}
