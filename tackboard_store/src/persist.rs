// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use tackboard_board::Node;
use tackboard_view::BoardTransform;

/// Key under which the node collection is stored.
pub const NODES_KEY: &str = "tackboard.nodes";

/// Key under which the board settings are stored.
pub const SETTINGS_KEY: &str = "tackboard.settings";

/// Errors surfaced by persistence operations.
///
/// Unreadable *content* is not an error: a corrupt or missing record loads
/// as the default so an old or damaged store never wedges startup. Errors
/// are reserved for the backend refusing the operation and for records that
/// cannot be serialized on save.
#[derive(Debug)]
pub enum StoreError {
    /// The key-value backend rejected the operation.
    Backend(String),
    /// A record could not be serialized.
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(message) => write!(f, "storage backend error: {message}"),
            Self::Serialize(err) => write!(f, "record serialization failed: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Backend(_) => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

/// A string key-value backend.
///
/// This is the seam to whatever durable storage the host provides: browser
/// local storage, a file per key, a table. Implementations store opaque
/// strings; the JSON encoding above them is this crate's concern.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Board settings that persist across sessions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SavedSettings {
    /// The viewport transform to restore.
    pub transform: BoardTransform,
    /// User-visible board name.
    pub name: String,
}

impl Default for SavedSettings {
    fn default() -> Self {
        Self {
            transform: BoardTransform::default(),
            name: String::from("Untitled board"),
        }
    }
}

/// Persists the board's records as JSON over a [`KeyValueStore`].
#[derive(Debug)]
pub struct BoardStore<S> {
    backend: S,
}

impl<S: KeyValueStore> BoardStore<S> {
    /// Wraps a key-value backend.
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Loads the node collection.
    ///
    /// A missing record loads as an empty board. A record that no longer
    /// parses also loads as an empty board rather than failing; only a
    /// refusing backend is an error.
    pub fn load_nodes(&self) -> Result<Vec<Node>, StoreError> {
        let Some(raw) = self.backend.get(NODES_KEY)? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    /// Saves the node collection.
    pub fn save_nodes(&mut self, nodes: &[Node]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(nodes)?;
        self.backend.set(NODES_KEY, &raw)
    }

    /// Loads the board settings, falling back to the defaults for a missing
    /// or unreadable record.
    pub fn load_settings(&self) -> Result<SavedSettings, StoreError> {
        let Some(raw) = self.backend.get(SETTINGS_KEY)? else {
            return Ok(SavedSettings::default());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    /// Saves the board settings.
    pub fn save_settings(&mut self, settings: &SavedSettings) -> Result<(), StoreError> {
        let raw = serde_json::to_string(settings)?;
        self.backend.set(SETTINGS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use kurbo::Point;
    use tackboard_board::NodeContent;

    #[test]
    fn nodes_round_trip_through_json() {
        let mut store = BoardStore::new(MemoryStore::new());
        let mut node = Node::new(NodeContent::Note {
            text: String::from("hello"),
        });
        node.position = Point::new(30.0, -10.0);
        node.z_index = 4;

        store.save_nodes(&[node.clone()]).unwrap();
        let loaded = store.load_nodes().unwrap();
        assert_eq!(loaded, vec![node]);
    }

    #[test]
    fn settings_round_trip_through_json() {
        let mut store = BoardStore::new(MemoryStore::new());
        let settings = SavedSettings {
            transform: BoardTransform::new(12.0, -7.5, 2.0),
            name: String::from("Moodboard"),
        };
        store.save_settings(&settings).unwrap();
        assert_eq!(store.load_settings().unwrap(), settings);
    }

    #[test]
    fn missing_records_load_as_defaults() {
        let store = BoardStore::new(MemoryStore::new());
        assert!(store.load_nodes().unwrap().is_empty());
        assert_eq!(store.load_settings().unwrap(), SavedSettings::default());
    }

    #[test]
    fn corrupt_records_load_as_defaults() {
        let mut backend = MemoryStore::new();
        backend.set(NODES_KEY, "{not json").unwrap();
        backend.set(SETTINGS_KEY, "[42]").unwrap();

        let store = BoardStore::new(backend);
        assert!(store.load_nodes().unwrap().is_empty());
        assert_eq!(store.load_settings().unwrap(), SavedSettings::default());
    }

    #[test]
    fn backend_failure_is_an_error() {
        struct RefusingStore;
        impl KeyValueStore for RefusingStore {
            fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
                Err(StoreError::Backend(String::from("offline")))
            }
            fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
                Err(StoreError::Backend(String::from("offline")))
            }
        }

        let mut store = BoardStore::new(RefusingStore);
        assert!(store.load_nodes().is_err());
        assert!(store.save_settings(&SavedSettings::default()).is_err());
    }
}
