// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;

use tackboard_board::{BlobError, BlobStore, NodeId};

use crate::persist::{KeyValueStore, StoreError};

/// An in-memory [`KeyValueStore`].
///
/// The default backend for tests and for hosts without durable storage;
/// contents are lost when the value is dropped.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// An in-memory [`BlobStore`] keyed by node id.
#[derive(Clone, Debug, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<NodeId, Vec<u8>>,
}

impl MemoryBlobStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored payloads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// True when no payloads are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    fn put(&mut self, id: &NodeId, bytes: &[u8]) -> Result<(), BlobError> {
        self.blobs.insert(id.clone(), bytes.to_vec());
        Ok(())
    }

    fn get(&self, id: &NodeId) -> Result<Option<Vec<u8>>, BlobError> {
        Ok(self.blobs.get(id).cloned())
    }

    fn remove(&mut self, id: &NodeId) -> Result<(), BlobError> {
        self.blobs.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_set_then_get_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(String::from("v2")));
    }

    #[test]
    fn blob_remove_of_absent_key_succeeds() {
        let mut store = MemoryBlobStore::new();
        let id = NodeId::from("ghost");
        store.remove(&id).unwrap();

        store.put(&id, &[1, 2, 3]).unwrap();
        assert_eq!(store.get(&id).unwrap(), Some(vec![1, 2, 3]));
        store.remove(&id).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn board_removal_frees_the_payload() {
        use kurbo::Size;
        use tackboard_board::{Board, NodeContent};

        let mut board = Board::new(Size::new(800.0, 600.0), MemoryBlobStore::new());
        let (id, _) = board.add_node(NodeContent::empty_image());
        board.blobs_mut().put(&id, &[0xff, 0xd8]).unwrap();

        board.remove_node(&id);
        assert!(board.blobs_mut().is_empty());
    }
}
