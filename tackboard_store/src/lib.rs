// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tackboard_store --heading-base-level=0

//! Tackboard Store: persistence for board records.
//!
//! A [`BoardStore`] serializes the node collection and the board settings
//! (transform plus name) as JSON over a pluggable [`KeyValueStore`]
//! backend. Loading is forgiving: a missing or corrupt record comes back as
//! the default, so a damaged store never wedges startup. Only a refusing
//! backend and unserializable records are errors.
//!
//! Saves are expected to be debounced: drive a [`Debouncer`] from the
//! host's clock, poke it on every mutation, and write when it fires, so a
//! 60 Hz drag settles into a single write.
//!
//! ## Minimal example
//!
//! ```rust
//! use tackboard_store::{BoardStore, MemoryStore, SavedSettings};
//! use tackboard_view::BoardTransform;
//!
//! let mut store = BoardStore::new(MemoryStore::new());
//! store.save_settings(&SavedSettings {
//!     transform: BoardTransform::new(50.0, 30.0, 2.0),
//!     name: String::from("Moodboard"),
//! })?;
//!
//! let restored = store.load_settings()?;
//! assert_eq!(restored.transform.scale, 2.0);
//! # Ok::<(), tackboard_store::StoreError>(())
//! ```
//!
//! [`MemoryBlobStore`] provides the matching in-memory implementation of
//! the board's binary-payload seam, for tests and storage-less hosts.

mod debounce;
mod memory;
mod persist;

pub use debounce::{Debouncer, SAVE_DEBOUNCE};
pub use memory::{MemoryBlobStore, MemoryStore};
pub use persist::{
    BoardStore, KeyValueStore, NODES_KEY, SETTINGS_KEY, SavedSettings, StoreError,
};
