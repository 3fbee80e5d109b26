// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The binary-payload collaborator: blob storage keyed by node id.
//!
//! Image nodes keep their pixels out of the JSON node record; the record
//! holds metadata and the payload lives here, keyed by the node's id. The
//! board only *requires* one operation from the seam — freeing a deleted
//! node's payload — and treats that as best-effort: a failing store never
//! blocks node removal.

use crate::node::NodeId;

/// Error raised by a blob store backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlobError {
    /// The backing store could not be reached or opened.
    Unavailable,
    /// The backend failed with its own diagnostic.
    Backend(String),
}

impl core::fmt::Display for BlobError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable => f.write_str("blob store unavailable"),
            Self::Backend(message) => write!(f, "blob store backend error: {message}"),
        }
    }
}

impl std::error::Error for BlobError {}

/// Storage for binary payloads, keyed by node id.
///
/// Implementations wrap whatever the host platform offers (IndexedDB, a
/// file directory, an object store). All operations are synchronous from
/// the board's point of view; async backends complete the transfer on
/// their own time.
pub trait BlobStore {
    /// Stores (or replaces) the payload for a node.
    fn put(&mut self, id: &NodeId, bytes: &[u8]) -> Result<(), BlobError>;

    /// Fetches the payload for a node, `None` if absent.
    fn get(&self, id: &NodeId) -> Result<Option<Vec<u8>>, BlobError>;

    /// Frees the payload for a node. Removing an absent key succeeds.
    fn remove(&mut self, id: &NodeId) -> Result<(), BlobError>;
}

/// A blob store that stores nothing, for boards without binary payloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullBlobStore;

impl BlobStore for NullBlobStore {
    fn put(&mut self, _id: &NodeId, _bytes: &[u8]) -> Result<(), BlobError> {
        Ok(())
    }

    fn get(&self, _id: &NodeId) -> Result<Option<Vec<u8>>, BlobError> {
        Ok(None)
    }

    fn remove(&mut self, _id: &NodeId) -> Result<(), BlobError> {
        Ok(())
    }
}
