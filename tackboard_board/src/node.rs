// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node data model: stable ids, content kinds, and placement.

use kurbo::{Point, Size};

/// Stable, unique identifier for a node.
///
/// Ids survive persistence round-trips and double as the key for binary
/// payloads in the blob store.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub String);

impl NodeId {
    /// Generates a fresh random (UUID v4) id.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl core::fmt::Display for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// What a node holds, one variant per known node kind.
///
/// The renderer dispatches on this tag exhaustively; adding a kind is a
/// compile-visible change rather than a runtime lookup-and-bail.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum NodeContent {
    /// A freeform text note.
    Note {
        /// The note body.
        text: String,
    },
    /// An image whose binary payload lives in the blob store under the
    /// node's id; the record holds presentation metadata only.
    Image {
        /// Alternative text.
        alt: Option<String>,
        /// Intrinsic pixel size of the decoded image, once known.
        natural_size: Option<Size>,
    },
}

impl NodeContent {
    /// An empty note.
    #[must_use]
    pub fn empty_note() -> Self {
        Self::Note {
            text: String::new(),
        }
    }

    /// An image placeholder with no payload loaded yet.
    #[must_use]
    pub fn empty_image() -> Self {
        Self::Image {
            alt: None,
            natural_size: None,
        }
    }

    /// The size a freshly created node of this kind starts with.
    #[must_use]
    pub fn default_size(&self) -> Option<Size> {
        match self {
            Self::Note { .. } => Some(Size::new(256.0, 256.0)),
            // Images size themselves once the payload is decoded.
            Self::Image { .. } => None,
        }
    }
}

/// One pinned element on the board.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Stable id.
    pub id: NodeId,
    /// Content payload, tagged by kind.
    pub content: NodeContent,
    /// Position in board/world coordinates.
    pub position: Point,
    /// Display size, if established.
    pub size: Option<Size>,
    /// Stacking order; higher draws on top. Authoritative for z-order
    /// regardless of the node's index in the collection.
    pub z_index: u64,
}

impl Node {
    /// Creates a node with a fresh id at the origin.
    #[must_use]
    pub fn new(content: NodeContent) -> Self {
        let size = content.default_size();
        Self {
            id: NodeId::generate(),
            content,
            position: Point::ZERO,
            size,
            z_index: 0,
        }
    }

    /// The node's center in board/world coordinates, treating a node of
    /// unknown size as a point.
    #[must_use]
    pub fn center(&self) -> Point {
        match self.size {
            Some(size) => Point::new(
                self.position.x + size.width / 2.0,
                self.position.y + size.height / 2.0,
            ),
            None => self.position,
        }
    }
}
