// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tackboard_board --heading-base-level=0

//! Tackboard Board: the orchestrator tying the gesture kernels to a node
//! collection.
//!
//! A [`Board`] owns the nodes, the single selection, and the shared
//! [`BoardTransform`](tackboard_view::BoardTransform), and wires a
//! [`PointerTracker`](tackboard_pointer::PointerTracker), two
//! [`DragEngine`](tackboard_drag::DragEngine)s (background pan and node
//! drag), and a [`PinchEngine`](tackboard_pinch::PinchEngine) over one
//! routed pointer stream. Hosts feed it pointer, wheel, and keyboard events
//! and apply the returned [`BoardEvent`]s to their rendering layer; the
//! board itself never renders.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tackboard_board::{
//!     Board, BoardEvent, BoardTarget, NullBlobStore,
//! };
//! use tackboard_pointer::{PointerEvent, PointerId, PointerType};
//!
//! let mut board = Board::new(Size::new(800.0, 600.0), NullBlobStore);
//!
//! let press = PointerEvent {
//!     id: PointerId(1),
//!     pointer_type: PointerType::Mouse,
//!     position: Point::new(100.0, 100.0),
//!     target: BoardTarget::Background,
//!     is_primary: true,
//! };
//! board.pointer_down(&press);
//!
//! let drag = PointerEvent {
//!     position: Point::new(150.0, 130.0),
//!     ..press
//! };
//! let events = board.pointer_move(&drag);
//! assert!(matches!(events[0], BoardEvent::TransformChanged(t) if t.x == 50.0));
//! ```
//!
//! Hit testing stays with the host: every pointer event arrives already
//! resolved to a [`BoardTarget`]. Node image payloads live behind the
//! [`BlobStore`] seam keyed by [`NodeId`], so the board can free them on
//! removal without knowing where bytes are kept.

mod blob;
mod board;
mod input;
mod node;

pub use blob::{BlobError, BlobStore, NullBlobStore};
pub use board::{
    Board, BoardDebugInfo, BoardEvent, BoardTarget, KEY_ZOOM_FACTOR, MIN_DRAG_DISTANCE,
    NODE_GRID_STEP, WHEEL_ZOOM_FACTOR,
};
pub use input::{Key, Modifiers};
pub use node::{Node, NodeContent, NodeId};
