// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tackboard_drag --heading-base-level=0

//! Tackboard Drag: single-target drag gestures over a pointer cache.
//!
//! A [`DragEngine`] turns the [`PointerUpdate`](tackboard_pointer::PointerUpdate)
//! stream produced by a [`PointerTracker`](tackboard_pointer::PointerTracker)
//! into one logical drag gesture at a time: it captures where the pointer and
//! the dragged element started, emits offset/movement vectors on every move,
//! and optionally snaps the offset to a grid.
//!
//! Several engines can subscribe to the same pointer stream with mutually
//! exclusive [`DragFilter`]s — one instance pans the board background while a
//! second, scoped to draggable node targets, moves individual nodes. Each
//! instance holds at most one active target; a second qualifying press while
//! a target is held is ignored until the gesture ends.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use tackboard_drag::{DragConfig, DragEngine};
//! use tackboard_pointer::{PointerEvent, PointerId, PointerTracker, PointerType};
//!
//! let mut tracker = PointerTracker::<&str>::new();
//! let mut drag = DragEngine::new(DragConfig::default());
//!
//! let down = PointerEvent {
//!     id: PointerId(1),
//!     pointer_type: PointerType::Mouse,
//!     position: Point::new(100.0, 100.0),
//!     target: "background",
//!     is_primary: true,
//! };
//! let update = tracker.pointer_down(&down).unwrap();
//! drag.pointer_down(&update, None).unwrap();
//!
//! let moved = PointerEvent { position: Point::new(150.0, 130.0), ..down };
//! let update = tracker.pointer_move(&moved).unwrap();
//! let event = drag.pointer_move(&update).unwrap();
//! assert_eq!(event.movement, Vec2::new(50.0, 30.0));
//! assert_eq!(event.offset, Vec2::new(50.0, 30.0));
//! ```
//!
//! Click-vs-drag disambiguation is deliberately **not** performed here; the
//! orchestrator compares the final movement against its own minimum drag
//! distance. The engine reports what happened, not what it means.
//!
//! This crate is `no_std`.

#![no_std]

mod engine;
mod grid;

pub use engine::{DragConfig, DragEnd, DragEngine, DragFilter, DragStart, DragUpdate};
pub use grid::{GridStep, snap};
