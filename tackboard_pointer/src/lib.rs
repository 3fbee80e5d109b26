// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tackboard_pointer --heading-base-level=0

//! Tackboard Pointer: the live set of active pointers on a board surface.
//!
//! This crate maintains the pointer cache that every Tackboard gesture is
//! derived from. It tracks which pointers (mouse/touch/pen) are currently
//! pressed, keeps their latest positions, and classifies the single-pointer
//! vs. multi-pointer ("pinching") states that higher layers use to arbitrate
//! between drag and pinch gestures.
//!
//! The tracker is headless: it does not listen to a real DOM or window.
//! Callers feed it [`PointerEvent`]s — already routed and carrying the
//! application's hit-target key — and it answers with [`PointerUpdate`]
//! snapshots describing the transition, in the same way the rest of the
//! Tackboard kernels accept pre-resolved inputs.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tackboard_pointer::{PointerEvent, PointerId, PointerTracker, PointerType};
//!
//! let mut tracker = PointerTracker::<&str>::new();
//!
//! let down = PointerEvent {
//!     id: PointerId(1),
//!     pointer_type: PointerType::Touch,
//!     position: Point::new(100.0, 100.0),
//!     target: "background",
//!     is_primary: true,
//! };
//! let update = tracker.pointer_down(&down).unwrap();
//! assert!(update.pointer_down);
//! assert!(!update.pinching);
//!
//! // A second distinct pointer flips the pinching classification.
//! let second = PointerEvent { id: PointerId(2), is_primary: false, ..down.clone() };
//! let update = tracker.pointer_down(&second).unwrap();
//! assert!(update.pinching);
//! assert_eq!(update.touches.len(), 2);
//! ```
//!
//! ## Semantics
//!
//! - A pointer is added on down, deduplicated by id: a down for an already
//!   cached id is a no-op (`None`), since the same down is commonly observed
//!   on both an element listener and a document listener.
//! - Moves update the cached sample in place; a move for an id this tracker
//!   never saw yields `None` rather than an error.
//! - Ups remove the sample; again, an unknown id yields `None`. Out-of-order
//!   or duplicate browser events are expected and harmless.
//! - [`PointerTracker::is_pinching`] is true iff two or more pointers are
//!   cached. The flag is advisory; consumers use it to suppress
//!   single-pointer drag handling while a second pointer is present.
//!
//! Trackers can be scoped to a subset of pointer types (touch-only for a
//! pinch engine, for example) via [`PointerTypes`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tracker;

pub use tracker::{
    PointerEvent, PointerId, PointerPhase, PointerSample, PointerTracker, PointerType,
    PointerTypes, PointerUpdate,
};
