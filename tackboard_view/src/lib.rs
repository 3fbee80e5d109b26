// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tackboard_view --heading-base-level=0

//! Tackboard View: board transform primitives.
//!
//! This crate provides the small, headless model of a pinboard's shared
//! viewport transform: a pan offset plus a uniform scale applied to all node
//! rendering. It focuses on:
//! - Transform state (pan + zoom) with a clamped scale range.
//! - Anchor-preserving zoom ("zoom toward cursor").
//! - Geometric scale stepping for wheel/keyboard zoom.
//! - Coordinate conversion between board/world and screen space.
//!
//! It does **not** own any node collection or gesture state. Callers are
//! expected to:
//! - Maintain their own node collection and selection.
//! - Wire pointer gestures (for example, from `tackboard_drag` and
//!   `tackboard_pinch`) into pan/zoom operations at a higher layer.
//! - Read the transform back out to position rendered content.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tackboard_view::BoardTransform;
//!
//! let transform = BoardTransform::default();
//!
//! // Zoom in one wheel step, keeping the point under the cursor fixed.
//! let cursor = Point::new(400.0, 300.0);
//! let zoomed = transform.zoom_about(cursor, 0.04);
//! assert!((zoomed.scale - 1.04).abs() < 1e-12);
//!
//! // The world point under the cursor is unchanged by the zoom.
//! let before = transform.screen_to_world(cursor);
//! let after = zoomed.screen_to_world(cursor);
//! assert!((before.x - after.x).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** scale factor; rotation
//!   and non-uniform scale are intentionally unsupported.
//! - All operations clamp the scale into `[SCALE_MIN, SCALE_MAX]`; a
//!   requested scale outside the range is not an error.
//! - A zoom that resolves to the current scale returns the transform
//!   unchanged, so floating-point round-trips never introduce pan jitter.
//!
//! This crate is `no_std`.

#![no_std]

mod transform;

pub use transform::{BoardTransform, SCALE_MAX, SCALE_MIN};
