// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tackboard_pinch --heading-base-level=0

//! Tackboard Pinch: a scale multiplier derived from two simultaneous touches.
//!
//! A [`PinchEngine`] watches the touch list of a
//! [`PointerTracker`](tackboard_pointer::PointerTracker) and, while two
//! touches are down, turns changes in their separation into a clamped scale
//! factor plus a gesture origin (the midpoint of the pair). The orchestrator
//! feeds the scale and origin into an anchor-preserving zoom.
//!
//! ## Accumulation strategy
//!
//! The scale chains **multiplicatively off the previous distance** each move
//! (`scale = last_scale * d_now / d_prev`) rather than off the initial
//! distance. A pinch that is interrupted and resumed therefore continues
//! from the last committed scale with no snap-back; the cost is that a very
//! long pinch accumulates floating-point drift, which the clamp bounds and
//! the next gesture resets.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tackboard_pinch::PinchEngine;
//! use tackboard_pointer::{PointerEvent, PointerId, PointerTracker, PointerType, PointerTypes};
//!
//! let mut tracker = PointerTracker::<u32>::with_types(PointerTypes::TOUCH);
//! let mut pinch = PinchEngine::new();
//!
//! let finger = |id: u64, x: f64| PointerEvent {
//!     id: PointerId(id),
//!     pointer_type: PointerType::Touch,
//!     position: Point::new(x, 0.0),
//!     target: 0,
//!     is_primary: id == 1,
//! };
//!
//! pinch.pointer_down(&tracker.pointer_down(&finger(1, 0.0)).unwrap());
//! pinch.pointer_down(&tracker.pointer_down(&finger(2, 100.0)).unwrap());
//!
//! // Spreading the fingers to 150px apart scales by 1.5.
//! let update = pinch
//!     .pointer_move(&tracker.pointer_move(&finger(2, 150.0)).unwrap())
//!     .unwrap();
//! assert!((update.scale - 1.5).abs() < 1e-12);
//! assert_eq!(update.origin, Point::new(75.0, 0.0));
//! ```
//!
//! A third touch is tolerated; only the first two cached touches participate
//! in the distance calculation. Rotation is not derived — the transform
//! model is uniform scale + translation only.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;
use tackboard_pointer::PointerUpdate;
use tackboard_view::{SCALE_MAX, SCALE_MIN};

/// One pinch step: the current pair distance, gesture origin, and the
/// accumulated, clamped scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchUpdate {
    /// Euclidean distance between the two touches.
    pub distance: f64,
    /// Midpoint of the two touches; the zoom anchor.
    pub origin: Point,
    /// Accumulated scale, clamped to the configured range.
    pub scale: f64,
}

/// Derives a scale multiplier from two simultaneous touch pointers.
#[derive(Clone, Debug)]
pub struct PinchEngine {
    scale_min: f64,
    scale_max: f64,
    last_scale: f64,
    last_distance: f64,
    initial_touches: Option<(Point, Point)>,
}

impl Default for PinchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PinchEngine {
    /// Creates an engine with the board's default scale range and scale 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_scale_range(SCALE_MIN, SCALE_MAX)
    }

    /// Creates an engine clamping to the given scale range.
    ///
    /// The range is normalized so that `min <= max`.
    #[must_use]
    pub fn with_scale_range(min: f64, max: f64) -> Self {
        let (scale_min, scale_max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            scale_min,
            scale_max,
            last_scale: 1.0,
            last_distance: 0.0,
            initial_touches: None,
        }
    }

    /// The scale the gesture has accumulated so far.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.last_scale
    }

    /// Re-anchors the accumulated scale.
    ///
    /// Call this when wheel or keyboard zoom changes the board scale outside
    /// the pinch gesture, so the next pinch continues from the real value.
    pub fn set_scale(&mut self, scale: f64) {
        self.last_scale = scale.clamp(self.scale_min, self.scale_max);
    }

    /// The touch pair snapshotted when the pinch began, if one is active.
    #[must_use]
    pub fn initial_touches(&self) -> Option<(Point, Point)> {
        self.initial_touches
    }

    /// Handles a press snapshot.
    ///
    /// When the second touch joins, the pair and their separation are
    /// snapshotted as the baseline for subsequent moves.
    pub fn pointer_down<K>(&mut self, update: &PointerUpdate<K>) {
        if update.touches.len() == 2 {
            let (a, b) = (update.touches[0], update.touches[1]);
            self.initial_touches = Some((a, b));
            self.last_distance = a.distance(b);
        }
    }

    /// Handles a move snapshot, emitting the next scale step while pinching.
    ///
    /// With no usable baseline (a move arriving before the two-touch press
    /// was observed, or right after a touch lifted), the current distance
    /// becomes the new baseline and nothing is emitted.
    pub fn pointer_move<K>(&mut self, update: &PointerUpdate<K>) -> Option<PinchUpdate> {
        if !update.pinching {
            return None;
        }
        let (a, b) = match update.touches.as_slice() {
            [a, b, ..] => (*a, *b),
            _ => return None,
        };

        let distance = a.distance(b);
        if self.last_distance <= 0.0 || distance <= 0.0 {
            self.last_distance = distance;
            return None;
        }

        let scale = (self.last_scale * distance / self.last_distance)
            .clamp(self.scale_min, self.scale_max);
        self.last_scale = scale;
        self.last_distance = distance;

        Some(PinchUpdate {
            distance,
            origin: a.midpoint(b),
            scale,
        })
    }

    /// Handles a release snapshot.
    ///
    /// The baseline distance is invalidated; once fewer than two touches
    /// remain the initial pair is cleared as well. The accumulated scale is
    /// retained so a future pinch continues from the last committed value.
    pub fn pointer_up<K>(&mut self, update: &PointerUpdate<K>) {
        self.last_distance = 0.0;
        if update.touches.len() < 2 {
            self.initial_touches = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tackboard_pointer::{
        PointerEvent, PointerId, PointerTracker, PointerType, PointerTypes,
    };

    fn finger(id: u64, x: f64, y: f64) -> PointerEvent<u32> {
        PointerEvent {
            id: PointerId(id),
            pointer_type: PointerType::Touch,
            position: Point::new(x, y),
            target: 0,
            is_primary: id == 1,
        }
    }

    fn touch_tracker() -> PointerTracker<u32> {
        PointerTracker::with_types(PointerTypes::TOUCH)
    }

    #[test]
    fn spreading_scales_up_and_chains_off_previous_distance() {
        let mut tracker = touch_tracker();
        let mut pinch = PinchEngine::new();

        pinch.pointer_down(&tracker.pointer_down(&finger(1, 0.0, 0.0)).unwrap());
        pinch.pointer_down(&tracker.pointer_down(&finger(2, 100.0, 0.0)).unwrap());
        assert!(pinch.initial_touches().is_some());

        let update = pinch
            .pointer_move(&tracker.pointer_move(&finger(2, 200.0, 0.0)).unwrap())
            .unwrap();
        assert!((update.scale - 2.0).abs() < 1e-12);

        // The next step multiplies from the new 200px baseline, not from 100px.
        let update = pinch
            .pointer_move(&tracker.pointer_move(&finger(2, 100.0, 0.0)).unwrap())
            .unwrap();
        assert!((update.scale - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_touch_moves_emit_nothing() {
        let mut tracker = touch_tracker();
        let mut pinch = PinchEngine::new();
        pinch.pointer_down(&tracker.pointer_down(&finger(1, 0.0, 0.0)).unwrap());
        assert!(
            pinch
                .pointer_move(&tracker.pointer_move(&finger(1, 50.0, 0.0)).unwrap())
                .is_none()
        );
    }

    #[test]
    fn scale_is_clamped_to_the_range() {
        let mut tracker = touch_tracker();
        let mut pinch = PinchEngine::with_scale_range(0.5, 2.0);

        pinch.pointer_down(&tracker.pointer_down(&finger(1, 0.0, 0.0)).unwrap());
        pinch.pointer_down(&tracker.pointer_down(&finger(2, 10.0, 0.0)).unwrap());

        let update = pinch
            .pointer_move(&tracker.pointer_move(&finger(2, 1000.0, 0.0)).unwrap())
            .unwrap();
        assert_eq!(update.scale, 2.0);
    }

    #[test]
    fn lifting_a_finger_keeps_scale_and_resets_baseline() {
        let mut tracker = touch_tracker();
        let mut pinch = PinchEngine::new();

        pinch.pointer_down(&tracker.pointer_down(&finger(1, 0.0, 0.0)).unwrap());
        pinch.pointer_down(&tracker.pointer_down(&finger(2, 100.0, 0.0)).unwrap());
        pinch
            .pointer_move(&tracker.pointer_move(&finger(2, 150.0, 0.0)).unwrap())
            .unwrap();
        assert!((pinch.scale() - 1.5).abs() < 1e-12);

        pinch.pointer_up(&tracker.pointer_up(&finger(2, 150.0, 0.0)).unwrap());
        assert!(pinch.initial_touches().is_none());
        assert!((pinch.scale() - 1.5).abs() < 1e-12);

        // A new second touch continues from the committed scale.
        pinch.pointer_down(&tracker.pointer_down(&finger(3, 80.0, 0.0)).unwrap());
        let update = pinch
            .pointer_move(&tracker.pointer_move(&finger(3, 160.0, 0.0)).unwrap())
            .unwrap();
        assert!((update.scale - 3.0).abs() < 1e-12);
    }

    #[test]
    fn third_touch_does_not_participate() {
        let mut tracker = touch_tracker();
        let mut pinch = PinchEngine::new();

        pinch.pointer_down(&tracker.pointer_down(&finger(1, 0.0, 0.0)).unwrap());
        pinch.pointer_down(&tracker.pointer_down(&finger(2, 100.0, 0.0)).unwrap());
        pinch.pointer_down(&tracker.pointer_down(&finger(3, 500.0, 500.0)).unwrap());

        // Moving the third touch leaves the first-pair distance unchanged,
        // so the scale holds at 1.
        let update = pinch
            .pointer_move(&tracker.pointer_move(&finger(3, 900.0, 900.0)).unwrap())
            .unwrap();
        assert!((update.scale - 1.0).abs() < 1e-12);
        assert_eq!(update.origin, Point::new(50.0, 0.0));
    }

    #[test]
    fn move_without_baseline_rebaselines_silently() {
        let mut tracker = touch_tracker();
        let mut pinch = PinchEngine::new();

        // Feed the tracker directly, skipping the engine's pointer_down.
        tracker.pointer_down(&finger(1, 0.0, 0.0));
        tracker.pointer_down(&finger(2, 100.0, 0.0));

        let update = tracker.pointer_move(&finger(2, 120.0, 0.0)).unwrap();
        assert!(pinch.pointer_move(&update).is_none());

        // The re-baselined distance now drives the next step.
        let update = tracker.pointer_move(&finger(2, 240.0, 0.0)).unwrap();
        let step = pinch.pointer_move(&update).unwrap();
        assert!((step.scale - 2.0).abs() < 1e-12);
    }

    #[test]
    fn set_scale_reanchors_after_external_zoom() {
        let mut pinch = PinchEngine::new();
        pinch.set_scale(4.0);
        assert_eq!(pinch.scale(), 4.0);
        pinch.set_scale(1e9);
        assert_eq!(pinch.scale(), SCALE_MAX);
    }
}
