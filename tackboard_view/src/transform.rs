// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Smallest permitted board scale.
pub const SCALE_MIN: f64 = 0.02;

/// Largest permitted board scale.
pub const SCALE_MAX: f64 = 256.0;

/// The board's shared viewport transform: a pan offset plus a uniform scale.
///
/// All node rendering is positioned by this one value. The pan offset is
/// expressed in screen pixels and the scale maps board/world units to screen
/// pixels, so a world point `w` appears on screen at `w * scale + (x, y)`.
///
/// The scale is kept inside `[SCALE_MIN, SCALE_MAX]` by every operation;
/// requesting a value outside the range silently clamps rather than failing.
///
/// Operations return a new value instead of mutating in place. Gesture code
/// holds exactly one `BoardTransform` and replaces it wholesale, so readers
/// never observe a half-applied update mid-gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardTransform {
    /// Horizontal pan offset in screen pixels.
    pub x: f64,
    /// Vertical pan offset in screen pixels.
    pub y: f64,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl Default for BoardTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl BoardTransform {
    /// Creates a transform from a pan offset and scale, clamping the scale.
    #[must_use]
    pub fn new(x: f64, y: f64, scale: f64) -> Self {
        Self {
            x,
            y,
            scale: scale.clamp(SCALE_MIN, SCALE_MAX),
        }
    }

    /// Returns the pan offset as a vector.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns the transform translated by `delta` screen pixels.
    ///
    /// Scale is untouched; this is the pan-drag code path.
    #[must_use]
    pub fn pan_by(self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            scale: self.scale,
        }
    }

    /// Returns the transform with the pan offset replaced outright.
    #[must_use]
    pub fn with_pan(self, pan: Vec2) -> Self {
        Self {
            x: pan.x,
            y: pan.y,
            scale: self.scale,
        }
    }

    /// Computes one geometric zoom step from the current scale.
    ///
    /// A positive factor multiplies the scale by `1 + factor`, a negative
    /// factor divides it by `1 + |factor|`, and zero leaves it unchanged.
    /// The result is clamped into `[SCALE_MIN, SCALE_MAX]`. Wheel and
    /// keyboard zoom both step through this so that zooming in and back out
    /// by the same factor round-trips to the starting scale.
    #[must_use]
    pub fn step_scale(&self, factor: f64) -> f64 {
        let stepped = if factor > 0.0 {
            self.scale * (1.0 + factor)
        } else if factor < 0.0 {
            self.scale / (1.0 + factor.abs())
        } else {
            self.scale
        };
        stepped.clamp(SCALE_MIN, SCALE_MAX)
    }

    /// Zooms by a geometric step while keeping `anchor` fixed on screen.
    ///
    /// See [`BoardTransform::zoom_to`] for the anchor-preservation contract.
    #[must_use]
    pub fn zoom_about(self, anchor: Point, factor: f64) -> Self {
        self.zoom_to(anchor, self.step_scale(factor))
    }

    /// Zooms to an explicit scale while keeping `anchor` fixed on screen.
    ///
    /// The world point under the screen-space `anchor` maps to the same
    /// screen position before and after the scale change. If the clamped
    /// scale equals the current scale the transform is returned bitwise
    /// unchanged, so repeated no-op zooms never accumulate pan drift.
    #[must_use]
    pub fn zoom_to(self, anchor: Point, scale: f64) -> Self {
        let scale = scale.clamp(SCALE_MIN, SCALE_MAX);
        if scale == self.scale {
            return self;
        }
        let ratio = 1.0 - scale / self.scale;
        Self {
            x: self.x + (anchor.x - self.x) * ratio,
            y: self.y + (anchor.y - self.y) * ratio,
            scale,
        }
    }

    /// Converts a screen-space point into board/world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        Point::new((pt.x - self.x) / self.scale, (pt.y - self.y) / self.scale)
    }

    /// Converts a board/world point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        Point::new(pt.x * self.scale + self.x, pt.y * self.scale + self.y)
    }

    /// Returns the transform panned so `world_pt` sits at the viewport center.
    ///
    /// Scale is preserved. Used by "center on selection" and by centering
    /// newly created nodes.
    #[must_use]
    pub fn centered_on(self, world_pt: Point, viewport: Size) -> Self {
        let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
        Self {
            x: center.x - world_pt.x * self.scale,
            y: center.y - world_pt.y * self.scale,
            scale: self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_factor_zoom_is_identity() {
        let transforms = [
            BoardTransform::default(),
            BoardTransform::new(50.0, 30.0, 2.0),
            BoardTransform::new(-120.0, 7.5, 0.25),
        ];
        for t in transforms {
            assert_eq!(t.zoom_about(Point::new(123.0, -45.0), 0.0), t);
        }
    }

    #[test]
    fn zoom_to_current_scale_is_bitwise_noop() {
        let t = BoardTransform::new(10.0, 20.0, 1.5);
        let back = t.zoom_to(Point::new(400.0, 300.0), 1.5);
        assert_eq!(back.x, t.x);
        assert_eq!(back.y, t.y);
    }

    #[test]
    fn zoom_to_cursor_scenario() {
        // {0,0,1} zoomed to 1.04 anchored at (400,300): ratio = -0.04.
        let t = BoardTransform::default();
        let zoomed = t.zoom_to(Point::new(400.0, 300.0), 1.04);
        assert!((zoomed.x - -16.0).abs() < 1e-12);
        assert!((zoomed.y - -12.0).abs() < 1e-12);
        assert!((zoomed.scale - 1.04).abs() < 1e-12);
    }

    #[test]
    fn anchor_world_point_is_invariant() {
        let t = BoardTransform::new(35.0, -80.0, 1.7);
        let anchor = Point::new(412.0, 297.0);
        let before = t.screen_to_world(anchor);
        for factor in [0.04, -0.04, 0.5, -0.5] {
            let zoomed = t.zoom_about(anchor, factor);
            let after = zoomed.screen_to_world(anchor);
            assert!((before.x - after.x).abs() < 1e-9);
            assert!((before.y - after.y).abs() < 1e-9);
        }
    }

    #[test]
    fn scale_always_clamped() {
        let t = BoardTransform::default();
        assert_eq!(t.zoom_to(Point::ZERO, 1e9).scale, SCALE_MAX);
        assert_eq!(t.zoom_to(Point::ZERO, 0.0).scale, SCALE_MIN);
        assert_eq!(BoardTransform::new(0.0, 0.0, -4.0).scale, SCALE_MIN);

        // Stepping cannot escape the range either.
        let mut scale = 1.0;
        for _ in 0..200 {
            scale = BoardTransform::new(0.0, 0.0, scale).step_scale(0.5);
        }
        assert_eq!(scale, SCALE_MAX);
    }

    #[test]
    fn step_scale_round_trips() {
        let t = BoardTransform::new(0.0, 0.0, 1.3);
        let up = t.step_scale(0.04);
        let down = BoardTransform::new(0.0, 0.0, up).step_scale(-0.04);
        assert!((down - 1.3).abs() < 1e-12);
    }

    #[test]
    fn screen_world_round_trip() {
        let t = BoardTransform::new(42.0, -17.0, 3.5);
        let pt = Point::new(100.0, 250.0);
        let back = t.world_to_screen(t.screen_to_world(pt));
        assert!((back.x - pt.x).abs() < 1e-9);
        assert!((back.y - pt.y).abs() < 1e-9);
    }

    #[test]
    fn centered_on_places_point_at_viewport_center() {
        let t = BoardTransform::new(999.0, -999.0, 2.0);
        let centered = t.centered_on(Point::new(10.0, 20.0), Size::new(800.0, 600.0));
        let on_screen = centered.world_to_screen(Point::new(10.0, 20.0));
        assert!((on_screen.x - 400.0).abs() < 1e-9);
        assert!((on_screen.y - 300.0).abs() < 1e-9);
        assert_eq!(centered.scale, 2.0);
    }

    #[test]
    fn pan_by_leaves_scale_alone() {
        let t = BoardTransform::new(0.0, 0.0, 1.0).pan_by(Vec2::new(50.0, 30.0));
        assert_eq!(t, BoardTransform::new(50.0, 30.0, 1.0));
    }
}
