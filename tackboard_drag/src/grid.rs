// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Rounds `value` to the nearest multiple of `step`.
///
/// A non-positive step is treated as "no grid" and returns `value`
/// unchanged. For any positive step the operation is idempotent.
#[must_use]
pub fn snap(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Per-axis grid granularity for snapped drags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStep {
    /// Horizontal step, in whatever coordinate space the drag runs in.
    pub x: f64,
    /// Vertical step.
    pub y: f64,
}

impl GridStep {
    /// Creates a grid with the given per-axis steps.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a square grid.
    #[must_use]
    pub const fn uniform(step: f64) -> Self {
        Self { x: step, y: step }
    }

    /// Snaps an offset to the grid, per axis.
    #[must_use]
    pub fn snap_vec(&self, offset: Vec2) -> Vec2 {
        Vec2::new(snap(offset.x, self.x), snap(offset.y, self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_nearest_multiple() {
        assert_eq!(snap(23.0, 10.0), 20.0);
        assert_eq!(snap(-7.0, 10.0), -10.0);
        assert_eq!(snap(25.0, 10.0), 30.0);
        assert_eq!(snap(0.0, 10.0), 0.0);
    }

    #[test]
    fn snap_is_idempotent() {
        for value in [-101.3, -7.0, 0.0, 0.49, 23.0, 999.9] {
            for step in [1.0, 2.5, 10.0, 64.0] {
                let once = snap(value, step);
                assert_eq!(snap(once, step), once);
            }
        }
    }

    #[test]
    fn non_positive_step_is_identity() {
        assert_eq!(snap(23.0, 0.0), 23.0);
        assert_eq!(snap(23.0, -5.0), 23.0);
    }

    #[test]
    fn grid_step_snaps_per_axis() {
        let grid = GridStep::new(10.0, 5.0);
        assert_eq!(grid.snap_vec(Vec2::new(23.0, -7.0)), Vec2::new(20.0, -5.0));
        let square = GridStep::uniform(10.0);
        assert_eq!(
            square.snap_vec(Vec2::new(23.0, -7.0)),
            Vec2::new(20.0, -10.0)
        );
    }
}
