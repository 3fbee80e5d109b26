// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use tackboard_pointer::PointerUpdate;

use crate::grid::GridStep;

/// Decides which hit targets may initiate a drag on an engine instance.
///
/// This replaces DOM-style CSS selector matching with a predicate over the
/// application's hit-target key. A press whose target is rejected does not
/// start a drag, but the underlying pointer tracker still caches the pointer
/// for other consumers (pinch detection in particular).
#[derive(Clone, Copy, Debug)]
pub enum DragFilter<K> {
    /// Any target may initiate a drag.
    Any,
    /// Only a press exactly on the given target initiates a drag, not on its
    /// descendants. Used by the board-pan engine to ignore presses on nodes.
    BoundOnly(K),
    /// Only targets accepted by the predicate initiate a drag. Used by the
    /// node-drag engine to accept draggable node targets only.
    Matching(fn(&K) -> bool),
}

impl<K> Default for DragFilter<K> {
    fn default() -> Self {
        Self::Any
    }
}

impl<K: PartialEq> DragFilter<K> {
    fn accepts(&self, target: &K) -> bool {
        match self {
            Self::Any => true,
            Self::BoundOnly(bound) => target == bound,
            Self::Matching(predicate) => predicate(target),
        }
    }
}

/// Configuration for one [`DragEngine`] instance.
#[derive(Clone, Copy, Debug)]
pub struct DragConfig<K> {
    /// Offset the engine starts from before any gesture.
    pub initial_offset: Vec2,
    /// Anchor correction: when set, a gesture that supplies a grab origin
    /// starts from `grab_origin - anchor` instead of the committed offset.
    pub anchor: Option<Vec2>,
    /// Snap granularity for the emitted `grid_offset`; `None` leaves the
    /// grid offset equal to the raw offset.
    pub grid: Option<GridStep>,
    /// Which targets may initiate a drag.
    pub filter: DragFilter<K>,
}

impl<K> Default for DragConfig<K> {
    fn default() -> Self {
        Self {
            initial_offset: Vec2::ZERO,
            anchor: None,
            grid: None,
            filter: DragFilter::Any,
        }
    }
}

/// Emitted when a qualifying press starts a gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragStart<K> {
    /// The element the gesture grabbed.
    pub target: K,
    /// Pointer position at the press.
    pub xy: Point,
    /// Same as `xy`; recorded as the gesture's reference point.
    pub initial: Point,
    /// Offset committed by the previous gesture.
    pub offset: Vec2,
    /// Offset the new gesture will accumulate from.
    pub initial_offset: Vec2,
}

/// Emitted on every qualifying move during a gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragUpdate<K> {
    /// The element being dragged.
    pub target: K,
    /// Current pointer position.
    pub xy: Point,
    /// Displacement since the gesture started.
    pub movement: Vec2,
    /// Pointer position when the gesture started.
    pub initial: Point,
    /// `initial_offset + movement`.
    pub offset: Vec2,
    /// `offset` snapped to the configured grid.
    pub grid_offset: Vec2,
    /// Offset when the gesture started.
    pub initial_offset: Vec2,
    /// True while a second pointer is present; positional application is
    /// usually suppressed by the caller for the duration.
    pub pinching: bool,
}

/// Emitted when the gesture's pointer is released.
#[derive(Clone, Debug, PartialEq)]
pub struct DragEnd<K> {
    /// Hit target under the pointer at release (not necessarily the dragged
    /// element; the orchestrator's click handling relies on this).
    pub target: K,
    /// Pointer position at release.
    pub xy: Point,
    /// Total displacement of the gesture.
    pub movement: Vec2,
    /// Pointer position when the gesture started.
    pub initial: Point,
    /// Final offset.
    pub offset: Vec2,
    /// Final offset snapped to the configured grid.
    pub grid_offset: Vec2,
    /// Offset when the gesture started.
    pub initial_offset: Vec2,
}

/// Computes offset and movement vectors for one logical drag gesture.
///
/// Feed it the snapshots a [`tackboard_pointer::PointerTracker`] produces.
/// At most one target is held at a time; see [`DragFilter`] for scoping.
#[derive(Clone, Debug)]
pub struct DragEngine<K> {
    config: DragConfig<K>,
    pointer_initial: Point,
    offset: Vec2,
    initial_offset: Vec2,
    target: Option<K>,
}

impl<K: Clone + PartialEq> DragEngine<K> {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: DragConfig<K>) -> Self {
        let offset = config.initial_offset;
        Self {
            config,
            pointer_initial: Point::ZERO,
            offset,
            initial_offset: offset,
            target: None,
        }
    }

    /// The offset committed by the most recent gesture.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Replaces the committed offset.
    ///
    /// Callers do this when something other than a drag moved the dragged
    /// content, e.g. an anchored zoom rewriting the board's pan offset.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// The element currently being dragged, if any.
    #[must_use]
    pub fn target(&self) -> Option<&K> {
        self.target.as_ref()
    }

    /// Re-baselines an active gesture at the given pointer position and
    /// offset.
    ///
    /// An overlapping gesture can rewrite the dragged content underneath a
    /// held drag (an anchored pinch zoom rewriting the board's pan offset).
    /// Rebasing makes subsequent moves accumulate from the rewritten state
    /// instead of jumping. No-op while idle.
    pub fn rebase(&mut self, position: Point, offset: Vec2) {
        if self.target.is_none() {
            return;
        }
        self.pointer_initial = position;
        self.initial_offset = offset;
        self.offset = offset;
    }

    /// True while a gesture holds a target.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.target.is_some()
    }

    /// Handles a press snapshot, starting a gesture when it qualifies.
    ///
    /// `grab_origin` is the screen-space origin of the grabbed element; it is
    /// only consulted when an anchor is configured, and lets the gesture
    /// continue from the element's current position rather than the engine's
    /// committed offset. Returns `None` when the target is rejected by the
    /// filter or a gesture is already in progress.
    pub fn pointer_down(
        &mut self,
        update: &PointerUpdate<K>,
        grab_origin: Option<Point>,
    ) -> Option<DragStart<K>> {
        if self.target.is_some() {
            return None;
        }
        if !self.config.filter.accepts(&update.event.target) {
            return None;
        }

        self.target = Some(update.event.target.clone());
        self.pointer_initial = update.event.position;
        self.initial_offset = match (self.config.anchor, grab_origin) {
            (Some(anchor), Some(origin)) => origin.to_vec2() - anchor,
            _ => self.offset,
        };

        Some(DragStart {
            target: update.event.target.clone(),
            xy: update.event.position,
            initial: self.pointer_initial,
            offset: self.offset,
            initial_offset: self.initial_offset,
        })
    }

    /// Handles a move snapshot, emitting the gesture's current offsets.
    ///
    /// Only the primary pointer advances the gesture; secondary touches are
    /// the pinch engine's concern and are a no-op here.
    pub fn pointer_move(&mut self, update: &PointerUpdate<K>) -> Option<DragUpdate<K>> {
        if !update.pointer_down || !update.event.is_primary {
            return None;
        }
        let target = self.target.clone()?;

        let (movement, offset, grid_offset) = self.offsets_at(update.event.position);
        self.offset = offset;

        Some(DragUpdate {
            target,
            xy: update.event.position,
            movement,
            initial: self.pointer_initial,
            offset,
            grid_offset,
            initial_offset: self.initial_offset,
            pinching: update.pinching,
        })
    }

    /// Handles a release snapshot, ending the gesture.
    ///
    /// Any release of a tracked pointer ends the gesture, matching the
    /// single-target model: there is no per-pointer bookkeeping to unwind.
    pub fn pointer_up(&mut self, update: &PointerUpdate<K>) -> Option<DragEnd<K>> {
        self.target.take()?;

        let (movement, offset, grid_offset) = self.offsets_at(update.event.position);
        self.offset = offset;

        Some(DragEnd {
            target: update.event.target.clone(),
            xy: update.event.position,
            movement,
            initial: self.pointer_initial,
            offset,
            grid_offset,
            initial_offset: self.initial_offset,
        })
    }

    fn offsets_at(&self, position: Point) -> (Vec2, Vec2, Vec2) {
        let movement = position - self.pointer_initial;
        let offset = self.initial_offset + movement;
        let grid_offset = match self.config.grid {
            Some(grid) => grid.snap_vec(offset),
            None => offset,
        };
        (movement, offset, grid_offset)
    }
}
