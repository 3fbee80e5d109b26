// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;
use smallvec::SmallVec;

/// Identifier assigned by the host platform to one physical pointer.
///
/// Ids are stable for the lifetime of a press (down through up). The tracker
/// imposes no structure on them beyond equality.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PointerId(pub u64);

/// Device class of a pointer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerType {
    /// A mouse (or mouse-like) device.
    Mouse,
    /// A touch contact.
    Touch,
    /// A stylus.
    Pen,
}

bitflags::bitflags! {
    /// Allow-list of pointer types a tracker accepts.
    ///
    /// Events whose type is not in the set are ignored entirely, which is how
    /// a pinch engine runs touch-only while a drag engine next to it also
    /// accepts the mouse.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PointerTypes: u8 {
        /// Accept mouse pointers.
        const MOUSE = 0b0000_0001;
        /// Accept touch contacts.
        const TOUCH = 0b0000_0010;
        /// Accept stylus pointers.
        const PEN   = 0b0000_0100;
    }
}

impl Default for PointerTypes {
    fn default() -> Self {
        Self::MOUSE | Self::TOUCH
    }
}

impl PointerTypes {
    /// Returns true if the allow-list accepts the given pointer type.
    #[must_use]
    pub fn accepts(self, pointer_type: PointerType) -> bool {
        match pointer_type {
            PointerType::Mouse => self.contains(Self::MOUSE),
            PointerType::Touch => self.contains(Self::TOUCH),
            PointerType::Pen => self.contains(Self::PEN),
        }
    }
}

/// One routed pointer event, fed to [`PointerTracker`] by the caller.
///
/// `K` is the application's hit-target key: whatever the caller's hit testing
/// resolved under the pointer (a node id, a background marker, ...). The
/// tracker carries it through untouched so gesture engines can filter on it.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent<K> {
    /// Platform pointer id.
    pub id: PointerId,
    /// Device class.
    pub pointer_type: PointerType,
    /// Screen-space position.
    pub position: Point,
    /// Hit-target key under the pointer.
    pub target: K,
    /// Whether the platform considers this the primary pointer of its type.
    pub is_primary: bool,
}

/// A cached entry for one currently pressed pointer.
///
/// Created on down, updated in place on move, removed on up. No two cached
/// samples share an id.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerSample<K> {
    /// Platform pointer id.
    pub id: PointerId,
    /// Device class.
    pub pointer_type: PointerType,
    /// Latest known screen-space position.
    pub position: Point,
    /// Hit-target key recorded with the latest event.
    pub target: K,
}

/// Which transition a [`PointerUpdate`] describes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerPhase {
    /// A pointer was added to the cache.
    Down,
    /// A cached pointer moved.
    Move,
    /// A pointer was removed from the cache.
    Up,
}

/// Snapshot emitted on every qualifying pointer transition.
///
/// `pointer_down` and `pinching` reflect the cache *after* the transition was
/// applied, so the up that empties the cache reports `pointer_down == false`
/// with an empty touch list.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerUpdate<K> {
    /// The transition kind.
    pub phase: PointerPhase,
    /// The event that caused the transition.
    pub event: PointerEvent<K>,
    /// Positions of all cached pointers, in the order they went down.
    pub touches: Vec<Point>,
    /// True while at least one pointer is cached.
    pub pointer_down: bool,
    /// True while at least two pointers are cached.
    pub pinching: bool,
}

/// Maintains the ordered set of active pointers on a board surface.
#[derive(Clone, Debug)]
pub struct PointerTracker<K> {
    cache: SmallVec<[PointerSample<K>; 4]>,
    types: PointerTypes,
}

impl<K> Default for PointerTracker<K> {
    fn default() -> Self {
        Self {
            cache: SmallVec::new(),
            types: PointerTypes::default(),
        }
    }
}

impl<K: Clone + PartialEq> PointerTracker<K> {
    /// Creates a tracker accepting mouse and touch pointers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_types(PointerTypes::default())
    }

    /// Creates a tracker accepting only the given pointer types.
    #[must_use]
    pub fn with_types(types: PointerTypes) -> Self {
        Self {
            cache: SmallVec::new(),
            types,
        }
    }

    /// Handles a pointer press.
    ///
    /// Returns `None` when the pointer type is not accepted or the id is
    /// already cached (the same down observed through a second listener
    /// registration must not track the pointer twice).
    pub fn pointer_down(&mut self, event: &PointerEvent<K>) -> Option<PointerUpdate<K>> {
        if !self.types.accepts(event.pointer_type) {
            return None;
        }
        if self.cache.iter().any(|sample| sample.id == event.id) {
            return None;
        }
        self.cache.push(PointerSample {
            id: event.id,
            pointer_type: event.pointer_type,
            position: event.position,
            target: event.target.clone(),
        });
        Some(self.snapshot(PointerPhase::Down, event))
    }

    /// Handles a pointer move, updating the cached sample in place.
    ///
    /// Returns `None` when the pointer type is not accepted or the id is not
    /// part of this tracker.
    pub fn pointer_move(&mut self, event: &PointerEvent<K>) -> Option<PointerUpdate<K>> {
        if !self.types.accepts(event.pointer_type) {
            return None;
        }
        let sample = self.cache.iter_mut().find(|sample| sample.id == event.id)?;
        sample.position = event.position;
        sample.target = event.target.clone();
        Some(self.snapshot(PointerPhase::Move, event))
    }

    /// Handles a pointer release, removing the cached sample.
    ///
    /// Returns `None` when the pointer type is not accepted or the id is not
    /// part of this tracker.
    pub fn pointer_up(&mut self, event: &PointerEvent<K>) -> Option<PointerUpdate<K>> {
        if !self.types.accepts(event.pointer_type) {
            return None;
        }
        let index = self
            .cache
            .iter()
            .position(|sample| sample.id == event.id)?;
        self.cache.remove(index);
        Some(self.snapshot(PointerPhase::Up, event))
    }

    /// Positions of all cached pointers, in the order they went down.
    #[must_use]
    pub fn touches(&self) -> Vec<Point> {
        self.cache.iter().map(|sample| sample.position).collect()
    }

    /// The cached samples, in the order they went down.
    #[must_use]
    pub fn samples(&self) -> &[PointerSample<K>] {
        &self.cache
    }

    /// True while at least one pointer is cached.
    #[must_use]
    pub fn is_pointer_down(&self) -> bool {
        !self.cache.is_empty()
    }

    /// True while at least two pointers are cached.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.cache.len() >= 2
    }

    /// Drops all cached pointers. Safe to call on an empty tracker.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    fn snapshot(&self, phase: PointerPhase, event: &PointerEvent<K>) -> PointerUpdate<K> {
        PointerUpdate {
            phase,
            event: event.clone(),
            touches: self.touches(),
            pointer_down: self.is_pointer_down(),
            pinching: self.is_pinching(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: u64, x: f64, y: f64) -> PointerEvent<u32> {
        PointerEvent {
            id: PointerId(id),
            pointer_type: PointerType::Touch,
            position: Point::new(x, y),
            target: 0,
            is_primary: id == 1,
        }
    }

    #[test]
    fn duplicate_down_is_ignored() {
        let mut tracker = PointerTracker::new();
        assert!(tracker.pointer_down(&touch(1, 0.0, 0.0)).is_some());
        assert!(tracker.pointer_down(&touch(1, 5.0, 5.0)).is_none());
        assert_eq!(tracker.samples().len(), 1);
        // The ignored duplicate must not clobber the cached position.
        assert_eq!(tracker.samples()[0].position, Point::new(0.0, 0.0));
    }

    #[test]
    fn move_and_up_for_untracked_pointer_are_ignored() {
        let mut tracker = PointerTracker::<u32>::new();
        assert!(tracker.pointer_move(&touch(9, 1.0, 1.0)).is_none());
        assert!(tracker.pointer_up(&touch(9, 1.0, 1.0)).is_none());
        assert!(!tracker.is_pointer_down());
    }

    #[test]
    fn type_allow_list_filters_events() {
        let mut tracker = PointerTracker::with_types(PointerTypes::TOUCH);
        let mouse = PointerEvent {
            pointer_type: PointerType::Mouse,
            ..touch(1, 0.0, 0.0)
        };
        assert!(tracker.pointer_down(&mouse).is_none());
        assert!(tracker.pointer_down(&touch(2, 0.0, 0.0)).is_some());
    }

    #[test]
    fn cache_is_empty_after_matched_downs_and_ups() {
        let mut tracker = PointerTracker::new();
        for id in 1..=4 {
            tracker.pointer_down(&touch(id, 0.0, 0.0));
        }
        assert!(tracker.is_pointer_down());
        // Release in an arbitrary order.
        for id in [3, 1, 4, 2] {
            assert!(tracker.pointer_up(&touch(id, 0.0, 0.0)).is_some());
        }
        assert!(!tracker.is_pointer_down());
        assert!(tracker.touches().is_empty());
    }

    #[test]
    fn pinching_tracks_the_two_pointer_threshold() {
        let mut tracker = PointerTracker::new();
        assert!(!tracker.pointer_down(&touch(1, 0.0, 0.0)).unwrap().pinching);
        assert!(tracker.pointer_down(&touch(2, 10.0, 0.0)).unwrap().pinching);
        assert!(tracker.pointer_down(&touch(3, 20.0, 0.0)).unwrap().pinching);

        // 3 -> 2 stays pinching; 2 -> 1 drops it.
        assert!(tracker.pointer_up(&touch(3, 20.0, 0.0)).unwrap().pinching);
        let update = tracker.pointer_up(&touch(2, 10.0, 0.0)).unwrap();
        assert!(!update.pinching);
        assert!(update.pointer_down);
    }

    #[test]
    fn move_updates_sample_in_place_and_keeps_order() {
        let mut tracker = PointerTracker::new();
        tracker.pointer_down(&touch(1, 0.0, 0.0));
        tracker.pointer_down(&touch(2, 10.0, 10.0));

        let update = tracker.pointer_move(&touch(1, 3.0, 4.0)).unwrap();
        assert_eq!(update.phase, PointerPhase::Move);
        assert_eq!(
            update.touches,
            alloc::vec![Point::new(3.0, 4.0), Point::new(10.0, 10.0)]
        );
        assert_eq!(tracker.samples()[0].id, PointerId(1));
    }

    #[test]
    fn final_up_reports_empty_snapshot() {
        let mut tracker = PointerTracker::new();
        tracker.pointer_down(&touch(1, 0.0, 0.0));
        let update = tracker.pointer_up(&touch(1, 2.0, 2.0)).unwrap();
        assert!(!update.pointer_down);
        assert!(update.touches.is_empty());
    }

    #[test]
    fn clear_detaches_everything() {
        let mut tracker = PointerTracker::new();
        tracker.pointer_down(&touch(1, 0.0, 0.0));
        tracker.pointer_down(&touch(2, 1.0, 1.0));
        tracker.clear();
        assert!(!tracker.is_pointer_down());
        tracker.clear();
        assert!(!tracker.is_pinching());
    }
}
