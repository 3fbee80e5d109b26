// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::{Duration, Instant};

/// Delay applied to board saves, so a burst of edits writes once.
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(400);

/// A trailing-edge debounce timer, driven by the caller's clock.
///
/// Every [`poke`](Debouncer::poke) pushes the deadline out by the full
/// delay; [`fire`](Debouncer::fire) reports (once) when the deadline has
/// passed with no further pokes. The caller supplies `now` on each call, so
/// the timer neither spawns threads nor reads the wall clock itself and
/// tests can drive it with synthetic instants.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Creates a debouncer with the given trailing delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Records an event, pushing the deadline out to `now + delay`.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true once the deadline has passed, clearing it.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// True while a poke is waiting for its deadline.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Forgets any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SAVE_DEBOUNCE)
    }
}
