// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle derivation.
//!
//! A toast's phase is never stored; it is recomputed from its timestamps for
//! whatever instant the caller passes in. That keeps every transition
//! simulable in tests and means removal cancels all pending deadlines by
//! construction: once the entry is gone there is nothing left to fire.
//!
//! Phases: `PendingEnter` (entrance transition window) -> `Visible` (dwell)
//! -> `Leaving` (exit transition) -> removed (absent from the store).

use crate::config::defaults::{ENTER_DELAY_MS, EXIT_DELAY_MS};
use std::time::{Duration, Instant};

/// Display phase of a toast still present in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Just created; the entrance transition has not completed yet.
    PendingEnter,
    /// Fully shown, dwell timer (if any) running.
    Visible,
    /// Exit transition running; the store removes the entry once it ends.
    Leaving,
}

/// Timing state for one stored toast.
///
/// `shown_at` is fixed at `show` time; `dismissed_at` is the only mutable
/// field and is set at most once, by an explicit dismissal.
#[derive(Debug, Clone)]
pub struct Timeline {
    shown_at: Instant,
    dwell: Duration,
    dismissed_at: Option<Instant>,
}

impl Timeline {
    /// Starts a timeline for a toast shown at `shown_at` with the given
    /// dwell time (`Duration::ZERO` disables auto-dismissal).
    pub fn new(shown_at: Instant, dwell: Duration) -> Self {
        Self {
            shown_at,
            dwell,
            dismissed_at: None,
        }
    }

    /// Instant the entrance transition completes.
    fn enter_deadline(&self) -> Instant {
        self.shown_at + Duration::from_millis(ENTER_DELAY_MS)
    }

    /// Instant the dwell expires, if auto-dismissal is enabled.
    ///
    /// The dwell counts from the end of the entrance transition.
    fn auto_leave_deadline(&self) -> Option<Instant> {
        if self.dwell.is_zero() {
            None
        } else {
            Some(self.enter_deadline() + self.dwell)
        }
    }

    /// Instant the exit transition began, if it has by `now`.
    ///
    /// Whichever of explicit dismissal and dwell expiry comes first wins.
    pub fn leave_started(&self, now: Instant) -> Option<Instant> {
        let mut start = self.dismissed_at;
        if let Some(deadline) = self.auto_leave_deadline() {
            if deadline <= now {
                start = Some(match start {
                    Some(dismissed) => dismissed.min(deadline),
                    None => deadline,
                });
            }
        }
        start.filter(|s| *s <= now)
    }

    /// Records an explicit dismissal at `now`.
    ///
    /// Returns `false` without changing anything if the exit transition has
    /// already begun; repeating a dismissal is a no-op.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if self.leave_started(now).is_some() {
            return false;
        }
        self.dismissed_at = Some(now);
        true
    }

    /// Derives the phase at `now`.
    pub fn phase(&self, now: Instant) -> Phase {
        if self.leave_started(now).is_some() {
            Phase::Leaving
        } else if now >= self.enter_deadline() {
            Phase::Visible
        } else {
            Phase::PendingEnter
        }
    }

    /// Returns whether the exit transition has fully elapsed at `now`,
    /// i.e. the entry is due for removal from the store.
    pub fn expired(&self, now: Instant) -> bool {
        match self.leave_started(now) {
            Some(start) => now >= start + Duration::from_millis(EXIT_DELAY_MS),
            None => false,
        }
    }
}
