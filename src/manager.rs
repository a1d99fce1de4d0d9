// SPDX-License-Identifier: MPL-2.0
//! Toast store and lifecycle management.
//!
//! The [`Manager`] owns the ordered set of active toasts, applies the
//! configured defaults at `show` time, derives each toast's phase on demand,
//! and removes entries once their exit transition has elapsed. All timing
//! flows through explicitly passed [`Instant`]s so behavior is fully
//! simulable; the `show`/`hide` convenience wrappers read the wall clock.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::events::{EventBus, ToastEvent};
use crate::lifecycle::{Phase, Timeline};
use crate::notification::{Position, Toast, ToastId};
use crossbeam_channel::Receiver;
use std::collections::BTreeMap;
use std::time::Instant;

/// Messages for toast state changes, in the usual "messages up" style.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Periodic tick carrying the current instant.
    Tick(Instant),
}

/// A toast held by the store, with its resolved corner and timing state.
#[derive(Debug, Clone)]
pub struct Entry {
    toast: Toast,
    position: Position,
    timeline: Timeline,
}

impl Entry {
    /// Returns the stored toast.
    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// Returns the corner the toast renders in (default already applied).
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Derives the display phase at `now`.
    #[must_use]
    pub fn phase(&self, now: Instant) -> Phase {
        self.timeline.phase(now)
    }
}

/// Manages the active toast set for one provider instance.
#[derive(Debug)]
pub struct Manager {
    /// Active toasts in insertion order.
    entries: Vec<Entry>,
    /// Corner applied when a toast does not request one.
    default_position: Position,
    events: EventBus,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Manager {
    /// Creates a manager with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            entries: Vec::new(),
            default_position: config.default_position(),
            events: EventBus::new(),
        }
    }

    /// Adds a toast to the store and returns its id.
    ///
    /// The configured default corner is applied if the toast did not request
    /// one; the resolved corner is fixed for the toast's lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTitle`] (with the store unchanged) if the title
    /// is empty. An empty title is a caller bug; rejecting it beats showing
    /// a blank card.
    pub fn show(&mut self, toast: Toast) -> Result<ToastId> {
        self.show_at(toast, Instant::now())
    }

    /// [`Manager::show`] against an explicit instant.
    pub fn show_at(&mut self, toast: Toast, now: Instant) -> Result<ToastId> {
        if toast.title().is_empty() {
            return Err(Error::EmptyTitle);
        }

        let id = toast.id();
        let position = toast.requested_position().unwrap_or(self.default_position);
        let timeline = Timeline::new(now, toast.dwell());
        self.entries.push(Entry {
            toast,
            position,
            timeline,
        });
        self.events.emit(ToastEvent::Shown(id));
        Ok(id)
    }

    /// Begins the exit transition for a toast.
    ///
    /// Unknown or already-removed ids are silently ignored, as is a toast
    /// that is already leaving — dismissal may race with auto-expiry and
    /// must be idempotent. The entry stays in the store until the exit
    /// delay elapses on a later [`Manager::tick`].
    pub fn hide(&mut self, id: ToastId) {
        self.hide_at(id, Instant::now());
    }

    /// [`Manager::hide`] against an explicit instant.
    pub fn hide_at(&mut self, id: ToastId, now: Instant) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.toast.id() == id) else {
            return;
        };
        if entry.timeline.dismiss(now) {
            self.events.emit(ToastEvent::Dismissed(id));
        }
    }

    /// Removes every toast whose exit transition has fully elapsed at `now`.
    ///
    /// Should be called periodically while toasts exist (see
    /// [`crate::ui::subscription::tick_subscription`]). Each removal emits
    /// [`ToastEvent::Removed`] exactly once; a tick that finds nothing to
    /// remove is a no-op.
    pub fn tick(&mut self, now: Instant) {
        let mut removed = Vec::new();
        self.entries.retain(|entry| {
            if entry.timeline.expired(now) {
                removed.push(entry.toast.id());
                false
            } else {
                true
            }
        });
        for id in removed {
            self.events.emit(ToastEvent::Removed(id));
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => self.hide(*id),
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Registers an observer of store mutations.
    ///
    /// Every insert, dismissal, and removal is observable on the returned
    /// channel before the next tick runs.
    pub fn subscribe(&mut self) -> Receiver<ToastEvent> {
        self.events.subscribe()
    }

    /// Groups the active toasts by corner, insertion order preserved.
    ///
    /// Pure read over the current store contents; corners with no toasts are
    /// absent from the map.
    #[must_use]
    pub fn group_by_position(&self) -> BTreeMap<Position, Vec<&Entry>> {
        let mut groups: BTreeMap<Position, Vec<&Entry>> = BTreeMap::new();
        for entry in &self.entries {
            groups.entry(entry.position).or_default().push(entry);
        }
        groups
    }

    /// Returns the active toasts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Returns the entry for `id`, if it is still in the store.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.toast.id() == id)
    }

    /// Returns the number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether any toasts are active (drives the tick subscription).
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Removes all toasts immediately, emitting a removal per entry.
    pub fn clear(&mut self) {
        let ids: Vec<ToastId> = self.entries.iter().map(|e| e.toast.id()).collect();
        self.entries.clear();
        for id in ids {
            self.events.emit(ToastEvent::Removed(id));
        }
    }

    /// Returns the corner applied to toasts that do not request one.
    #[must_use]
    pub fn default_position(&self) -> Position {
        self.default_position
    }
}
