// SPDX-License-Identifier: MPL-2.0
//! Change notifications for store observers.
//!
//! Renderers and other collaborators subscribe to the manager and receive a
//! [`ToastEvent`] for every store mutation. Delivery is non-blocking over a
//! bounded channel: a full buffer drops the event rather than stalling the
//! UI thread, and subscribers whose receiver was dropped are pruned on the
//! next emit.

use crate::notification::ToastId;
use crossbeam_channel::{bounded, Receiver, Sender};

/// Buffered events per subscriber before sends start dropping.
const CHANNEL_CAPACITY: usize = 64;

/// A store mutation observable by subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEvent {
    /// A toast was added to the store.
    Shown(ToastId),
    /// A toast's exit transition began (explicit dismissal or dwell expiry).
    Dismissed(ToastId),
    /// A toast was removed from the store.
    Removed(ToastId),
}

impl ToastEvent {
    /// Returns the id of the toast the event concerns.
    #[must_use]
    pub fn id(&self) -> ToastId {
        match self {
            ToastEvent::Shown(id) | ToastEvent::Dismissed(id) | ToastEvent::Removed(id) => *id,
        }
    }
}

/// Fan-out of [`ToastEvent`]s to any number of subscribers.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<ToastEvent>>,
}

impl EventBus {
    /// Creates an event bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber and returns its receiving end.
    pub fn subscribe(&mut self) -> Receiver<ToastEvent> {
        let (tx, rx) = bounded(CHANNEL_CAPACITY);
        self.subscribers.push(tx);
        rx
    }

    /// Sends an event to every live subscriber.
    ///
    /// Non-blocking: full channels drop the event, disconnected channels are
    /// removed.
    pub fn emit(&mut self, event: ToastEvent) {
        self.subscribers
            .retain(|tx| !matches!(tx.try_send(event), Err(e) if e.is_disconnected()));
    }

    /// Returns the number of live subscribers as of the last emit.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_receives_emitted_events() {
        let mut bus = EventBus::new();
        let rx = bus.subscribe();
        let id = ToastId::new();

        bus.emit(ToastEvent::Shown(id));
        bus.emit(ToastEvent::Removed(id));

        assert_eq!(rx.try_recv(), Ok(ToastEvent::Shown(id)));
        assert_eq!(rx.try_recv(), Ok(ToastEvent::Removed(id)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn all_subscribers_see_every_event() {
        let mut bus = EventBus::new();
        let rx_a = bus.subscribe();
        let rx_b = bus.subscribe();
        let id = ToastId::new();

        bus.emit(ToastEvent::Dismissed(id));

        assert_eq!(rx_a.try_recv(), Ok(ToastEvent::Dismissed(id)));
        assert_eq!(rx_b.try_recv(), Ok(ToastEvent::Dismissed(id)));
    }

    #[test]
    fn dropped_subscribers_are_pruned_on_emit() {
        let mut bus = EventBus::new();
        let rx = bus.subscribe();
        drop(rx);

        bus.emit(ToastEvent::Shown(ToastId::new()));
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let mut bus = EventBus::new();
        let rx = bus.subscribe();
        let id = ToastId::new();

        for _ in 0..(CHANNEL_CAPACITY + 10) {
            bus.emit(ToastEvent::Shown(id));
        }

        // Subscriber is still registered and sees the buffered prefix.
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(rx.len(), CHANNEL_CAPACITY);
    }

    #[test]
    fn event_id_accessor_matches_payload() {
        let id = ToastId::new();
        assert_eq!(ToastEvent::Shown(id).id(), id);
        assert_eq!(ToastEvent::Dismissed(id).id(), id);
        assert_eq!(ToastEvent::Removed(id).id(), id);
    }
}
