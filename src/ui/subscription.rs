// SPDX-License-Identifier: MPL-2.0
//! Periodic tick subscription driving lifecycle progress.

use crate::config::defaults::TICK_INTERVAL_MS;
use crate::manager::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for auto-dismissal and removal.
///
/// Only polls while toasts are active; pass `manager.has_toasts()`. With no
/// active toasts there is nothing to expire, so the subscription shuts off
/// and no timers remain scheduled.
pub fn tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
