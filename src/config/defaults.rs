// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for lifecycle timing.
//!
//! This module is the single source of truth for the constants that drive
//! the toast state machine.
//!
//! # Categories
//!
//! - **Transitions**: entrance and exit transition windows
//! - **Dwell**: how long a toast stays visible by default
//! - **Tick**: polling cadence for the host's tick subscription

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Delay between creation and the `Visible` phase (in milliseconds).
///
/// Exists only so an entrance transition is observable; it carries no
/// business meaning.
pub const ENTER_DELAY_MS: u64 = 10;

/// Length of the exit transition before removal (in milliseconds).
pub const EXIT_DELAY_MS: u64 = 300;

// ==========================================================================
// Dwell Defaults
// ==========================================================================

/// Default dwell time before auto-dismissal (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 5000;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval between host ticks while toasts are active (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(ENTER_DELAY_MS > 0);
    assert!(EXIT_DELAY_MS > ENTER_DELAY_MS);
    assert!(DEFAULT_DURATION_MS > EXIT_DELAY_MS);

    // The tick must be fine enough to observe the exit transition.
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < EXIT_DELAY_MS);
};
