// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios: configuration wired into a manager, lifecycle under
//! simulated time, and the grouping/observer surfaces together.

use iced_toast::config::defaults::{DEFAULT_DURATION_MS, ENTER_DELAY_MS, EXIT_DELAY_MS};
use iced_toast::config::{self, Config};
use iced_toast::{Manager, Message, Phase, Position, Toast, ToastEvent};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn configured_default_position_flows_through_to_grouping() {
    // Persist a config choosing top-right, then reload it from disk.
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    let written = Config {
        default_position: Some(Position::TopRight),
    };
    config::save_to_path(&written, &config_path).expect("failed to write config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");

    let mut toasts = Manager::new(loaded);
    let t0 = Instant::now();
    let id = toasts.show_at(Toast::info("Welcome back"), t0).unwrap();

    let groups = toasts.group_by_position();
    assert_eq!(groups.len(), 1);
    assert!(groups[&Position::TopRight]
        .iter()
        .any(|entry| entry.toast().id() == id));
}

#[test]
fn success_toast_lives_out_its_default_dwell() {
    let mut toasts = Manager::default();
    let t0 = Instant::now();
    let id = toasts
        .show_at(Toast::success("Saved").duration(ms(5000)), t0)
        .unwrap();

    // Present under the default corner immediately after show.
    assert!(toasts.group_by_position()[&Position::BottomRight]
        .iter()
        .any(|entry| entry.toast().id() == id));

    // Still visible right before the dwell expires.
    let visible_at = t0 + ms(ENTER_DELAY_MS + 4999);
    assert_eq!(toasts.get(id).unwrap().phase(visible_at), Phase::Visible);

    // Gone once the dwell and the exit transition have both elapsed.
    toasts.tick(t0 + ms(ENTER_DELAY_MS + 5000 + EXIT_DELAY_MS));
    assert!(toasts.group_by_position().is_empty());
}

#[test]
fn three_toasts_group_into_two_corners_in_creation_order() {
    let mut toasts = Manager::default();
    let t0 = Instant::now();

    let first = toasts
        .show_at(Toast::info("first").position(Position::TopRight), t0)
        .unwrap();
    let second = toasts
        .show_at(Toast::info("second").position(Position::TopRight), t0)
        .unwrap();
    let third = toasts
        .show_at(Toast::info("third").position(Position::BottomLeft), t0)
        .unwrap();

    let groups = toasts.group_by_position();
    assert_eq!(groups.len(), 2);
    let top_right: Vec<_> = groups[&Position::TopRight]
        .iter()
        .map(|entry| entry.toast().id())
        .collect();
    assert_eq!(top_right, vec![first, second]);
    let bottom_left: Vec<_> = groups[&Position::BottomLeft]
        .iter()
        .map(|entry| entry.toast().id())
        .collect();
    assert_eq!(bottom_left, vec![third]);
}

#[test]
fn dismissal_races_cleanly_with_auto_expiry() {
    let mut toasts = Manager::default();
    let t0 = Instant::now();
    let id = toasts
        .show_at(Toast::warning("Low disk space").duration(ms(1000)), t0)
        .unwrap();
    let rx = toasts.subscribe();

    // Dwell expires, then a user dismissal lands late.
    let expired_at = t0 + ms(ENTER_DELAY_MS + 1000);
    toasts.handle_message(&Message::Dismiss(id));
    toasts.handle_message(&Message::Tick(expired_at + ms(EXIT_DELAY_MS)));
    // The toast is gone and a second dismissal is a silent no-op.
    toasts.handle_message(&Message::Dismiss(id));

    assert!(toasts.is_empty());
    let removals = rx
        .try_iter()
        .filter(|event| matches!(event, ToastEvent::Removed(_)))
        .count();
    assert_eq!(removals, 1);
}

#[test]
fn sticky_error_requires_explicit_dismissal() {
    let mut toasts = Manager::default();
    let t0 = Instant::now();
    let id = toasts
        .show_at(Toast::error("Upload failed").sticky(), t0)
        .unwrap();

    for hours in 1..=3 {
        toasts.tick(t0 + Duration::from_secs(hours * 3600));
        assert!(toasts.get(id).is_some(), "sticky toast must outlive ticks");
    }

    let dismissed_at = t0 + Duration::from_secs(4 * 3600);
    toasts.hide_at(id, dismissed_at);
    toasts.tick(dismissed_at + ms(EXIT_DELAY_MS));
    assert!(toasts.get(id).is_none());
}

#[test]
fn empty_title_is_rejected_without_side_effects() {
    let mut toasts = Manager::default();
    let rx = toasts.subscribe();

    assert!(toasts.show(Toast::success("")).is_err());
    assert!(toasts.is_empty());
    assert_eq!(rx.try_iter().count(), 0, "no event for a rejected show");
}

#[test]
fn default_duration_constant_matches_the_builder_default() {
    let toast = Toast::info("hello");
    assert_eq!(toast.dwell(), ms(DEFAULT_DURATION_MS));
}
