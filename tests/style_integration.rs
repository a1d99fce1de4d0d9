// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence across the
//! public widget surface.

use iced_toast::ui::design_tokens::{palette, sizing, spacing};
use iced_toast::ui::toast;
use iced_toast::{Kind, Manager, Position, Toast};
use std::time::Instant;

#[test]
fn design_tokens_are_accessible() {
    // Palette
    let _ = palette::SUCCESS_500;
    let _ = palette::ERROR_100;
    let _ = palette::WHITE;

    // Spacing
    let _ = spacing::MD;

    // Sizing
    let _ = sizing::TOAST_WIDTH;
}

#[test]
fn appearances_and_anchors_are_total() {
    for kind in [Kind::Success, Kind::Error, Kind::Warning, Kind::Info] {
        let appearance = kind.appearance();
        assert!(!appearance.icon.glyph().is_empty());
    }
    for position in [
        Position::TopRight,
        Position::TopLeft,
        Position::BottomRight,
        Position::BottomLeft,
    ] {
        let _ = position.anchor();
    }
}

#[test]
fn overlay_builds_for_empty_and_populated_managers() {
    let now = Instant::now();

    let empty = Manager::default();
    let _ = toast::view_overlay(&empty, now);

    let mut populated = Manager::default();
    populated
        .show_at(
            Toast::success("Saved").with_description("Changes written to disk"),
            now,
        )
        .unwrap();
    populated
        .show_at(Toast::error("Upload failed").position(Position::TopLeft), now)
        .unwrap();
    populated
        .show_at(Toast::info("Not closable").closable(false), now)
        .unwrap();
    let _ = toast::view_overlay(&populated, now);
}

#[test]
fn card_builds_for_every_kind() {
    let now = Instant::now();
    let mut toasts = Manager::default();
    for kind in [Kind::Success, Kind::Error, Kind::Warning, Kind::Info] {
        toasts.show_at(Toast::new(kind, "title"), now).unwrap();
    }
    for entry in toasts.iter() {
        let _ = toast::view(entry, now);
    }
}
