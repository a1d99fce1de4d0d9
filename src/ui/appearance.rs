// SPDX-License-Identifier: MPL-2.0
//! Pure mappings from toast attributes to presentation.
//!
//! [`Kind::appearance`] and [`Position::anchor`] are total over their closed
//! enumerations; there is no fallback arm. Everything here is data — no
//! widget construction, no state.

use crate::notification::{Kind, Position};
use crate::ui::design_tokens::palette;
use iced::{alignment, Color};

/// Icon shown next to the toast title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    CheckCircle,
    AlertCircle,
    AlertTriangle,
    InfoCircle,
}

impl Icon {
    /// Text glyph rendering of the icon.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::CheckCircle => "\u{2713}",   // ✓
            Icon::AlertCircle => "\u{2717}",   // ✗
            Icon::AlertTriangle => "\u{26A0}", // ⚠
            Icon::InfoCircle => "\u{2139}",    // ℹ
        }
    }
}

/// Full styling tuple for one toast kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub icon: Icon,
    /// Border and icon color.
    pub accent: Color,
    /// Card background tint.
    pub background: Color,
    pub title: Color,
    pub description: Color,
    pub dismiss: Color,
}

impl Kind {
    /// Returns the styling for this kind.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        match self {
            Kind::Success => Appearance {
                icon: Icon::CheckCircle,
                accent: palette::SUCCESS_500,
                background: palette::SUCCESS_100,
                title: palette::SUCCESS_800,
                description: palette::SUCCESS_700,
                dismiss: palette::SUCCESS_400,
            },
            Kind::Error => Appearance {
                icon: Icon::AlertCircle,
                accent: palette::ERROR_500,
                background: palette::ERROR_100,
                title: palette::ERROR_800,
                description: palette::ERROR_700,
                dismiss: palette::ERROR_400,
            },
            Kind::Warning => Appearance {
                icon: Icon::AlertTriangle,
                accent: palette::WARNING_500,
                background: palette::WARNING_100,
                title: palette::WARNING_800,
                description: palette::WARNING_700,
                dismiss: palette::WARNING_400,
            },
            Kind::Info => Appearance {
                icon: Icon::InfoCircle,
                accent: palette::INFO_500,
                background: palette::INFO_100,
                title: palette::INFO_800,
                description: palette::INFO_700,
                dismiss: palette::INFO_400,
            },
        }
    }
}

/// Screen-corner layout anchor for a toast group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub horizontal: alignment::Horizontal,
    pub vertical: alignment::Vertical,
}

impl Position {
    /// Returns the corner alignment for this position.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        match self {
            Position::TopRight => Anchor {
                horizontal: alignment::Horizontal::Right,
                vertical: alignment::Vertical::Top,
            },
            Position::TopLeft => Anchor {
                horizontal: alignment::Horizontal::Left,
                vertical: alignment::Vertical::Top,
            },
            Position::BottomRight => Anchor {
                horizontal: alignment::Horizontal::Right,
                vertical: alignment::Vertical::Bottom,
            },
            Position::BottomLeft => Anchor {
                horizontal: alignment::Horizontal::Left,
                vertical: alignment::Vertical::Bottom,
            },
        }
    }
}
