// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the design tokens the toast widgets draw from, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including a five-step mini scale per toast kind
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toast::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a faded accent color
let faded = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::SUCCESS_500
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Success scale (green)
    pub const SUCCESS_100: Color = Color::from_rgb(0.863, 0.988, 0.906);
    pub const SUCCESS_400: Color = Color::from_rgb(0.29, 0.87, 0.5);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const SUCCESS_700: Color = Color::from_rgb(0.082, 0.502, 0.239);
    pub const SUCCESS_800: Color = Color::from_rgb(0.086, 0.396, 0.204);

    // Error scale (red)
    pub const ERROR_100: Color = Color::from_rgb(0.996, 0.886, 0.886);
    pub const ERROR_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const ERROR_700: Color = Color::from_rgb(0.725, 0.11, 0.11);
    pub const ERROR_800: Color = Color::from_rgb(0.6, 0.106, 0.106);

    // Warning scale (orange)
    pub const WARNING_100: Color = Color::from_rgb(1.0, 0.929, 0.835);
    pub const WARNING_400: Color = Color::from_rgb(0.984, 0.573, 0.235);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const WARNING_700: Color = Color::from_rgb(0.761, 0.255, 0.047);
    pub const WARNING_800: Color = Color::from_rgb(0.604, 0.204, 0.071);

    // Info scale (blue)
    pub const INFO_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const INFO_400: Color = Color::from_rgb(0.376, 0.647, 0.98);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
    pub const INFO_700: Color = Color::from_rgb(0.114, 0.306, 0.847);
    pub const INFO_800: Color = Color::from_rgb(0.118, 0.251, 0.686);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - toast titles.
    pub const BODY: f32 = 14.0;

    /// Small body - toast descriptions.
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Medium border - toast accent borders.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::TOAST_WIDTH > 0.0);

    // Typography validation
    assert!(typography::BODY > typography::BODY_SM);

    // Color validation
    assert!(palette::SUCCESS_500.r >= 0.0 && palette::SUCCESS_500.r <= 1.0);
};
