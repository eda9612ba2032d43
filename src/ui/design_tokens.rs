// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every constant the alert and the demo gallery draw with lives here.

## Organization

- **Palette**: Base colors, including the demo's brand swatches
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Corner radii
- **Elevation**: Shadow and tonal elevation levels

## Examples

```
use top_alerter::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let subtle_white = Color {
    a: opacity::TEXT_SOFT,
    ..palette::WHITE
};

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
    pub const GRAY_950: Color = Color::from_rgb(0.07, 0.07, 0.08);
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.11, 0.12);
    pub const GRAY_850: Color = Color::from_rgb(0.16, 0.16, 0.17);
    pub const GRAY_800: Color = Color::from_rgb(0.21, 0.21, 0.23);
    pub const GRAY_600: Color = Color::from_rgb(0.28, 0.28, 0.31);
    pub const GRAY_400: Color = Color::from_rgb(0.79, 0.77, 0.82);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.91, 0.95);
    pub const GRAY_50: Color = Color::from_rgb(0.97, 0.95, 0.98);

    // Brand colors (violet scale)
    pub const PRIMARY_300: Color = Color::from_rgb(0.82, 0.74, 1.0);
    pub const PRIMARY_600: Color = Color::from_rgb(0.40, 0.31, 0.64);
    pub const PRIMARY_CONTAINER_LIGHT: Color = Color::from_rgb(0.92, 0.87, 1.0);
    pub const PRIMARY_CONTAINER_DARK: Color = Color::from_rgb(0.31, 0.22, 0.55);

    // Semantic colors
    pub const ERROR_LIGHT: Color = Color::from_rgb(0.70, 0.15, 0.12);
    pub const ERROR_DARK: Color = Color::from_rgb(0.95, 0.72, 0.71);

    // Material swatches used by the demo gallery
    pub const RED_600: Color = Color::from_rgb8(0xE5, 0x39, 0x35);
    pub const ORANGE_500: Color = Color::from_rgb8(0xFF, 0x98, 0x00);
    pub const DEEP_ORANGE_900: Color = Color::from_rgb8(0xE6, 0x51, 0x00);
    pub const ORANGE_50: Color = Color::from_rgb8(0xFF, 0xF3, 0xE0);
    pub const BLUE_500: Color = Color::from_rgb8(0x21, 0x96, 0xF3);
    pub const GREEN_500: Color = Color::from_rgb8(0x4C, 0xAF, 0x50);
    pub const PURPLE_500: Color = Color::from_rgb8(0x9C, 0x27, 0xB0);
    pub const PINK_500: Color = Color::from_rgb8(0xE9, 0x1E, 0x63);
    pub const INDIGO_500: Color = Color::from_rgb8(0x3F, 0x51, 0xB5);
    pub const YELLOW: Color = Color::from_rgb8(0xFF, 0xFF, 0x00);
    pub const GRAY_DDD: Color = Color::from_rgb8(0xDD, 0xDD, 0xDD);
    pub const GRADIENT_START: Color = Color::from_rgb8(0x66, 0x7E, 0xEA);
    pub const GRADIENT_END: Color = Color::from_rgb8(0x76, 0x4B, 0xA2);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.12;
    /// Secondary text drawn over saturated backgrounds.
    pub const TEXT_SOFT: f32 = 0.9;
    pub const TEXT_STRONG: f32 = 0.95;
    pub const SCRIM: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const SM: f32 = 12.0; // 3 units
    pub const MD: f32 = 16.0; // 4 units
    pub const LG: f32 = 24.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;

    /// Stroke width of the circular progress indicator.
    pub const PROGRESS_STROKE: f32 = 2.5;

    /// Square touch target of the close glyph.
    pub const CLOSE_TARGET: f32 = 40.0;

    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const APP_BAR_HEIGHT: f32 = 64.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes following the Material Design 3 type scale.

    pub const HEADLINE_SM: f32 = 24.0;
    /// Emphasized titles in the "custom typography" demo.
    pub const TITLE_XL: f32 = 22.0;
    pub const TITLE_MD: f32 = 16.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const LABEL_LG: f32 = 14.0;

    /// Multiplier from font size to line height.
    pub const LINE_HEIGHT: f32 = 1.4;

    /// Average advance of a glyph, in ems, used to estimate wrapping.
    pub const AVG_GLYPH_WIDTH_EM: f32 = 0.55;
}

// ============================================================================
// Corner Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    /// Bottom corners of a top alert.
    pub const ALERT: f32 = 16.0;
    pub const XL: f32 = 32.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Elevation
// ============================================================================

pub mod elevation {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    /// Default tonal elevation of a top alert.
    pub const TONAL_DEFAULT: f32 = 6.0;

    /// Shadow elevation of an opaque alert surface.
    pub const SHADOW_ALERT: f32 = 8.0;

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Converts an elevation level into a drop shadow.
    #[must_use]
    pub fn shadow(level: f32) -> Shadow {
        if level <= 0.0 {
            return NONE;
        }
        Shadow {
            color: Color {
                a: 0.28,
                ..palette::BLACK
            },
            offset: Vector::new(0.0, level / 2.0),
            blur_radius: level,
        }
    }

    /// Opacity of the primary-colored overlay for a tonal elevation level.
    ///
    /// Follows the Material 3 surface tint curve.
    #[must_use]
    pub fn tonal_overlay_alpha(level: f32) -> f32 {
        if level <= 0.0 {
            return 0.0;
        }
        ((4.5 * (level + 1.0).ln()) + 2.0) / 100.0
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TEXT_SOFT > 0.0 && opacity::TEXT_SOFT < 1.0);

    assert!(sizing::CLOSE_TARGET > sizing::ICON_MD);
    assert!(typography::HEADLINE_SM > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(radius::ALERT > radius::SM);
};
