// SPDX-License-Identifier: MPL-2.0
//! Pure resolution of optional styling against the theme.

use super::config::Background;
use crate::ui::design_tokens::elevation;
use crate::ui::theming::ColorScheme;
use iced::Color;

/// Returns the explicit color when set, otherwise the theme fallback.
///
/// Explicit colors are used verbatim, fully transparent ones included.
#[must_use]
pub fn resolve_color(explicit: Option<Color>, fallback: Color) -> Color {
    explicit.unwrap_or(fallback)
}

/// Fill and elevation of the alert card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub color: Color,
    pub tonal_elevation: f32,
    pub shadow_elevation: f32,
}

/// Resolves the card surface for a background choice.
#[must_use]
pub fn resolve_background(
    background: Background,
    tonal_elevation: f32,
    colors: &ColorScheme,
) -> Surface {
    match background {
        Background::Transparent => Surface {
            color: Color::TRANSPARENT,
            tonal_elevation: 0.0,
            shadow_elevation: 0.0,
        },
        Background::Theme => Surface {
            color: tint(
                colors.surface_container_high,
                colors.primary,
                elevation::tonal_overlay_alpha(tonal_elevation),
            ),
            tonal_elevation,
            shadow_elevation: elevation::SHADOW_ALERT,
        },
        Background::Solid(color) => Surface {
            color,
            tonal_elevation,
            shadow_elevation: elevation::SHADOW_ALERT,
        },
    }
}

/// Blends `overlay` over `base` at `alpha`, keeping the base opacity.
fn tint(base: Color, overlay: Color, alpha: f32) -> Color {
    let mix = |b: f32, o: f32| b + (o - b) * alpha;
    Color {
        r: mix(base.r, overlay.r),
        g: mix(base.g, overlay.g),
        b: mix(base.b, overlay.b),
        a: base.a,
    }
}

/// Multiplies a color's opacity, used to fade the whole card in and out.
#[must_use]
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_colors_are_used_verbatim() {
        let fallback = Color::from_rgb(0.5, 0.5, 0.5);
        for explicit in [
            Color::WHITE,
            Color::BLACK,
            Color::TRANSPARENT,
            Color::from_rgba(1.0, 1.0, 1.0, 0.9),
        ] {
            assert_eq!(resolve_color(Some(explicit), fallback), explicit);
        }
    }

    #[test]
    fn unset_color_uses_fallback() {
        let fallback = ColorScheme::dark().on_surface;
        assert_eq!(resolve_color(None, fallback), fallback);
    }

    #[test]
    fn transparent_background_drops_elevation_and_shadow() {
        let colors = ColorScheme::light();
        for tonal in [0.0, 6.0, 24.0] {
            let surface = resolve_background(Background::Transparent, tonal, &colors);
            assert_eq!(surface.color, Color::TRANSPARENT);
            assert_eq!(surface.tonal_elevation, 0.0);
            assert_eq!(surface.shadow_elevation, 0.0);
        }
    }

    #[test]
    fn solid_background_keeps_color_and_elevation() {
        let colors = ColorScheme::light();
        let red = Color::from_rgb8(0xE5, 0x39, 0x35);
        let surface = resolve_background(Background::Solid(red), 6.0, &colors);
        assert_eq!(surface.color, red);
        assert_eq!(surface.tonal_elevation, 6.0);
        assert_eq!(surface.shadow_elevation, elevation::SHADOW_ALERT);
    }

    #[test]
    fn theme_background_uses_surface_container_high() {
        let colors = ColorScheme::dark();
        let flat = resolve_background(Background::Theme, 0.0, &colors);
        assert_eq!(flat.color, colors.surface_container_high);
        assert_eq!(flat.shadow_elevation, elevation::SHADOW_ALERT);

        let raised = resolve_background(Background::Theme, 6.0, &colors);
        assert_ne!(raised.color, colors.surface_container_high);
        assert_eq!(raised.color.a, colors.surface_container_high.a);
    }

    #[test]
    fn fade_scales_alpha_only() {
        let color = Color::from_rgba(0.2, 0.4, 0.6, 0.8);
        let faded = fade(color, 0.5);
        assert_eq!(faded.r, color.r);
        assert!((faded.a - 0.4).abs() < f32::EPSILON);
        assert_eq!(fade(color, 1.0), color);
    }
}
