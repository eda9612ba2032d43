// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{elevation, opacity, radius};
use crate::ui::theming::ColorScheme;
use crate::ui::top_alert::ButtonColors;
use iced::border::Radius;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Action button of a top alert.
///
/// Flat buttons get a faint content-colored wash on hover; filled buttons
/// keep their container color and darken slightly when pressed. `alpha`
/// fades the whole button with the card.
pub fn alert_action(
    colors: ButtonColors,
    shape: Radius,
    alpha: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let content = with_alpha(colors.content, alpha);

        let background = match (colors.container, status) {
            (Some(fill), button::Status::Pressed) => Some(mix(fill, Color::BLACK, 0.12)),
            (Some(fill), _) => Some(fill),
            (None, button::Status::Hovered) => Some(Color {
                a: opacity::OVERLAY_SUBTLE / 2.0,
                ..colors.content
            }),
            (None, button::Status::Pressed) => Some(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.content
            }),
            (None, _) => None,
        };

        button::Style {
            background: background.map(|c| Background::Color(with_alpha(c, alpha))),
            text_color: content,
            border: Border {
                radius: shape,
                ..Default::default()
            },
            shadow: elevation::NONE,
            snap: true,
        }
    }
}

/// Borderless icon button for the close glyph; the glyph itself is an SVG
/// tinted separately.
pub fn alert_close(tint: Color, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let wash = match status {
            button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE / 2.0),
            button::Status::Pressed => Some(opacity::OVERLAY_SUBTLE),
            _ => None,
        };

        button::Style {
            background: wash.map(|a| Background::Color(with_alpha(Color { a, ..tint }, alpha))),
            text_color: with_alpha(tint, alpha),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: elevation::NONE,
            snap: true,
        }
    }
}

/// Filled tonal button used for the demo triggers.
pub fn tonal(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base = scheme.primary_container;
        let background = match status {
            button::Status::Hovered => mix(base, scheme.on_primary_container, 0.08),
            button::Status::Pressed => mix(base, scheme.on_primary_container, 0.12),
            button::Status::Disabled => Color {
                a: opacity::OVERLAY_SUBTLE,
                ..scheme.on_surface
            },
            button::Status::Active => base,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: scheme.on_primary_container,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: if matches!(status, button::Status::Hovered) {
                elevation::shadow(1.0)
            } else {
                elevation::NONE
            },
            snap: true,
        }
    }
}

/// Transparent icon button for the app bar.
pub fn app_bar_icon(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..scheme.on_surface
                }))
            }
            _ => None,
        },
        text_color: scheme.on_surface,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: elevation::NONE,
        snap: true,
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

fn mix(base: Color, overlay: Color, amount: f32) -> Color {
    let blend = |b: f32, o: f32| b + (o - b) * amount;
    Color {
        r: blend(base.r, overlay.r),
        g: blend(base.g, overlay.g),
        b: blend(base.b, overlay.b),
        a: base.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_action_has_no_background_at_rest() {
        let style = alert_action(ButtonColors::text(Color::WHITE), Radius::from(8.0), 1.0)(
            &Theme::Light,
            button::Status::Active,
        );
        assert!(style.background.is_none());
        assert_eq!(style.text_color, Color::WHITE);
        assert_eq!(style.border.radius, Radius::from(8.0));
    }

    #[test]
    fn filled_action_keeps_container_color() {
        let fill = Color::from_rgb(0.3, 0.7, 0.3);
        let style = alert_action(ButtonColors::filled(fill, Color::WHITE), Radius::from(8.0), 1.0)(
            &Theme::Dark,
            button::Status::Active,
        );
        assert_eq!(style.background, Some(Background::Color(fill)));
    }

    #[test]
    fn action_fades_with_card() {
        let style = alert_action(ButtonColors::text(Color::WHITE), Radius::from(8.0), 0.5)(
            &Theme::Light,
            button::Status::Active,
        );
        assert!((style.text_color.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn close_button_washes_on_hover_only() {
        let rest = alert_close(Color::BLACK, 1.0)(&Theme::Light, button::Status::Active);
        let hover = alert_close(Color::BLACK, 1.0)(&Theme::Light, button::Status::Hovered);
        assert!(rest.background.is_none());
        assert!(hover.background.is_some());
    }

    #[test]
    fn tonal_uses_primary_container() {
        let scheme = ColorScheme::light();
        let style = tonal(scheme)(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(scheme.primary_container))
        );
        assert_eq!(style.text_color, scheme.on_primary_container);
    }
}
