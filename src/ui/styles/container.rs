// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{elevation, palette};
use crate::ui::theming::ColorScheme;
use crate::ui::top_alert::Surface;
use iced::border::Radius;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

/// Card surface of a top alert, faded by `alpha`.
///
/// A transparent surface yields no background and no shadow at all so that
/// whatever the host draws behind the card shows through.
pub fn alert_surface(
    surface: Surface,
    shape: Radius,
    alpha: f32,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = alpha.clamp(0.0, 1.0);
        let background = (surface.color.a > 0.0).then(|| {
            Background::Color(Color {
                a: surface.color.a * alpha,
                ..surface.color
            })
        });
        let mut shadow = elevation::shadow(surface.shadow_elevation);
        shadow.color.a *= alpha;

        container::Style {
            background,
            border: Border {
                radius: shape,
                ..Default::default()
            },
            shadow,
            ..Default::default()
        }
    }
}

/// Page background of the demo host.
pub fn page(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: Some(scheme.on_surface),
        ..Default::default()
    }
}

/// Center-aligned app bar of the demo host.
pub fn app_bar(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.surface_container)),
        text_color: Some(scheme.on_surface),
        ..Default::default()
    }
}

/// Fill painted under an alert card, clipped to the card shape.
pub fn backdrop(
    fill: Background,
    shape: Radius,
    alpha: f32,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(fill.scale_alpha(alpha.clamp(0.0, 1.0))),
        border: Border {
            radius: shape,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Left-to-right gradient between two colors.
#[must_use]
pub fn horizontal_gradient(start: Color, end: Color) -> Background {
    let gradient = Linear::new(Degrees(90.0))
        .add_stop(0.0, start)
        .add_stop(1.0, end);
    Background::Gradient(Gradient::Linear(gradient))
}

/// The purple gradient of the demo gallery.
#[must_use]
pub fn brand_gradient() -> Background {
    horizontal_gradient(palette::GRADIENT_START, palette::GRADIENT_END)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_surface_draws_nothing() {
        let surface = Surface {
            color: Color::TRANSPARENT,
            tonal_elevation: 0.0,
            shadow_elevation: 0.0,
        };
        let style = alert_surface(surface, Radius::from(16.0), 1.0)(&Theme::Light);
        assert!(style.background.is_none());
        assert_eq!(style.shadow, elevation::NONE);
    }

    #[test]
    fn opaque_surface_fades_with_alpha() {
        let surface = Surface {
            color: Color::WHITE,
            tonal_elevation: 6.0,
            shadow_elevation: elevation::SHADOW_ALERT,
        };
        let style = alert_surface(surface, Radius::from(16.0), 0.25)(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!((color.a - 0.25).abs() < f32::EPSILON),
            other => panic!("expected a color background, got {other:?}"),
        }
        assert!(style.shadow.blur_radius > 0.0);
    }

    #[test]
    fn backdrop_keeps_gradient_and_shape() {
        let shape = Radius::from(16.0);
        let style = backdrop(brand_gradient(), shape, 1.0)(&Theme::Dark);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
        assert_eq!(style.border.radius, shape);
    }
}
