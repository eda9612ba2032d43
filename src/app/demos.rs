// SPDX-License-Identifier: MPL-2.0
//! The gallery of top alert configurations shown by the demo host.
//!
//! Each demo pairs a trigger label with a fixed [`AlertConfig`]. Configs are
//! rebuilt on every render pass from the active theme, like any other view.

use super::Message;
use crate::ui::design_tokens::{opacity, palette, radius, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use crate::ui::top_alert::{
    bottom_rounded, ActionButton, AlertConfig, Background, ButtonColors, MaxLines,
};
use iced::font::Weight;
use iced::Color;

/// Number of demos in the gallery.
pub const DEMO_COUNT: usize = 17;

/// Trigger labels, in gallery order.
pub const TITLES: [&str; DEMO_COUNT] = [
    "Simple Alert (Theme-Aware)",
    "With Icon",
    "With Progress",
    "With Action Buttons",
    "Error Style (Red)",
    "Warning Style (Orange)",
    "Info Style (Blue)",
    "Success Style (Green)",
    "Long Message",
    "No Auto-Dismiss",
    "Custom Duration (8s)",
    "Custom Typography",
    "Dark Background",
    "Gradient Background",
    "Custom Shape",
    "Clickable Card",
    "Fully Custom Buttons",
];

/// Demo indices referenced outside this module.
pub mod index {
    pub const WITH_PROGRESS: usize = 2;
    pub const WITH_ACTIONS: usize = 3;
    pub const ERROR: usize = 4;
    pub const NO_AUTO_DISMISS: usize = 9;
    pub const CUSTOM_DURATION: usize = 10;
    pub const GRADIENT: usize = 13;
    pub const CLICKABLE: usize = 15;
    pub const CUSTOM_BUTTONS: usize = 16;
}

fn white_alpha(alpha: f32) -> Color {
    Color {
        a: alpha,
        ..Color::WHITE
    }
}

fn action(demo: usize, label: &'static str) -> ActionButton<Message> {
    ActionButton::new(label).on_click(Message::DemoAction { demo, action: label })
}

/// Builds the configuration of demo `demo`, or `None` for an unknown index.
#[must_use]
pub fn config(demo: usize, theme: &AppTheme) -> Option<AlertConfig<Message>> {
    let colors = &theme.colors;
    let type_scale = &theme.typography;
    let base = AlertConfig::new().on_dismiss(Message::HideDemo(demo));

    let config = match demo {
        0 => base.title("Welcome Back!").message("Your session is active"),
        1 => base
            .title("Download Complete")
            .message("report.pdf is ready")
            .icon(icons::check_circle())
            .icon_tint(palette::GREEN_500),
        2 => base
            .title("Uploading...")
            .message("3 of 5 files completed")
            .show_progress(true),
        3 => base
            .title("Unsaved Changes")
            .message("Do you want to save before leaving?")
            .positive(action(demo, "Save"))
            .negative(action(demo, "Discard").colors(ButtonColors::text(colors.error))),
        4 => base
            .title("Connection Failed")
            .message("No internet connection")
            .icon(icons::warning())
            .background(palette::RED_600)
            .title_color(Color::WHITE)
            .message_color(white_alpha(opacity::TEXT_SOFT))
            .icon_tint(Color::WHITE)
            .positive(
                action(demo, "Retry")
                    .colors(ButtonColors::filled(Color::WHITE, palette::RED_600)),
            ),
        5 => base
            .title("Low Battery")
            .message("15% remaining – plug in soon")
            .icon(icons::battery_alert())
            .background(palette::ORANGE_500)
            .title_color(Color::WHITE)
            .icon_tint(Color::WHITE),
        6 => base
            .title("Update Available")
            .message("A new version is ready")
            .icon(icons::info())
            .background(palette::BLUE_500)
            .title_color(Color::WHITE)
            .icon_tint(Color::WHITE)
            .positive(action(demo, "Update Now")),
        7 => base
            .title("Success!")
            .message("Your profile has been updated")
            .icon(icons::check_circle())
            .background(palette::GREEN_500)
            .title_color(Color::WHITE)
            .title_font_weight(Weight::Bold)
            .message_color(white_alpha(opacity::TEXT_SOFT))
            .icon_tint(Color::WHITE)
            .positive(
                action(demo, "Done")
                    .colors(ButtonColors::filled(Color::WHITE, palette::GREEN_500)),
            ),
        8 => base
            .title("Privacy Update")
            .message(
                "We've improved our privacy policy to better protect your data. \
                 Tap to learn more.",
            )
            .message_max_lines(MaxLines::Lines(5)),
        9 => base
            .title("Important Notice")
            .message("This message will stay until dismissed")
            .auto_dismiss(false)
            .background(Color {
                a: opacity::SCRIM,
                ..Color::BLACK
            })
            .title_color(Color::WHITE),
        10 => base
            .title("8 Second Alert")
            .message("Long-lasting message example")
            .duration_millis(8000)
            .background(palette::PURPLE_500)
            .title_color(Color::WHITE),
        11 => base
            .title("Fancy Typography")
            .message("Custom styles applied")
            .title_style(
                type_scale
                    .headline_small
                    .with_weight(Weight::ExtraBold)
                    .with_size(typography::TITLE_XL),
            )
            .title_color(palette::DEEP_ORANGE_900)
            .message_style(type_scale.body_large.italic())
            .background(palette::ORANGE_50),
        12 => base
            .title("Dark Mode Alert")
            .message("Looks great at night")
            .icon(icons::dark_mode())
            .background(Color::BLACK)
            .title_color(Color::WHITE)
            .message_color(palette::GRAY_DDD)
            .icon_tint(palette::YELLOW),
        13 => base
            .title("Gradient Magic")
            .message("Full edge-to-edge gradient")
            .background(Background::Transparent)
            .backdrop(styles::container::brand_gradient())
            .title_color(Color::WHITE)
            .message_color(white_alpha(opacity::TEXT_STRONG)),
        14 => base
            .title("Custom Shape")
            .message("Extra rounded bottom corners")
            .container_shape(bottom_rounded(radius::XL))
            .background(palette::PINK_500)
            .title_color(Color::WHITE),
        15 => base
            .title("Tap Anywhere!")
            .message("Entire card is clickable")
            .background(palette::INDIGO_500)
            .title_color(Color::WHITE)
            .on_click(Message::HideDemo(demo)),
        16 => base
            .title("Rate This App")
            .message("Enjoying TopAlerter?")
            .positive(
                action(demo, "Love it!")
                    .colors(ButtonColors::filled(palette::GREEN_500, Color::WHITE))
                    .shape(radius::FULL)
                    .text_style(type_scale.label_large.with_weight(Weight::Bold)),
            )
            .negative(
                action(demo, "Later")
                    .colors(ButtonColors::text(colors.on_surface_variant))
                    .shape(radius::MD),
            ),
        _ => return None,
    };

    Some(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeMode;
    use crate::ui::top_alert::{compute_layout, Effect, Environment, Leading};
    use iced::border::Radius;
    use std::time::Duration;

    fn theme() -> AppTheme {
        AppTheme::new(ThemeMode::Light)
    }

    fn demo(index: usize) -> AlertConfig<Message> {
        config(index, &theme()).expect("demo exists")
    }

    #[test]
    fn every_title_has_a_config() {
        for index in 0..DEMO_COUNT {
            assert!(config(index, &theme()).is_some(), "demo {index}");
        }
        assert!(config(DEMO_COUNT, &theme()).is_none());
    }

    #[test]
    fn every_demo_dismisses_itself() {
        for index in 0..DEMO_COUNT {
            let messages = demo(index).dispatch(&[Effect::Dismiss]);
            assert!(
                matches!(messages.as_slice(), [Message::HideDemo(i)] if *i == index),
                "demo {index}"
            );
        }
    }

    #[test]
    fn progress_demo_has_spinner_and_close() {
        let layout = compute_layout(
            &demo(index::WITH_PROGRESS),
            &theme(),
            Environment::default(),
        );
        assert!(matches!(layout.leading, Leading::Progress { .. }));
        assert!(layout.close.is_some());
    }

    #[test]
    fn error_demo_runs_retry_then_dismisses() {
        let messages = demo(index::ERROR).dispatch(&[Effect::PositiveClicked, Effect::Dismiss]);
        assert!(matches!(
            messages.as_slice(),
            [
                Message::DemoAction {
                    action: "Retry",
                    ..
                },
                Message::HideDemo(4)
            ]
        ));
    }

    #[test]
    fn actions_demo_uses_error_color_for_discard() {
        let theme = theme();
        let layout = compute_layout(&demo(index::WITH_ACTIONS), &theme, Environment::default());
        assert!(layout.close.is_none());
        assert_eq!(layout.actions[0].text, "Discard");
        assert_eq!(layout.actions[0].colors.content, theme.colors.error);
        assert_eq!(layout.actions[1].text, "Save");
    }

    #[test]
    fn timing_demos_override_behavior() {
        assert!(!demo(index::NO_AUTO_DISMISS).behavior().auto_dismiss);
        assert_eq!(
            demo(index::CUSTOM_DURATION).behavior().duration,
            Duration::from_millis(8000)
        );
        assert_eq!(demo(0).behavior().duration, Duration::from_millis(4000));
    }

    #[test]
    fn gradient_demo_is_transparent_with_backdrop() {
        let layout = compute_layout(&demo(index::GRADIENT), &theme(), Environment::default());
        assert_eq!(layout.surface.shadow_elevation, 0.0);
        assert_eq!(layout.surface.tonal_elevation, 0.0);
        assert!(layout.backdrop.is_some());
    }

    #[test]
    fn clickable_demo_hides_on_card_tap() {
        let messages = demo(index::CLICKABLE).dispatch(&[Effect::CardClicked]);
        assert!(matches!(messages.as_slice(), [Message::HideDemo(15)]));
    }

    #[test]
    fn custom_buttons_demo_styles_both_buttons() {
        let layout = compute_layout(
            &demo(index::CUSTOM_BUTTONS),
            &theme(),
            Environment::default(),
        );
        let later = &layout.actions[0];
        let love = &layout.actions[1];
        assert_eq!(later.shape, Radius::from(radius::MD));
        assert_eq!(love.shape, Radius::from(radius::FULL));
        assert_eq!(love.text_style.weight, Weight::Bold);
        assert_eq!(love.colors.container, Some(palette::GREEN_500));
    }
}
