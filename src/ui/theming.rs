// SPDX-License-Identifier: MPL-2.0
//! Theme provider: color tokens, type scale, and Light/Dark/System mode.
//!
//! The top alert never hard-codes colors. Every unset styling parameter falls
//! back to a token from [`ColorScheme`] or a style from [`Typography`].

use crate::ui::design_tokens::{palette, typography};
use iced::font::{Style, Weight};
use iced::{Color, Font};
use serde::{Deserialize, Serialize};

/// Color tokens for a theme, named after their Material 3 roles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub surface: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,

    // Content on surfaces
    pub on_surface: Color,
    pub on_surface_variant: Color,

    // Brand
    pub primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,

    // Semantic
    pub error: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::GRAY_50,
            surface_container: palette::GRAY_100,
            surface_container_high: Color::from_rgb(0.91, 0.88, 0.93),

            on_surface: palette::GRAY_900,
            on_surface_variant: palette::GRAY_600,

            primary: palette::PRIMARY_600,
            primary_container: palette::PRIMARY_CONTAINER_LIGHT,
            on_primary_container: Color::from_rgb(0.13, 0.0, 0.36),

            error: palette::ERROR_LIGHT,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_950,
            surface_container: palette::GRAY_850,
            surface_container_high: palette::GRAY_800,

            on_surface: palette::GRAY_100,
            on_surface_variant: palette::GRAY_400,

            primary: palette::PRIMARY_300,
            primary_container: palette::PRIMARY_CONTAINER_DARK,
            on_primary_container: palette::PRIMARY_CONTAINER_LIGHT,

            error: palette::ERROR_DARK,
        }
    }
}

/// A font size, weight and slant combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: Weight,
    pub italic: bool,
}

impl TextStyle {
    #[must_use]
    pub const fn new(size: f32, weight: Weight) -> Self {
        Self {
            size,
            weight,
            italic: false,
        }
    }

    /// Returns a copy with another weight.
    #[must_use]
    pub const fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns a copy with another size.
    #[must_use]
    pub const fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Line height in pixels.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.size * typography::LINE_HEIGHT
    }

    /// The iced font matching this style.
    #[must_use]
    pub fn font(&self) -> Font {
        Font {
            weight: self.weight,
            style: if self.italic {
                Style::Italic
            } else {
                Style::Normal
            },
            ..Font::default()
        }
    }
}

/// Type scale used as fallback for alert text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub headline_small: TextStyle,
    pub title_medium: TextStyle,
    pub body_large: TextStyle,
    pub body_medium: TextStyle,
    pub label_large: TextStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            headline_small: TextStyle::new(typography::HEADLINE_SM, Weight::Normal),
            title_medium: TextStyle::new(typography::TITLE_MD, Weight::Medium),
            body_large: TextStyle::new(typography::BODY_LG, Weight::Normal),
            body_medium: TextStyle::new(typography::BODY, Weight::Normal),
            label_large: TextStyle::new(typography::LABEL_LG, Weight::Medium),
        }
    }
}

/// Theme handed to the top alert: colors plus type scale.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub typography: Typography,
    pub mode: ThemeMode,
    /// Effective darkness, resolved once when the theme is built.
    pub dark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Parses a mode name as accepted by the command line and settings file.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        // System mode queries the OS here and nowhere else.
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self {
            colors,
            typography: Typography::default(),
            mode,
            dark,
        }
    }

    /// The explicit mode opposite to the effective one.
    #[must_use]
    pub fn toggled_mode(&self) -> ThemeMode {
        if self.dark {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// The built-in iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(&self) -> iced::Theme {
        if self.dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_container_high.r > 0.8);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_container_high.r < 0.3);
    }

    #[test]
    fn content_colors_contrast_with_surfaces() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            let delta = (scheme.on_surface.r - scheme.surface_container_high.r).abs();
            assert!(delta > 0.5);
        }
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn toggled_flips_explicit_modes() {
        assert_eq!(AppTheme::new(ThemeMode::Light).toggled_mode(), ThemeMode::Dark);
        assert_eq!(AppTheme::new(ThemeMode::Dark).toggled_mode(), ThemeMode::Light);
    }

    #[test]
    fn system_theme_resolves_darkness_once() {
        let theme = AppTheme::new(ThemeMode::System);
        let expected = if theme.dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        assert_eq!(theme.colors, expected);
        let iced_dark = theme.iced_theme() == iced::Theme::Dark;
        assert_eq!(iced_dark, theme.dark);
        assert_eq!(theme.toggled_mode().is_dark(), !theme.dark);
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!(ThemeMode::parse("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("system"), Some(ThemeMode::System));
        assert_eq!(ThemeMode::parse("sepia"), None);
    }

    #[test]
    fn text_style_font_reflects_weight_and_slant() {
        let style = TextStyle::new(14.0, Weight::Bold).italic();
        let font = style.font();
        assert_eq!(font.weight, Weight::Bold);
        assert_eq!(font.style, Style::Italic);
    }

    #[test]
    fn title_is_larger_than_body() {
        let typography = Typography::default();
        assert!(typography.title_medium.size > typography.body_medium.size);
    }
}
