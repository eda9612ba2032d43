// SPDX-License-Identifier: MPL-2.0
//! Pure layout model of the alert card.
//!
//! [`compute`] folds a configuration, the theme and the window environment
//! into an [`AlertLayout`]: every color resolved, every slot decided, every
//! text already truncated. The view only turns this model into widgets, which
//! keeps the composition rules testable without a renderer.

use super::config::{AlertConfig, ButtonColors};
use super::resolve::{resolve_background, resolve_color, Surface};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::icons::IconRef;
use crate::ui::theming::{AppTheme, TextStyle};
use iced::border::Radius;
use iced::{Color, Padding};
use std::borrow::Cow;

/// The title never wraps past this many lines.
pub const TITLE_MAX_LINES: usize = 2;

/// Window facts the layout depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Width available to the card, in logical pixels.
    pub viewport_width: f32,
    /// Extra top padding for system bars or notches.
    pub top_inset: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            viewport_width: 480.0,
            top_inset: 0.0,
        }
    }
}

/// What occupies the slot before the text column.
#[derive(Debug, Clone, PartialEq)]
pub enum Leading {
    None,
    Progress {
        color: Color,
    },
    Icon {
        handle: IconRef,
        tint: Color,
        /// Label shown as the icon's tooltip, taken from the title.
        label: Option<String>,
    },
}

impl Leading {
    fn width(&self) -> f32 {
        match self {
            Leading::None => 0.0,
            Leading::Progress { .. } | Leading::Icon { .. } => sizing::ICON_MD + spacing::SM,
        }
    }
}

/// A resolved, already truncated block of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub style: TextStyle,
    pub color: Color,
    /// Line cap, `None` when unbounded.
    pub max_lines: Option<usize>,
}

impl TextBlock {
    /// Height of `max_lines` lines. The view clips the block to it, so the cap
    /// holds even when the width estimate is off.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn max_height(&self) -> Option<f32> {
        self.max_lines
            .map(|lines| lines.max(1) as f32 * self.style.size * typography::LINE_HEIGHT)
    }
}

/// Which callback an action button triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRole {
    Negative,
    Positive,
}

/// A resolved action button.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionLayout {
    pub role: ActionRole,
    pub text: String,
    pub colors: ButtonColors,
    pub shape: Radius,
    pub text_style: TextStyle,
}

/// Everything the view needs to draw one card.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertLayout {
    pub surface: Surface,
    pub backdrop: Option<iced::Background>,
    pub shape: Radius,
    pub padding: Padding,
    pub leading: Leading,
    pub title: Option<TextBlock>,
    pub message: Option<TextBlock>,
    /// Close glyph color, present only without action buttons.
    pub close: Option<Color>,
    /// Negative first, then positive.
    pub actions: Vec<ActionLayout>,
    pub clickable: bool,
}

impl AlertLayout {
    #[must_use]
    pub fn has_action_row(&self) -> bool {
        !self.actions.is_empty()
    }
}

/// Builds the layout model for one render pass.
#[must_use]
pub fn compute<M>(config: &AlertConfig<M>, theme: &AppTheme, env: Environment) -> AlertLayout {
    let colors = &theme.colors;
    let type_scale = &theme.typography;

    let leading = if config.show_progress {
        Leading::Progress {
            color: resolve_color(config.progress_color, colors.on_surface_variant),
        }
    } else if let Some(handle) = &config.icon {
        Leading::Icon {
            handle: handle.clone(),
            tint: resolve_color(config.icon_tint, colors.on_surface_variant),
            label: config.title_text().map(str::to_owned),
        }
    } else {
        Leading::None
    };

    let has_actions = config.has_actions();
    let close = (!has_actions).then_some(colors.on_surface_variant);

    let text_width = content_width(env.viewport_width, &leading, close.is_some());

    let title = config.title_text().map(|text| {
        let mut style = config.title_style.unwrap_or(type_scale.title_medium);
        if let Some(weight) = config.title_font_weight {
            style = style.with_weight(weight);
        }
        TextBlock {
            text: ellipsize(text, Some(TITLE_MAX_LINES), chars_per_line(text_width, &style))
                .into_owned(),
            style,
            color: resolve_color(config.title_color, colors.on_surface),
            max_lines: Some(TITLE_MAX_LINES),
        }
    });

    let message = config.message_text().map(|text| {
        let style = config.message_style.unwrap_or(type_scale.body_medium);
        TextBlock {
            text: ellipsize(
                text,
                config.message_max_lines.limit(),
                chars_per_line(text_width, &style),
            )
            .into_owned(),
            style,
            color: resolve_color(config.message_color, colors.on_surface_variant),
            max_lines: config.message_max_lines.limit(),
        }
    });

    let mut actions = Vec::with_capacity(2);
    if let Some(button) = config.negative_button() {
        actions.push(ActionLayout {
            role: ActionRole::Negative,
            text: button.text.clone(),
            colors: button
                .colors
                .unwrap_or_else(|| ButtonColors::text(colors.on_surface_variant)),
            shape: button.shape.unwrap_or_else(|| radius::SM.into()),
            text_style: button.text_style.unwrap_or(type_scale.label_large),
        });
    }
    if let Some(button) = config.positive_button() {
        actions.push(ActionLayout {
            role: ActionRole::Positive,
            text: button.text.clone(),
            colors: button
                .colors
                .unwrap_or_else(|| ButtonColors::text(colors.on_surface)),
            shape: button.shape.unwrap_or_else(|| radius::SM.into()),
            text_style: button.text_style.unwrap_or(type_scale.label_large),
        });
    }

    AlertLayout {
        surface: resolve_background(config.background, config.tonal_elevation, colors),
        backdrop: config.backdrop,
        shape: config.container_shape,
        padding: Padding {
            top: spacing::SM + env.top_inset.max(0.0),
            right: spacing::MD,
            bottom: spacing::SM,
            left: spacing::MD,
        },
        leading,
        title,
        message,
        close,
        actions,
        clickable: config.on_click.is_some(),
    }
}

/// Width of the title/message column.
fn content_width(viewport_width: f32, leading: &Leading, has_close: bool) -> f32 {
    let close = if has_close {
        spacing::SM + sizing::CLOSE_TARGET
    } else {
        0.0
    };
    (viewport_width - 2.0 * spacing::MD - leading.width() - close).max(0.0)
}

/// Estimated number of narrow glyphs that fit on one line. Wide glyphs
/// (CJK, fullwidth forms, emoji) count as two.
#[must_use]
pub fn chars_per_line(width: f32, style: &TextStyle) -> usize {
    let glyph = (style.size * typography::AVG_GLYPH_WIDTH_EM).max(1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (width / glyph).floor() as usize;
    count.max(1)
}

/// Word-wraps `text` greedily at `chars_per_line` and, when it needs more
/// than `limit` lines, keeps the first `limit` and ends the last one with `…`.
///
/// Text that fits is returned untouched.
#[must_use]
pub fn ellipsize(text: &str, limit: Option<usize>, chars_per_line: usize) -> Cow<'_, str> {
    let Some(limit) = limit else {
        return Cow::Borrowed(text);
    };
    let limit = limit.max(1);
    let width = chars_per_line.max(1);

    let lines = wrap(text, width);
    if lines.len() <= limit {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    for (index, line) in lines.iter().take(limit).enumerate() {
        if let Some(previous) = index.checked_sub(1).map(|i| &lines[i]) {
            if previous.ends_paragraph {
                out.push('\n');
            } else if !previous.splits_word {
                out.push(' ');
            }
        }
        if index + 1 == limit {
            let chars: Vec<char> = line.text.chars().collect();
            let kept: String = chars[..fitting(&chars, width.saturating_sub(1))]
                .iter()
                .collect();
            out.push_str(kept.trim_end());
            out.push('…');
        } else {
            out.push_str(&line.text);
        }
    }
    Cow::Owned(out)
}

struct WrappedLine {
    text: String,
    ends_paragraph: bool,
    /// The next line continues the same word.
    splits_word: bool,
}

fn is_wide(c: char) -> bool {
    matches!(
        u32::from(c),
        0x1100..=0x115F
            | 0x2E80..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x1F300..=0x1F64F
            | 0x1F900..=0x1F9FF
            | 0x20000..=0x3FFFD
    )
}

fn glyph_units(c: char) -> usize {
    if is_wide(c) {
        2
    } else {
        1
    }
}

fn units(chars: &[char]) -> usize {
    chars.iter().copied().map(glyph_units).sum()
}

/// Number of leading chars whose units fit in `width`.
fn fitting(chars: &[char], width: usize) -> usize {
    let mut used = 0;
    for (index, &c) in chars.iter().enumerate() {
        used += glyph_units(c);
        if used > width {
            return index;
        }
    }
    chars.len()
}

fn wrap(text: &str, width: usize) -> Vec<WrappedLine> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            // Overlong words are split hard.
            while units(&word) > width {
                if current_len > 0 {
                    lines.push(WrappedLine {
                        text: std::mem::take(&mut current),
                        ends_paragraph: false,
                        splits_word: false,
                    });
                    current_len = 0;
                }
                let rest = word.split_off(fitting(&word, width).max(1));
                lines.push(WrappedLine {
                    text: word.into_iter().collect(),
                    ends_paragraph: false,
                    splits_word: true,
                });
                word = rest;
            }

            if word.is_empty() {
                continue;
            }
            let word_units = units(&word);
            let needed = if current_len == 0 {
                word_units
            } else {
                current_len + 1 + word_units
            };
            if needed > width {
                lines.push(WrappedLine {
                    text: std::mem::take(&mut current),
                    ends_paragraph: false,
                    splits_word: false,
                });
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += word_units;
            current.extend(word);
        }

        lines.push(WrappedLine {
            text: current,
            ends_paragraph: true,
            splits_word: false,
        });
    }

    lines
}
