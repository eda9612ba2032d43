// SPDX-License-Identifier: MPL-2.0
//! Configuration snapshot of a top alert.
//!
//! An [`AlertConfig`] is rebuilt by the host on every render pass. Every
//! styling field is optional and falls back to the theme at layout time;
//! every callback is a host message the alert emits when the matching
//! interaction happens.

use super::presenter::Effect;
use crate::ui::design_tokens::{elevation, radius};
use crate::ui::icons::IconRef;
use crate::ui::theming::TextStyle;
use iced::border::Radius;
use iced::font::Weight;
use iced::Color;
use std::time::Duration;

/// Auto-dismiss delay used when none is configured.
pub const DEFAULT_DURATION_MILLIS: u64 = 4000;

/// Surface fill of the alert card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Background {
    /// Theme-aware elevated surface.
    #[default]
    Theme,
    /// An explicit color, drawn verbatim.
    Solid(Color),
    /// No fill, no elevation, no shadow: whatever the host draws behind the
    /// alert (a gradient, an image) shows through.
    Transparent,
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        if color == Color::TRANSPARENT {
            Background::Transparent
        } else {
            Background::Solid(color)
        }
    }
}

/// Line cap for a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxLines {
    #[default]
    Unbounded,
    Lines(u16),
}

impl MaxLines {
    /// Returns the cap as a count, or `None` when unbounded.
    #[must_use]
    pub fn limit(self) -> Option<usize> {
        match self {
            MaxLines::Unbounded => None,
            MaxLines::Lines(n) => Some(usize::from(n.max(1))),
        }
    }
}

/// Color override for an action button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    /// Fill behind the label; `None` keeps a flat text button.
    pub container: Option<Color>,
    pub content: Color,
}

impl ButtonColors {
    /// Flat button with a colored label.
    #[must_use]
    pub fn text(content: Color) -> Self {
        Self {
            container: None,
            content,
        }
    }

    /// Filled button.
    #[must_use]
    pub fn filled(container: Color, content: Color) -> Self {
        Self {
            container: Some(container),
            content,
        }
    }
}

/// One of the two optional action buttons.
#[derive(Debug, Clone)]
pub struct ActionButton<M> {
    pub(crate) text: String,
    pub(crate) on_click: Option<M>,
    pub(crate) colors: Option<ButtonColors>,
    pub(crate) shape: Option<Radius>,
    pub(crate) text_style: Option<TextStyle>,
}

impl<M> ActionButton<M> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            on_click: None,
            colors: None,
            shape: None,
            text_style: None,
        }
    }

    /// Message emitted before the alert's dismiss message when tapped.
    #[must_use]
    pub fn on_click(mut self, message: M) -> Self {
        self.on_click = Some(message);
        self
    }

    #[must_use]
    pub fn colors(mut self, colors: ButtonColors) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: impl Into<Radius>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    #[must_use]
    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = Some(style);
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// A button only counts as configured when it has a label.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Auto-dismiss settings read by the presenter on activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Behavior {
    pub auto_dismiss: bool,
    pub duration: Duration,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            auto_dismiss: true,
            duration: Duration::from_millis(DEFAULT_DURATION_MILLIS),
        }
    }
}

/// Everything a top alert needs to render and react, for one render pass.
#[derive(Debug, Clone)]
pub struct AlertConfig<M> {
    // Content
    pub(crate) title: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) icon: Option<IconRef>,

    // Appearance
    pub(crate) background: Background,
    pub(crate) container_shape: Radius,
    pub(crate) tonal_elevation: f32,
    pub(crate) backdrop: Option<iced::Background>,

    // Title
    pub(crate) title_style: Option<TextStyle>,
    pub(crate) title_color: Option<Color>,
    pub(crate) title_font_weight: Option<Weight>,

    // Message
    pub(crate) message_style: Option<TextStyle>,
    pub(crate) message_color: Option<Color>,
    pub(crate) message_max_lines: MaxLines,

    // Icon / progress
    pub(crate) icon_tint: Option<Color>,
    pub(crate) show_progress: bool,
    pub(crate) progress_color: Option<Color>,

    // Actions
    pub(crate) positive: Option<ActionButton<M>>,
    pub(crate) negative: Option<ActionButton<M>>,

    // Behavior
    pub(crate) duration_millis: u64,
    pub(crate) auto_dismiss: bool,
    pub(crate) on_click: Option<M>,
    pub(crate) on_dismiss: Option<M>,
}

impl<M> Default for AlertConfig<M> {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            icon: None,
            background: Background::Theme,
            container_shape: default_shape(),
            tonal_elevation: elevation::TONAL_DEFAULT,
            backdrop: None,
            title_style: None,
            title_color: None,
            title_font_weight: None,
            message_style: None,
            message_color: None,
            message_max_lines: MaxLines::Unbounded,
            icon_tint: None,
            show_progress: false,
            progress_color: None,
            positive: None,
            negative: None,
            duration_millis: DEFAULT_DURATION_MILLIS,
            auto_dismiss: true,
            on_click: None,
            on_dismiss: None,
        }
    }
}

/// Bottom corners rounded, top corners square: the card hangs from the top edge.
#[must_use]
pub fn default_shape() -> Radius {
    Radius {
        top_left: radius::NONE,
        top_right: radius::NONE,
        bottom_right: radius::ALERT,
        bottom_left: radius::ALERT,
    }
}

/// Shape with only the bottom corners rounded by `r`.
#[must_use]
pub fn bottom_rounded(r: f32) -> Radius {
    Radius {
        bottom_right: r,
        bottom_left: r,
        ..default_shape()
    }
}

impl<M> AlertConfig<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn background(mut self, background: impl Into<Background>) -> Self {
        self.background = background.into();
        self
    }

    #[must_use]
    pub fn container_shape(mut self, shape: impl Into<Radius>) -> Self {
        self.container_shape = shape.into();
        self
    }

    #[must_use]
    pub fn tonal_elevation(mut self, elevation: f32) -> Self {
        self.tonal_elevation = elevation;
        self
    }

    /// Fill painted under the card surface and clipped to its shape, such as
    /// a gradient behind a [`Background::Transparent`] card.
    #[must_use]
    pub fn backdrop(mut self, fill: impl Into<iced::Background>) -> Self {
        self.backdrop = Some(fill.into());
        self
    }

    #[must_use]
    pub fn title_style(mut self, style: TextStyle) -> Self {
        self.title_style = Some(style);
        self
    }

    #[must_use]
    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = Some(color);
        self
    }

    #[must_use]
    pub fn title_font_weight(mut self, weight: Weight) -> Self {
        self.title_font_weight = Some(weight);
        self
    }

    #[must_use]
    pub fn message_style(mut self, style: TextStyle) -> Self {
        self.message_style = Some(style);
        self
    }

    #[must_use]
    pub fn message_color(mut self, color: Color) -> Self {
        self.message_color = Some(color);
        self
    }

    #[must_use]
    pub fn message_max_lines(mut self, max_lines: MaxLines) -> Self {
        self.message_max_lines = max_lines;
        self
    }

    #[must_use]
    pub fn icon_tint(mut self, color: Color) -> Self {
        self.icon_tint = Some(color);
        self
    }

    #[must_use]
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    #[must_use]
    pub fn progress_color(mut self, color: Color) -> Self {
        self.progress_color = Some(color);
        self
    }

    #[must_use]
    pub fn positive(mut self, button: ActionButton<M>) -> Self {
        self.positive = Some(button);
        self
    }

    #[must_use]
    pub fn negative(mut self, button: ActionButton<M>) -> Self {
        self.negative = Some(button);
        self
    }

    #[must_use]
    pub fn duration_millis(mut self, millis: u64) -> Self {
        self.duration_millis = millis;
        self
    }

    #[must_use]
    pub fn auto_dismiss(mut self, enabled: bool) -> Self {
        self.auto_dismiss = enabled;
        self
    }

    /// Message emitted when the card body is tapped. Tapping the body does
    /// not dismiss the alert by itself.
    #[must_use]
    pub fn on_click(mut self, message: M) -> Self {
        self.on_click = Some(message);
        self
    }

    /// Message emitted whenever the alert asks to be hidden.
    #[must_use]
    pub fn on_dismiss(mut self, message: M) -> Self {
        self.on_dismiss = Some(message);
        self
    }

    /// Timer settings consumed by the presenter on activation.
    #[must_use]
    pub fn behavior(&self) -> Behavior {
        Behavior {
            auto_dismiss: self.auto_dismiss,
            duration: Duration::from_millis(self.duration_millis),
        }
    }

    /// Configured positive button, ignoring unlabeled ones.
    #[must_use]
    pub fn positive_button(&self) -> Option<&ActionButton<M>> {
        self.positive.as_ref().filter(|b| b.is_configured())
    }

    /// Configured negative button, ignoring unlabeled ones.
    #[must_use]
    pub fn negative_button(&self) -> Option<&ActionButton<M>> {
        self.negative.as_ref().filter(|b| b.is_configured())
    }

    /// Whether the action row replaces the close glyph.
    #[must_use]
    pub fn has_actions(&self) -> bool {
        self.positive_button().is_some() || self.negative_button().is_some()
    }

    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl<M: Clone> AlertConfig<M> {
    /// Translates presenter effects into host messages, in order.
    ///
    /// Effects whose callback is not configured are dropped.
    #[must_use]
    pub fn dispatch(&self, effects: &[Effect]) -> Vec<M> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Dismiss => self.on_dismiss.clone(),
                Effect::CardClicked => self.on_click.clone(),
                Effect::PositiveClicked => {
                    self.positive.as_ref().and_then(|b| b.on_click.clone())
                }
                Effect::NegativeClicked => {
                    self.negative.as_ref().and_then(|b| b.on_click.clone())
                }
            })
            .collect()
    }
}
