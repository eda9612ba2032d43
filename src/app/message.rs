// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo host.

use crate::ui::theming::ThemeMode;
use crate::ui::top_alert;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A trigger button was pressed.
    ShowDemo(usize),
    /// A demo alert asked to be hidden.
    HideDemo(usize),
    /// Interaction forwarded to the presenter of one demo alert.
    Alert(usize, top_alert::Message),
    /// An action button callback of a demo ran.
    DemoAction { demo: usize, action: &'static str },
    /// Animation and timer clock, active only while an alert needs it.
    Tick(Instant),
    /// Header sun/moon button.
    ToggleTheme,
    /// The window was resized; text truncation depends on the width.
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Theme override; takes precedence over the persisted theme.
    pub theme: Option<ThemeMode>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TOP_ALERTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Demo to open at startup.
    pub show: Option<usize>,
}
