// SPDX-License-Identifier: MPL-2.0
//! Dismissible banner anchored to the top edge of the window.
//!
//! A top alert is driven by three pieces the host wires together:
//!
//! - an [`AlertConfig`] describing content, styling and the host messages to
//!   emit, rebuilt on every render pass;
//! - a [`Presenter`] kept in host state, which owns the animation phase and
//!   the auto-dismiss timer;
//! - [`view`], which renders the card from both.
//!
//! The host owns the visibility flag. It reports the flag with
//! [`Presenter::sync`], routes [`Message`]s back to [`Presenter::handle`],
//! and turns the resulting [`Effect`]s into its own messages with
//! [`AlertConfig::dispatch`]. The alert never hides itself: every dismissal
//! path only emits the configured `on_dismiss` message.
//!
//! # Example
//!
//! ```ignore
//! let config = AlertConfig::new()
//!     .title("Saved")
//!     .icon(icons::check_circle())
//!     .on_dismiss(AppMessage::HideSaved);
//!
//! // update
//! let effects = self.presenter.handle(message);
//! let messages = config.dispatch(&effects);
//!
//! // view
//! top_alert::view(&config, &self.presenter, &theme, env).map(AppMessage::Alert)
//! ```

mod config;
mod layout;
mod presenter;
mod resolve;
mod view;

pub use config::{
    bottom_rounded, default_shape, ActionButton, AlertConfig, Background, Behavior, ButtonColors,
    MaxLines, DEFAULT_DURATION_MILLIS,
};
pub use layout::{
    compute as compute_layout, ellipsize, ActionLayout, ActionRole, AlertLayout, Environment,
    Leading, TextBlock, TITLE_MAX_LINES,
};
pub use presenter::{ActivationId, Effect, Message, Phase, Presenter, DEFAULT_TRANSITION};
pub use resolve::{fade, resolve_background, resolve_color, Surface};
pub use view::view;
