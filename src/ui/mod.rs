// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`top_alert`] - Dismissible banner anchored to the top of the window
//! - [`widgets`] - Custom Iced widgets (spinner, slide wrapper)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Color schemes, type scale and Light/Dark/System mode
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod theming;
pub mod top_alert;
pub mod widgets;
