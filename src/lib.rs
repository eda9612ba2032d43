// SPDX-License-Identifier: MPL-2.0
//! `top_alerter` is a dismissible, fully customizable top alert banner for
//! the Iced GUI framework.
//!
//! The widget lives in [`ui::top_alert`]; [`app`] is a demo gallery that
//! exercises every styling and behavior option.

#![doc(html_root_url = "https://docs.rs/top_alerter/0.1.0")]

pub mod app;
pub mod error;
pub mod ui;
