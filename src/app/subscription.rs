// SPDX-License-Identifier: MPL-2.0
//! Event and clock subscriptions for the demo host.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Frame interval of the alert clock (about 60 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Forwards window resizes so text truncation follows the window width.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates the alert clock while any presenter animates or waits on a timer.
pub fn create_tick_subscription(needs_ticks: bool) -> Subscription<Message> {
    if needs_ticks {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
