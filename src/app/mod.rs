// SPDX-License-Identifier: MPL-2.0
//! Demo host: a gallery of top alert configurations.
//!
//! The `App` struct owns one visibility flag and one [`Presenter`] per demo,
//! the active theme and the persisted settings. Flags only change through
//! messages (`ShowDemo` from the trigger list, `HideDemo` from an alert's
//! dismiss callback); after every update the flags are synced into the
//! presenters, which run the animations and timers.

pub mod config;
pub mod demos;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::ui::theming::{AppTheme, ThemeMode};
use crate::ui::top_alert::{self, Environment, Presenter};
use demos::DEMO_COUNT;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    theme: AppTheme,
    config: config::Config,
    /// Host-owned visibility of each demo alert.
    shown: [bool; DEMO_COUNT],
    presenters: Vec<Presenter>,
    viewport: Size,
    /// `alerts.top_inset`, clamped once at startup.
    top_inset: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme.mode)
            .field("shown", &self.shown)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(config::Config::default())
    }
}

impl App {
    /// Builds the application state from loaded settings.
    pub fn with_config(config: config::Config) -> Self {
        let transition = config.alerts.transition();
        let top_inset = config.alerts.top_inset();
        Self {
            theme: AppTheme::new(config.general.theme_mode),
            config,
            shown: [false; DEMO_COUNT],
            presenters: vec![Presenter::new(transition); DEMO_COUNT],
            viewport: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            top_inset,
        }
    }

    /// Initializes application state from CLI flags and the settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }

        let mut app = Self::with_config(config);
        if let Some(mode) = flags.theme {
            app.theme = AppTheme::new(mode);
        }

        let task = match flags.show {
            Some(index) if index < DEMO_COUNT => Task::done(Message::ShowDemo(index)),
            Some(index) => {
                log::warn!("--show {index} is out of range (0..{DEMO_COUNT}), ignoring");
                Task::none()
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        view::APP_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.needs_ticks()),
        ])
    }

    /// Whether any alert animates or waits on its timer.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.presenters.iter().any(Presenter::needs_ticks)
    }

    #[must_use]
    pub fn is_shown(&self, demo: usize) -> bool {
        self.shown.get(demo).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn presenter(&self, demo: usize) -> Option<&Presenter> {
        self.presenters.get(demo)
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode
    }

    /// Processes one message with `now` as the current time.
    ///
    /// Host messages produced by the alerts are applied immediately, so one
    /// call settles every consequence of the message.
    pub fn update_at(&mut self, message: Message, now: Instant) {
        let mut queue = vec![message];

        while let Some(message) = queue.pop() {
            let follow_ups = self.apply(message);
            // Preserve emission order: first follow-up is handled first.
            queue.extend(follow_ups.into_iter().rev());
            self.sync_presenters(now);
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Tick(now) => *now,
            _ => Instant::now(),
        };
        self.update_at(message, now);
        Task::none()
    }

    fn apply(&mut self, message: Message) -> Vec<Message> {
        match message {
            Message::ShowDemo(index) => {
                if let Some(flag) = self.shown.get_mut(index) {
                    log::debug!("showing demo {index} ({})", demos::TITLES[index]);
                    *flag = true;
                }
                Vec::new()
            }
            Message::HideDemo(index) => {
                if let Some(flag) = self.shown.get_mut(index) {
                    log::debug!("hiding demo {index}");
                    *flag = false;
                }
                Vec::new()
            }
            Message::Alert(index, alert_message) => {
                let Some(presenter) = self.presenters.get_mut(index) else {
                    return Vec::new();
                };
                let effects = presenter.handle(alert_message);
                if effects.is_empty() {
                    return Vec::new();
                }
                demos::config(index, &self.theme)
                    .map(|config| config.dispatch(&effects))
                    .unwrap_or_default()
            }
            Message::Tick(now) => {
                let mut follow_ups = Vec::new();
                for (index, presenter) in self.presenters.iter_mut().enumerate() {
                    let effects = presenter.handle(top_alert::Message::Tick(now));
                    if effects.is_empty() {
                        continue;
                    }
                    if let Some(config) = demos::config(index, &self.theme) {
                        follow_ups.extend(config.dispatch(&effects));
                    }
                }
                follow_ups
            }
            Message::DemoAction { demo, action } => {
                log::info!("demo {demo}: \"{action}\" action ran");
                Vec::new()
            }
            Message::ToggleTheme => {
                let mode = self.theme.toggled_mode();
                self.theme = AppTheme::new(mode);
                self.config.general.theme_mode = mode;
                if let Err(err) = config::save(&self.config) {
                    log::warn!("failed to persist theme: {err}");
                }
                Vec::new()
            }
            Message::WindowResized(size) => {
                self.viewport = size;
                Vec::new()
            }
        }
    }

    /// Feeds the current visibility flags to every presenter.
    fn sync_presenters(&mut self, now: Instant) {
        for (index, presenter) in self.presenters.iter_mut().enumerate() {
            let visible = self.shown[index];
            if visible == presenter.is_visible() {
                continue;
            }
            let behavior = demos::config(index, &self.theme)
                .map(|config| config.behavior())
                .unwrap_or_default();
            presenter.sync(visible, behavior, now);
        }
    }

    fn environment(&self) -> Environment {
        Environment {
            viewport_width: self.viewport.width,
            top_inset: self.top_inset,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            theme: &self.theme,
            presenters: &self.presenters,
            env: self.environment(),
        })
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for presenter in &mut self.presenters {
            presenter.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::top_alert::{self, Phase};
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn app() -> App {
        App::with_config(config::Config::default())
    }

    #[test]
    fn show_demo_activates_presenter() {
        let mut app = app();
        let start = Instant::now();
        app.update_at(Message::ShowDemo(0), start);

        assert!(app.is_shown(0));
        assert_eq!(app.presenter(0).map(Presenter::phase), Some(Phase::Entering));
        assert!(app.needs_ticks());
    }

    #[test]
    fn auto_dismiss_hides_demo_after_duration() {
        let mut app = app();
        let start = Instant::now();
        app.update_at(Message::ShowDemo(0), start);

        app.update_at(Message::Tick(start + ms(3999)), start + ms(3999));
        assert!(app.is_shown(0));

        app.update_at(Message::Tick(start + ms(4000)), start + ms(4000));
        assert!(!app.is_shown(0));
        assert_eq!(app.presenter(0).map(Presenter::phase), Some(Phase::Exiting));

        app.update_at(Message::Tick(start + ms(4400)), start + ms(4400));
        assert_eq!(app.presenter(0).map(Presenter::phase), Some(Phase::Hidden));
        assert!(!app.needs_ticks());
    }

    #[test]
    fn no_auto_dismiss_demo_stays_visible() {
        let mut app = app();
        let start = Instant::now();
        let demo = demos::index::NO_AUTO_DISMISS;
        app.update_at(Message::ShowDemo(demo), start);

        let later = start + Duration::from_secs(30);
        app.update_at(Message::Tick(later), later);
        assert!(app.is_shown(demo));
    }

    #[test]
    fn close_tap_hides_demo() {
        let mut app = app();
        let start = Instant::now();
        app.update_at(Message::ShowDemo(0), start);
        app.update_at(Message::Tick(start + ms(300)), start + ms(300));

        app.update_at(
            Message::Alert(0, top_alert::Message::CloseTapped),
            start + ms(500),
        );
        assert!(!app.is_shown(0));
    }

    #[test]
    fn card_tap_hides_clickable_demo() {
        let mut app = app();
        let start = Instant::now();
        let demo = demos::index::CLICKABLE;
        app.update_at(Message::ShowDemo(demo), start);
        app.update_at(Message::Tick(start + ms(300)), start + ms(300));

        app.update_at(
            Message::Alert(demo, top_alert::Message::CardTapped),
            start + ms(400),
        );
        assert!(!app.is_shown(demo));
    }

    #[test]
    fn card_tap_keeps_plain_demo_visible() {
        let mut app = app();
        let start = Instant::now();
        app.update_at(Message::ShowDemo(0), start);
        app.update_at(Message::Tick(start + ms(300)), start + ms(300));

        app.update_at(
            Message::Alert(0, top_alert::Message::CardTapped),
            start + ms(400),
        );
        assert!(app.is_shown(0));
    }

    #[test]
    fn reshow_after_dismiss_starts_fresh_timer() {
        let mut app = app();
        let start = Instant::now();
        app.update_at(Message::ShowDemo(0), start);
        app.update_at(Message::HideDemo(0), start + ms(1000));
        app.update_at(Message::ShowDemo(0), start + ms(1100));

        // The first activation's deadline passes without hiding the second.
        app.update_at(Message::Tick(start + ms(4000)), start + ms(4000));
        assert!(app.is_shown(0));

        app.update_at(Message::Tick(start + ms(5100)), start + ms(5100));
        assert!(!app.is_shown(0));
    }

    #[test]
    fn unknown_demo_index_is_ignored() {
        let mut app = app();
        app.update_at(Message::ShowDemo(DEMO_COUNT + 3), Instant::now());
        assert!(!app.needs_ticks());
    }

    #[test]
    fn resize_updates_environment() {
        let mut app = app();
        app.update_at(
            Message::WindowResized(Size::new(1024.0, 600.0)),
            Instant::now(),
        );
        assert_eq!(app.environment().viewport_width, 1024.0);
    }

    #[test]
    fn out_of_range_top_inset_is_clamped_at_startup() {
        let mut settings = config::Config::default();
        settings.alerts.top_inset = Some(900.0);
        let app = App::with_config(settings);

        assert_eq!(app.top_inset, config::MAX_TOP_INSET);
        assert_eq!(app.environment().top_inset, config::MAX_TOP_INSET);
    }
}
