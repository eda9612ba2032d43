// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the top alert driven through its public API and
//! through the demo host, using virtual time.

use std::time::{Duration, Instant};
use top_alerter::app::config::Config;
use top_alerter::app::demos::{self, index};
use top_alerter::app::{App, Message as AppMessage};
use top_alerter::ui::theming::{AppTheme, ThemeMode};
use top_alerter::ui::top_alert::{
    compute_layout, ActionButton, AlertConfig, Effect, Environment, Leading, Message, Phase,
    Presenter,
};

#[derive(Debug, Clone, PartialEq)]
enum Host {
    Dismissed,
    Retry,
    Tapped,
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn run_ticks(presenter: &mut Presenter, start: Instant, until: Duration) -> Vec<Effect> {
    let mut effects = Vec::new();
    let mut elapsed = Duration::ZERO;
    while elapsed <= until {
        effects.extend(presenter.handle(Message::Tick(start + elapsed)));
        elapsed += ms(16);
    }
    effects
}

#[test]
fn uploading_alert_dismisses_itself_after_default_duration() {
    let theme = AppTheme::new(ThemeMode::Light);
    let config: AlertConfig<Host> = AlertConfig::new()
        .title("Uploading...")
        .message("3 of 5 files completed")
        .show_progress(true)
        .on_dismiss(Host::Dismissed);

    let layout = compute_layout(&config, &theme, Environment::default());
    assert!(matches!(layout.leading, Leading::Progress { .. }));
    assert!(layout.close.is_some());
    assert!(layout.actions.is_empty());

    let start = Instant::now();
    let mut presenter = Presenter::default();
    presenter.sync(true, config.behavior(), start);

    let early = run_ticks(&mut presenter, start, ms(3990));
    assert!(early.is_empty());
    assert_eq!(presenter.phase(), Phase::Shown);

    let effects = presenter.handle(Message::Tick(start + ms(4000)));
    assert_eq!(config.dispatch(&effects), vec![Host::Dismissed]);

    // Host lowers its flag; the card slides out and unmounts.
    presenter.sync(false, config.behavior(), start + ms(4000));
    assert!(presenter.is_rendered());
    let after = run_ticks(&mut presenter, start + ms(4000), ms(400));
    assert!(after.is_empty());
    assert!(!presenter.is_rendered());
}

#[test]
fn retry_button_runs_action_before_dismiss() {
    let config: AlertConfig<Host> = AlertConfig::new()
        .title("Connection Failed")
        .positive(ActionButton::new("Retry").on_click(Host::Retry))
        .on_dismiss(Host::Dismissed);

    let start = Instant::now();
    let mut presenter = Presenter::default();
    presenter.sync(true, config.behavior(), start);
    run_ticks(&mut presenter, start, ms(500));

    let effects = presenter.handle(Message::PositiveTapped);
    assert_eq!(config.dispatch(&effects), vec![Host::Retry, Host::Dismissed]);

    // The timer was cancelled by the manual dismiss.
    let later = run_ticks(&mut presenter, start + ms(500), ms(5000));
    assert!(later.is_empty());
}

#[test]
fn card_tap_does_not_dismiss() {
    let config: AlertConfig<Host> = AlertConfig::new()
        .title("Tap Anywhere!")
        .auto_dismiss(false)
        .on_click(Host::Tapped)
        .on_dismiss(Host::Dismissed);

    let start = Instant::now();
    let mut presenter = Presenter::default();
    presenter.sync(true, config.behavior(), start);
    run_ticks(&mut presenter, start, ms(400));

    let first = presenter.handle(Message::CardTapped);
    let second = presenter.handle(Message::CardTapped);
    assert_eq!(config.dispatch(&first), vec![Host::Tapped]);
    assert_eq!(config.dispatch(&second), vec![Host::Tapped]);
    assert!(presenter.is_visible());
}

#[test]
fn host_shows_and_auto_hides_a_demo() {
    let mut app = App::with_config(Config::default());
    let start = Instant::now();

    app.update_at(AppMessage::ShowDemo(0), start);
    assert!(app.is_shown(0));
    assert!(app.needs_ticks());

    for frame in 1..=249 {
        let now = start + ms(16) * frame;
        app.update_at(AppMessage::Tick(now), now);
    }
    assert!(app.is_shown(0));

    app.update_at(AppMessage::Tick(start + ms(4000)), start + ms(4000));
    assert!(!app.is_shown(0));

    app.update_at(AppMessage::Tick(start + ms(4400)), start + ms(4400));
    let presenter = app.presenter(0).expect("demo 0 exists");
    assert_eq!(presenter.phase(), Phase::Hidden);
    assert!(!app.needs_ticks());
}

#[test]
fn host_positive_action_hides_demo() {
    let mut app = App::with_config(Config::default());
    let start = Instant::now();

    app.update_at(AppMessage::ShowDemo(index::ERROR), start);
    app.update_at(AppMessage::Tick(start + ms(400)), start + ms(400));
    app.update_at(
        AppMessage::Alert(index::ERROR, Message::PositiveTapped),
        start + ms(450),
    );

    assert!(!app.is_shown(index::ERROR));
    let presenter = app.presenter(index::ERROR).expect("demo exists");
    assert_eq!(presenter.phase(), Phase::Exiting);
}

#[test]
fn host_keeps_sticky_demo_until_closed() {
    let mut app = App::with_config(Config::default());
    let start = Instant::now();

    app.update_at(AppMessage::ShowDemo(index::NO_AUTO_DISMISS), start);
    app.update_at(AppMessage::Tick(start + ms(60_000)), start + ms(60_000));
    assert!(app.is_shown(index::NO_AUTO_DISMISS));

    app.update_at(
        AppMessage::Alert(index::NO_AUTO_DISMISS, Message::CloseTapped),
        start + ms(60_001),
    );
    assert!(!app.is_shown(index::NO_AUTO_DISMISS));
}

#[test]
fn every_demo_renders_a_layout() {
    let theme = AppTheme::new(ThemeMode::Dark);
    let env = Environment {
        viewport_width: 360.0,
        top_inset: 24.0,
    };
    for demo in 0..demos::DEMO_COUNT {
        let config = demos::config(demo, &theme).expect("demo exists");
        let layout = compute_layout(&config, &theme, env);
        assert!(layout.title.is_some(), "demo {demo} has a title");
    }
}
