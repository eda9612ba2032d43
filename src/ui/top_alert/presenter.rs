// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine and auto-dismiss timer of a top alert.
//!
//! The host owns whether an alert *should* show and reports it through
//! [`Presenter::sync`]. The presenter turns the edges of that flag into the
//! `on_activate` / `on_deactivate` lifecycle hooks, runs the enter/exit
//! transition, and keeps at most one dismiss timer, scoped to the activation
//! that started it.
//!
//! Time only moves forward through [`Message::Tick`], so tests drive the
//! presenter with synthetic `Instant`s.
//!
//! ```text
//!  Hidden ──activate──▶ Entering ──done──▶ Shown
//!    ▲                    ▲  │               │
//!    │                    │  deactivate      deactivate
//!    │               activate│               │
//!    └────done──────── Exiting ◀─────────────┘
//! ```

use super::config::Behavior;
use std::time::{Duration, Instant};

/// Default length of the enter and exit transitions.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Spinner rotation speed in radians per second.
const SPINNER_SPEED: f32 = 5.0;

/// Animation phase of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Entering,
    Shown,
    Exiting,
}

/// Identifies one false→true edge of the visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivationId(u64);

/// Pending auto-dismiss, valid only for the activation that armed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DismissTimer {
    activation: ActivationId,
    deadline: Instant,
}

/// Messages handled by the presenter.
#[derive(Debug, Clone)]
pub enum Message {
    /// Clock tick: advances the transition and polls the timer.
    Tick(Instant),
    /// The close glyph was tapped.
    CloseTapped,
    /// The positive action button was tapped.
    PositiveTapped,
    /// The negative action button was tapped.
    NegativeTapped,
    /// The card body was tapped.
    CardTapped,
}

/// Host-facing outcomes, translated to host messages by
/// [`AlertConfig::dispatch`](super::AlertConfig::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Dismiss,
    CardClicked,
    PositiveClicked,
    NegativeClicked,
}

/// Per-alert presentation state.
#[derive(Debug, Clone)]
pub struct Presenter {
    phase: Phase,
    /// Transition progress, 0.0 fully hidden to 1.0 fully shown.
    progress: f32,
    last_frame: Option<Instant>,
    visible: bool,
    activation: Option<ActivationId>,
    next_activation: u64,
    timer: Option<DismissTimer>,
    /// Set once the current activation has asked the host to dismiss it.
    dismiss_requested: bool,
    transition: Duration,
    spinner_rotation: f32,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION)
    }
}

impl Presenter {
    #[must_use]
    pub fn new(transition: Duration) -> Self {
        Self {
            phase: Phase::Hidden,
            progress: 0.0,
            last_frame: None,
            visible: false,
            activation: None,
            next_activation: 0,
            timer: None,
            dismiss_requested: false,
            transition,
            spinner_rotation: 0.0,
        }
    }

    /// Reports the host's visibility flag.
    ///
    /// Only edges matter: false→true activates, true→false deactivates,
    /// repeating the current value is a no-op.
    pub fn sync(&mut self, visible: bool, behavior: Behavior, now: Instant) {
        match (self.visible, visible) {
            (false, true) => self.on_activate(behavior, now),
            (true, false) => self.on_deactivate(now),
            _ => {}
        }
    }

    fn on_activate(&mut self, behavior: Behavior, now: Instant) {
        let id = ActivationId(self.next_activation);
        self.next_activation += 1;

        self.visible = true;
        self.activation = Some(id);
        self.dismiss_requested = false;
        self.phase = Phase::Entering;
        self.last_frame = Some(now);
        self.timer = behavior.auto_dismiss.then(|| DismissTimer {
            activation: id,
            deadline: now + behavior.duration,
        });

        log::debug!(
            "top alert activated ({id:?}, auto_dismiss={}, duration={:?})",
            behavior.auto_dismiss,
            behavior.duration
        );
    }

    fn on_deactivate(&mut self, now: Instant) {
        self.visible = false;
        self.activation = None;
        if self.timer.take().is_some() {
            log::debug!("top alert deactivated; pending auto-dismiss cancelled");
        }
        if self.phase != Phase::Hidden {
            self.phase = Phase::Exiting;
            self.last_frame = Some(now);
        }
    }

    /// Drops the pending timer and snaps to hidden. Nothing fires afterwards.
    pub fn teardown(&mut self) {
        self.visible = false;
        self.activation = None;
        self.timer = None;
        self.phase = Phase::Hidden;
        self.progress = 0.0;
        self.last_frame = None;
    }

    /// Handles a presenter message and returns the effects for the host, in
    /// the order their callbacks must run.
    pub fn handle(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Tick(now) => {
                self.advance(now);
                if self.poll_timer(now) {
                    log::debug!("top alert auto-dismiss timer elapsed");
                    vec![Effect::Dismiss]
                } else {
                    Vec::new()
                }
            }
            Message::CloseTapped => self.manual_dismiss(None),
            Message::PositiveTapped => self.manual_dismiss(Some(Effect::PositiveClicked)),
            Message::NegativeTapped => self.manual_dismiss(Some(Effect::NegativeClicked)),
            Message::CardTapped => {
                if self.accepts_input() {
                    vec![Effect::CardClicked]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Runs an optional action callback, then asks for dismissal once.
    fn manual_dismiss(&mut self, action: Option<Effect>) -> Vec<Effect> {
        if !self.accepts_input() || self.dismiss_requested {
            return Vec::new();
        }
        self.timer = None;
        self.dismiss_requested = true;
        action.into_iter().chain([Effect::Dismiss]).collect()
    }

    fn poll_timer(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer else {
            return false;
        };
        if Some(timer.activation) != self.activation || now < timer.deadline {
            return false;
        }
        self.timer = None;
        if self.dismiss_requested {
            return false;
        }
        self.dismiss_requested = true;
        true
    }

    /// Moves the transition and the spinner forward to `now`.
    fn advance(&mut self, now: Instant) {
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);

        let step = if self.transition.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.transition.as_secs_f32()
        };

        match self.phase {
            Phase::Entering => {
                self.progress = (self.progress + step).min(1.0);
                if self.progress >= 1.0 {
                    self.phase = Phase::Shown;
                }
            }
            Phase::Exiting => {
                self.progress = (self.progress - step).max(0.0);
                if self.progress <= 0.0 {
                    self.phase = Phase::Hidden;
                    self.last_frame = None;
                }
            }
            Phase::Shown | Phase::Hidden => {}
        }

        if self.phase != Phase::Hidden {
            self.spinner_rotation =
                (self.spinner_rotation + elapsed.as_secs_f32() * SPINNER_SPEED)
                    % std::f32::consts::TAU;
        }
    }

    /// Input is handled only while the current activation is on screen.
    fn accepts_input(&self) -> bool {
        self.visible && matches!(self.phase, Phase::Entering | Phase::Shown)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether anything should be drawn at all.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Linear transition progress.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Eased progress used for the slide (decelerating cubic).
    #[must_use]
    pub fn eased_progress(&self) -> f32 {
        1.0 - (1.0 - self.progress).powi(3)
    }

    /// Opacity multiplier for the fade.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    #[must_use]
    pub fn activation(&self) -> Option<ActivationId> {
        self.activation
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether the host must keep feeding ticks.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.is_rendered() || self.timer.is_some()
    }
}
