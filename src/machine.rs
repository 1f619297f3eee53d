//! Screen state machine.
//!
//! ```text
//!   Menu ──Play──▶ Playing ──hazard / goal──▶ GameOver
//!    │  ◀──Close──┘                             │
//!    ├──Upgrades──▶ Upgrades ──Back / Close──▶ Menu
//!    ◀──────── won: after the win delay ────────┤
//!    ◀──────── lost: Back to Menu ──────────────┘
//! ```
//!
//! Input events and per-tick updates are dispatched to one handler per
//! state.  Wall-clock time is passed in as `now` so the win countdown does
//! not depend on frame pacing.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::buttons::{self, ButtonId};
use crate::compute::{self, HeldKeys, TickOutcome};
use crate::entities::{GameSession, GameState};

/// Abstract input, independent of the terminal library.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Window/terminal close or Ctrl-C.  Exits from any state.
    Quit,
    /// A click in play-field coordinates.
    PointerPressed { x: f32, y: f32 },
    /// A keyboard shortcut resolved directly to a button.
    Press(ButtonId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn handle_event(session: &mut GameSession, event: InputEvent) -> Flow {
    match event {
        InputEvent::Quit => Flow::Exit,
        InputEvent::PointerPressed { x, y } => {
            match buttons::hit_test(&buttons::layout(session), x, y) {
                Some(id) => press(session, id),
                None => Flow::Continue,
            }
        }
        InputEvent::Press(id) => {
            // Shortcuts obey the same visibility and enabled rules as clicks.
            let usable = buttons::layout(session)
                .iter()
                .any(|b| b.id == id && b.enabled);
            if usable {
                press(session, id)
            } else {
                Flow::Continue
            }
        }
    }
}

/// Dispatch a button press to the handler for the current state.
pub fn press(session: &mut GameSession, id: ButtonId) -> Flow {
    match session.state {
        GameState::Menu => on_menu(session, id),
        GameState::Playing => on_playing(session, id),
        GameState::Upgrades => on_upgrades(session, id),
        GameState::GameOver { won, .. } => on_game_over(session, won, id),
    }
}

fn on_menu(session: &mut GameSession, id: ButtonId) -> Flow {
    match id {
        ButtonId::Play => {
            start_session(session);
            Flow::Continue
        }
        ButtonId::Upgrades => {
            enter(session, GameState::Upgrades);
            Flow::Continue
        }
        ButtonId::Quit => Flow::Exit,
        _ => Flow::Continue,
    }
}

fn on_playing(session: &mut GameSession, id: ButtonId) -> Flow {
    if id == ButtonId::Close {
        back_to_menu(session);
    }
    Flow::Continue
}

fn on_upgrades(session: &mut GameSession, id: ButtonId) -> Flow {
    match id {
        ButtonId::Back | ButtonId::Close => enter(session, GameState::Menu),
        ButtonId::Buy(kind) => match compute::buy_upgrade(session, kind) {
            Ok(next) => *session = next,
            Err(err) => debug!(?kind, %err, "purchase refused"),
        },
        _ => {}
    }
    Flow::Continue
}

fn on_game_over(session: &mut GameSession, won: bool, id: ButtonId) -> Flow {
    if won {
        return Flow::Continue;
    }
    match id {
        ButtonId::BackToMenu => {
            back_to_menu(session);
            Flow::Continue
        }
        ButtonId::Quit => Flow::Exit,
        _ => Flow::Continue,
    }
}

/// Run one simulation tick for the current state.
pub fn step(session: &mut GameSession, held: HeldKeys, now: Instant, rng: &mut impl Rng) {
    match session.state {
        GameState::Playing => {
            let (next, outcome) = compute::tick(session, held, rng);
            *session = next;
            match outcome {
                TickOutcome::Running => {}
                TickOutcome::Won => {
                    enter(session, GameState::GameOver { won: true, since: now });
                }
                TickOutcome::Lost => {
                    enter(session, GameState::GameOver { won: false, since: now });
                }
            }
        }
        GameState::GameOver { won: true, since } => {
            if now.saturating_duration_since(since) >= win_delay(session) {
                back_to_menu(session);
            }
        }
        GameState::Menu | GameState::Upgrades | GameState::GameOver { won: false, .. } => {}
    }
}

/// Whole seconds left on the win screen, or `None` on any other screen.
pub fn win_countdown(session: &GameSession, now: Instant) -> Option<u64> {
    match session.state {
        GameState::GameOver { won: true, since } => {
            let elapsed = now.saturating_duration_since(since);
            Some(win_delay(session).saturating_sub(elapsed).as_secs())
        }
        _ => None,
    }
}

fn win_delay(session: &GameSession) -> Duration {
    Duration::try_from_secs_f32(session.config.rules.win_delay_secs).unwrap_or_default()
}

fn start_session(session: &mut GameSession) {
    *session = compute::reset_session(session);
    enter(session, GameState::Playing);
}

fn back_to_menu(session: &mut GameSession) {
    *session = compute::reset_session(session);
    enter(session, GameState::Menu);
}

fn enter(session: &mut GameSession, state: GameState) {
    info!(
        from = ?session.state,
        to = ?state,
        currency = session.progress.currency,
        towers = session.progress.towers_collected,
        "state change"
    );
    session.state = state;
}
