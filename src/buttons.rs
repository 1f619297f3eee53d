//! Buttons as plain data: one layout per screen plus a stateless hit-test.
//!
//! Rectangles are in play-field units and assume the reference 800×600
//! field; other field sizes scale the layout proportionally.

use crate::entities::{GameSession, GameState, Rect, TrackKind};
use crate::upgrades;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Play,
    Upgrades,
    Quit,
    Back,
    Close,
    BackToMenu,
    Buy(TrackKind),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub id: ButtonId,
    pub rect: Rect,
    pub label: String,
    pub enabled: bool,
}

const REF_WIDTH: f32 = 800.0;
const REF_HEIGHT: f32 = 600.0;

/// Builds buttons from reference-space rectangles, scaled to the field.
struct Layout {
    sx: f32,
    sy: f32,
}

impl Layout {
    fn new(session: &GameSession) -> Self {
        Self {
            sx: session.config.field.width / REF_WIDTH,
            sy: session.config.field.height / REF_HEIGHT,
        }
    }

    fn button(
        &self,
        id: ButtonId,
        (x, y, w, h): (f32, f32, f32, f32),
        label: impl Into<String>,
    ) -> Button {
        Button {
            id,
            rect: Rect::new(x * self.sx, y * self.sy, w * self.sx, h * self.sy),
            label: label.into(),
            enabled: true,
        }
    }
}

/// Buttons visible on the current screen, with enabled flags resolved.
pub fn layout(session: &GameSession) -> Vec<Button> {
    let l = Layout::new(session);
    match session.state {
        GameState::Menu => vec![
            l.button(ButtonId::Play, (300.0, 200.0, 200.0, 60.0), "Play Game"),
            l.button(ButtonId::Upgrades, (300.0, 300.0, 200.0, 60.0), "Upgrades"),
            l.button(ButtonId::Quit, (300.0, 400.0, 200.0, 60.0), "Quit Game"),
        ],
        GameState::Playing => vec![close_button(&l)],
        GameState::Upgrades => {
            let mut buttons: Vec<Button> = TrackKind::ALL
                .iter()
                .enumerate()
                .map(|(i, &kind)| {
                    let y = 120.0 + 70.0 * i as f32;
                    let mut b = l.button(
                        ButtonId::Buy(kind),
                        (200.0, y, 400.0, 50.0),
                        purchase_label(session, kind),
                    );
                    b.enabled = session
                        .upgrades
                        .track(kind)
                        .can_apply(&session.progress)
                        .is_ok();
                    b
                })
                .collect();
            buttons.push(l.button(ButtonId::Back, (300.0, 520.0, 200.0, 60.0), "Back to Menu"));
            buttons.push(close_button(&l));
            buttons
        }
        GameState::GameOver { won: true, .. } => Vec::new(),
        GameState::GameOver { won: false, .. } => vec![
            l.button(ButtonId::BackToMenu, (250.0, 330.0, 300.0, 60.0), "Back to Menu"),
            l.button(ButtonId::Quit, (300.0, 400.0, 200.0, 60.0), "Quit Game"),
        ],
    }
}

fn close_button(l: &Layout) -> Button {
    l.button(ButtonId::Close, (760.0, 10.0, 30.0, 30.0), "X")
}

pub fn purchase_label(session: &GameSession, kind: TrackKind) -> String {
    let track = session.upgrades.track(kind);
    let name = upgrades::label(kind);
    if track.is_maxed() {
        format!("{name} (MAX LEVEL)")
    } else {
        format!(
            "{name} (Level {}/{}) - {} currency",
            track.level, track.max_level, track.cost
        )
    }
}

/// First enabled button under the point, if any.
pub fn hit_test(buttons: &[Button], x: f32, y: f32) -> Option<ButtonId> {
    buttons
        .iter()
        .find(|b| b.enabled && b.rect.contains(x, y))
        .map(|b| b.id)
}
