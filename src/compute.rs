//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameSession` (and, where needed, an RNG handle) and returns a brand-new
//! `GameSession`.  Side effects are limited to the injected RNG and logging.

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::entities::{
    GameSession, GameState, Item, ItemKind, Player, Progress, TrackKind, Upgrades,
};
use crate::error::UpgradeError;
use crate::spawn::spawn_item;
use crate::upgrades::{currency_per_collect, player_speed};

/// Direction keys held during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// What a Playing tick decided about the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Won,
    Lost,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh process-start session: Menu screen, no currency, no upgrades.
pub fn init_session(config: GameConfig) -> GameSession {
    let upgrades = Upgrades::from_config(&config.upgrades);
    GameSession {
        player: centred_player(&config, &upgrades),
        items: Vec::new(),
        upgrades,
        progress: Progress::default(),
        state: GameState::Menu,
        spawn_counter: 0,
        config,
    }
}

/// Plane centred horizontally, resting above the bottom margin.
pub fn centred_player(config: &GameConfig, upgrades: &Upgrades) -> Player {
    let p = &config.player;
    Player {
        x: config.field.width / 2.0 - p.width / 2.0,
        y: config.field.height - p.height - p.bottom_margin,
        width: p.width,
        height: p.height,
        speed: player_speed(config, upgrades),
    }
}

/// Start-of-session reset.  Currency and upgrades are kept; the state is
/// left for the caller to set.
pub fn reset_session(state: &GameSession) -> GameSession {
    GameSession {
        player: centred_player(&state.config, &state.upgrades),
        items: Vec::new(),
        progress: Progress {
            currency: state.progress.currency,
            towers_collected: 0,
            won: false,
        },
        spawn_counter: 0,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

fn max_player_x(state: &GameSession) -> f32 {
    (state.config.field.width - state.player.width).max(0.0)
}

pub fn move_player_left(state: &GameSession) -> GameSession {
    let new_x = (state.player.x - state.player.speed).clamp(0.0, max_player_x(state));
    GameSession {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameSession) -> GameSession {
    let new_x = (state.player.x + state.player.speed).clamp(0.0, max_player_x(state));
    GameSession {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Apply held direction keys, left first.  Both held nets out to no motion
/// unless a wall clamps one of the steps.
pub fn apply_held(state: &GameSession, held: HeldKeys) -> GameSession {
    let mut next = state.clone();
    if held.left {
        next = move_player_left(&next);
    }
    if held.right {
        next = move_player_right(&next);
    }
    next
}

/// Buy one level of `kind`.  On success the player's speed is re-derived so
/// a speed purchase takes effect immediately.
pub fn buy_upgrade(state: &GameSession, kind: TrackKind) -> Result<GameSession, UpgradeError> {
    let mut upgrades = state.upgrades.clone();
    let mut progress = state.progress.clone();
    upgrades.buy(kind, &mut progress, &state.config.upgrades)?;

    let track = upgrades.track(kind);
    info!(
        ?kind,
        level = track.level,
        next_cost = track.cost,
        currency = progress.currency,
        "upgrade bought"
    );

    Ok(GameSession {
        player: Player {
            speed: player_speed(&state.config, &upgrades),
            ..state.player.clone()
        },
        upgrades,
        progress,
        ..state.clone()
    })
}

// ── Per-frame pieces ─────────────────────────────────────────────────────────

/// Move every item down one step and drop those that left the field.
pub fn advance_items(items: &[Item], config: &GameConfig) -> Vec<Item> {
    items
        .iter()
        .map(|it| Item {
            y: it.y + config.items.fall_speed,
            ..it.clone()
        })
        .filter(|it| it.y <= config.field.height)
        .collect()
}

/// Resolve player/item overlaps in list order.  The first terminal outcome
/// (goal reached or eagle hit) stops processing; later items stay put.
pub fn resolve_collisions(state: &GameSession) -> (GameSession, TickOutcome) {
    let player_rect = state.player.rect();
    let per_collect = currency_per_collect(&state.config, &state.upgrades);
    let goal = state.config.rules.tower_goal;

    let mut progress = state.progress.clone();
    let mut outcome = TickOutcome::Running;
    let mut items = Vec::with_capacity(state.items.len());

    for item in &state.items {
        if outcome != TickOutcome::Running || !player_rect.overlaps(&item.rect()) {
            items.push(item.clone());
            continue;
        }
        match item.kind {
            ItemKind::Reward => {
                progress.currency += per_collect;
                progress.towers_collected += 1;
                debug!(
                    towers = progress.towers_collected,
                    currency = progress.currency,
                    "tower collected"
                );
                if progress.towers_collected >= goal {
                    progress.won = true;
                    outcome = TickOutcome::Won;
                }
            }
            ItemKind::Hazard => {
                debug!("eagle hit");
                outcome = TickOutcome::Lost;
            }
        }
    }

    (
        GameSession {
            items,
            progress,
            ..state.clone()
        },
        outcome,
    )
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance a Playing session by one frame: move the plane, spawn on cadence,
/// let items fall, then resolve collisions.
pub fn tick(
    state: &GameSession,
    held: HeldKeys,
    rng: &mut impl Rng,
) -> (GameSession, TickOutcome) {
    let moved = apply_held(state, held);

    let mut items = moved.items.clone();
    let mut spawn_counter = moved.spawn_counter + 1;
    if spawn_counter >= moved.config.items.spawn_interval {
        items.push(spawn_item(&moved.config, &moved.upgrades, rng));
        spawn_counter = 0;
    }

    let advanced = GameSession {
        items: advance_items(&items, &moved.config),
        spawn_counter,
        ..moved
    };

    resolve_collisions(&advanced)
}
