//! All game entity types — plain data plus rectangle geometry.

use std::time::Instant;

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// A tower: collect it.
    Reward,
    /// An eagle: avoid it.
    Hazard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Speed,
    TowerRate,
    EagleRate,
    CurrencyBoost,
}

impl TrackKind {
    pub const ALL: [TrackKind; 4] = [
        TrackKind::Speed,
        TrackKind::TowerRate,
        TrackKind::EagleRate,
        TrackKind::CurrencyBoost,
    ];
}

/// Which screen is active.  `since` on `GameOver` is the wall-clock instant
/// the screen was entered; the win countdown is measured from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Upgrades,
    GameOver { won: bool, since: Instant },
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in play-field units, `(x, y)` is the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// Half-open containment, used for pointer hit-tests.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

// ── Falling items ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub x: f32,
    pub y: f32,
    pub kind: ItemKind,
    pub size: f32,
}

impl Item {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Upgrades & progress ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct UpgradeTrack {
    pub kind: TrackKind,
    pub level: u32,
    /// Price of the next level.
    pub cost: u32,
    pub max_level: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Upgrades {
    pub speed: UpgradeTrack,
    pub tower_rate: UpgradeTrack,
    pub eagle_rate: UpgradeTrack,
    pub currency_boost: UpgradeTrack,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Progress {
    /// Spendable currency.  Survives every screen change.
    pub currency: u32,
    /// Towers caught in the current session.
    pub towers_collected: u32,
    pub won: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the simulation owns.  Cloneable so the pure update functions
/// in `compute` can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub config: GameConfig,
    pub state: GameState,
    pub player: Player,
    pub items: Vec<Item>,
    pub upgrades: Upgrades,
    pub progress: Progress,
    /// Ticks since the last spawn.
    pub spawn_counter: u32,
}
