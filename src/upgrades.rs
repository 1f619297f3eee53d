//! Upgrade tracks: purchase rules, cost growth and the derived effects the
//! rest of the game reads.

use crate::config::{GameConfig, UpgradeConfig};
use crate::entities::{Progress, TrackKind, UpgradeTrack, Upgrades};
use crate::error::UpgradeError;

impl UpgradeTrack {
    pub fn new(kind: TrackKind, cost: u32, max_level: u32) -> Self {
        Self {
            kind,
            level: 0,
            cost,
            max_level,
        }
    }

    pub fn is_maxed(&self) -> bool {
        self.level >= self.max_level
    }

    /// Whether `apply` would succeed.  Max level wins over affordability.
    pub fn can_apply(&self, progress: &Progress) -> Result<(), UpgradeError> {
        if self.is_maxed() {
            return Err(UpgradeError::MaxLevelReached {
                max_level: self.max_level,
            });
        }
        if progress.currency < self.cost {
            return Err(UpgradeError::InsufficientFunds {
                cost: self.cost,
                available: progress.currency,
            });
        }
        Ok(())
    }

    /// Buy the next level: pay the cost, bump the level, grow the cost.
    pub fn apply(&mut self, progress: &mut Progress, growth: f64) -> Result<(), UpgradeError> {
        self.can_apply(progress)?;
        progress.currency -= self.cost;
        self.level += 1;
        self.cost = grow_cost(self.cost, growth);
        Ok(())
    }
}

/// Next cost, floored.  Never below the current cost.
pub fn grow_cost(cost: u32, growth: f64) -> u32 {
    let next = (cost as f64 * growth).floor() as u32;
    next.max(cost)
}

impl Upgrades {
    pub fn from_config(cfg: &UpgradeConfig) -> Self {
        Self {
            speed: UpgradeTrack::new(TrackKind::Speed, cfg.speed_cost, cfg.max_level),
            tower_rate: UpgradeTrack::new(TrackKind::TowerRate, cfg.tower_cost, cfg.max_level),
            eagle_rate: UpgradeTrack::new(TrackKind::EagleRate, cfg.eagle_cost, cfg.max_level),
            currency_boost: UpgradeTrack::new(
                TrackKind::CurrencyBoost,
                cfg.currency_cost,
                cfg.max_level,
            ),
        }
    }

    pub fn track(&self, kind: TrackKind) -> &UpgradeTrack {
        match kind {
            TrackKind::Speed => &self.speed,
            TrackKind::TowerRate => &self.tower_rate,
            TrackKind::EagleRate => &self.eagle_rate,
            TrackKind::CurrencyBoost => &self.currency_boost,
        }
    }

    pub fn track_mut(&mut self, kind: TrackKind) -> &mut UpgradeTrack {
        match kind {
            TrackKind::Speed => &mut self.speed,
            TrackKind::TowerRate => &mut self.tower_rate,
            TrackKind::EagleRate => &mut self.eagle_rate,
            TrackKind::CurrencyBoost => &mut self.currency_boost,
        }
    }

    pub fn buy(
        &mut self,
        kind: TrackKind,
        progress: &mut Progress,
        cfg: &UpgradeConfig,
    ) -> Result<(), UpgradeError> {
        self.track_mut(kind).apply(progress, cfg.cost_growth)
    }
}

// ── Derived effects ───────────────────────────────────────────────────────────

pub fn player_speed(config: &GameConfig, upgrades: &Upgrades) -> f32 {
    config.player.base_speed + config.player.speed_per_level * upgrades.speed.level as f32
}

pub fn reward_bonus(config: &GameConfig, upgrades: &Upgrades) -> f64 {
    config.items.reward_chance_per_level * upgrades.tower_rate.level as f64
}

pub fn hazard_reduction(config: &GameConfig, upgrades: &Upgrades) -> f64 {
    config.items.hazard_reduction_per_level * upgrades.eagle_rate.level as f64
}

/// Currency granted per tower; each currency-track level adds one.
pub fn currency_per_collect(config: &GameConfig, upgrades: &Upgrades) -> u32 {
    config.rules.base_currency_per_collect + upgrades.currency_boost.level
}

pub fn label(kind: TrackKind) -> &'static str {
    match kind {
        TrackKind::Speed => "Speed Up",
        TrackKind::TowerRate => "More Towers",
        TrackKind::EagleRate => "Less Eagles",
        TrackKind::CurrencyBoost => "More Currency",
    }
}

/// One-line read-out of a track's current effect for the upgrades screen.
pub fn describe(kind: TrackKind, config: &GameConfig, upgrades: &Upgrades) -> String {
    match kind {
        TrackKind::Speed => format!("Current Speed: {}", player_speed(config, upgrades)),
        TrackKind::TowerRate => {
            let pct = (config.items.base_reward_chance + reward_bonus(config, upgrades)) * 100.0;
            format!("Tower Spawn Rate: {}%", pct.floor() as u32)
        }
        TrackKind::EagleRate => {
            let pct = hazard_reduction(config, upgrades) * 100.0;
            format!("Eagle Reduction: {}%", pct.round() as u32)
        }
        TrackKind::CurrencyBoost => format!(
            "Currency per Tower: {}",
            currency_per_collect(config, upgrades)
        ),
    }
}
