//! Spawn model: how likely the next falling item is a tower or an eagle,
//! and where it appears.

use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::entities::{Item, ItemKind, Upgrades};
use crate::upgrades::{hazard_reduction, reward_bonus};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnChances {
    pub reward: f64,
    pub hazard: f64,
}

/// Reward/hazard odds for the current upgrade levels.
///
/// When the hazard chance falls under its floor, only the reward chance is
/// re-derived from the floored hazard chance; the pair is not renormalised.
pub fn spawn_chances(config: &GameConfig, upgrades: &Upgrades) -> SpawnChances {
    let items = &config.items;
    let mut reward =
        (items.base_reward_chance + reward_bonus(config, upgrades)).min(items.max_reward_chance);
    let mut hazard = 1.0 - reward - hazard_reduction(config, upgrades);

    if hazard < items.min_hazard_chance {
        hazard = items.min_hazard_chance;
        reward = items.max_reward_chance - hazard;
    }

    SpawnChances { reward, hazard }
}

/// Classify a uniform roll in `[0, 1)`.
pub fn classify(roll: f64, chances: &SpawnChances) -> ItemKind {
    if roll < chances.reward {
        ItemKind::Reward
    } else {
        ItemKind::Hazard
    }
}

/// Create a new item at the top of the field, fully inside it horizontally.
pub fn spawn_item(config: &GameConfig, upgrades: &Upgrades, rng: &mut impl Rng) -> Item {
    let chances = spawn_chances(config, upgrades);
    let roll: f64 = rng.gen();
    let kind = classify(roll, &chances);

    let size = config.items.size;
    let max_x = config.field.width - size;
    let x = if max_x > 0.0 {
        rng.gen_range(0.0..=max_x)
    } else {
        0.0
    };

    debug!(
        reward = chances.reward,
        hazard = chances.hazard,
        roll,
        ?kind,
        x,
        "spawned item"
    );

    Item { x, y: 0.0, kind, size }
}
