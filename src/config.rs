//! Game tunables, loadable from a TOML file.
//!
//! Every section falls back to the reference values, so a config file only
//! needs the keys it wants to change:
//!
//! ```toml
//! [rules]
//! tower_goal = 10
//!
//! [items]
//! spawn_interval = 30
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub items: ItemConfig,
    #[serde(default)]
    pub upgrades: UpgradeConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Logical play-field size.  The renderer scales this onto the terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    /// Gap between the plane and the bottom edge of the field.
    pub bottom_margin: f32,
    pub base_speed: f32,
    /// Extra speed per level of the speed track.
    pub speed_per_level: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemConfig {
    pub size: f32,
    /// Units fallen per tick.
    pub fall_speed: f32,
    /// Ticks between spawns.
    pub spawn_interval: u32,
    pub base_reward_chance: f64,
    pub reward_chance_per_level: f64,
    pub hazard_reduction_per_level: f64,
    pub min_hazard_chance: f64,
    pub max_reward_chance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeConfig {
    pub max_level: u32,
    /// Cost multiplier applied (and floored) after each purchase.
    pub cost_growth: f64,
    pub speed_cost: u32,
    pub tower_cost: u32,
    pub eagle_cost: u32,
    pub currency_cost: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Towers needed to win a session.
    pub tower_goal: u32,
    pub base_currency_per_collect: u32,
    /// Seconds the win screen stays up before returning to the menu.
    pub win_delay_secs: f32,
    /// Simulation ticks per second.
    pub tick_rate: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 80.0,
            height: 60.0,
            bottom_margin: 20.0,
            base_speed: 5.0,
            speed_per_level: 2.0,
        }
    }
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            size: 40.0,
            fall_speed: 5.0,
            spawn_interval: 40,
            base_reward_chance: 0.2,
            reward_chance_per_level: 0.05,
            hazard_reduction_per_level: 0.1,
            min_hazard_chance: 0.05,
            max_reward_chance: 0.95,
        }
    }
}

impl Default for UpgradeConfig {
    fn default() -> Self {
        Self {
            max_level: 5,
            cost_growth: 1.5,
            speed_cost: 5,
            tower_cost: 3,
            eagle_cost: 4,
            currency_cost: 5,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            tower_goal: 25,
            base_currency_per_collect: 1,
            win_delay_secs: 5.0,
            tick_rate: 60,
        }
    }
}

impl GameConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(msg.to_string()))
        };

        if self.field.width <= 0.0 || self.field.height <= 0.0 {
            return invalid("field dimensions must be positive");
        }
        if self.player.width <= 0.0 || self.player.height <= 0.0 {
            return invalid("player dimensions must be positive");
        }
        if self.player.width > self.field.width
            || self.player.height + self.player.bottom_margin > self.field.height
        {
            return invalid("player does not fit inside the field");
        }
        if self.items.size <= 0.0 || self.items.size > self.field.width {
            return invalid("item size must be positive and fit the field width");
        }
        if self.items.fall_speed <= 0.0 {
            return invalid("items.fall_speed must be positive");
        }
        if self.items.spawn_interval == 0 {
            return invalid("items.spawn_interval must be at least 1");
        }
        let chances = [
            self.items.base_reward_chance,
            self.items.min_hazard_chance,
            self.items.max_reward_chance,
        ];
        if chances.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return invalid("chances must lie in [0, 1]");
        }
        if self.upgrades.cost_growth < 1.0 {
            return invalid("upgrades.cost_growth must be at least 1.0");
        }
        if self.rules.tower_goal == 0 {
            return invalid("rules.tower_goal must be at least 1");
        }
        if self.rules.tick_rate == 0 {
            return invalid("rules.tick_rate must be at least 1");
        }
        if self.rules.win_delay_secs.is_nan() || self.rules.win_delay_secs < 0.0 {
            return invalid("rules.win_delay_secs must not be negative");
        }
        Ok(())
    }
}
