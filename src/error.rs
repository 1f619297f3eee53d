use std::path::PathBuf;

use thiserror::Error;

/// Why an upgrade purchase was refused.  Never fatal: the purchase is a
/// no-op and the button is shown disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpgradeError {
    #[error("not enough currency: costs {cost}, have {available}")]
    InsufficientFunds { cost: u32, available: u32 },

    #[error("already at max level {max_level}")]
    MaxLevelReached { max_level: u32 },
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read sprite {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sprite {path} has no visible rows")]
    Empty { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
