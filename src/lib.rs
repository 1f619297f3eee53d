pub mod assets;
pub mod buttons;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod hold;
pub mod machine;
pub mod spawn;
pub mod upgrades;
pub mod viewport;
