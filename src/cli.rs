//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "plane_collector")]
#[command(about = "Catch falling towers, dodge the eagles, buy upgrades")]
pub struct Cli {
    /// TOML file overriding the default game tunables
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Directory holding plane.txt, tower.txt and eagle.txt sprites
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Seed the item spawner for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write tracing output to this file (the terminal is the game screen)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
