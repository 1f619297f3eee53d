//! Text sprites for the plane, towers and eagles.
//!
//! Sprites are plain text files, one row per line.  A missing or empty file
//! is not fatal: the sprite is left out and the renderer draws a filled
//! block in its place.

use std::path::Path;

use tracing::{info, warn};

use crate::error::AssetError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub rows: Vec<String>,
}

impl Sprite {
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sprites {
    pub plane: Option<Sprite>,
    pub tower: Option<Sprite>,
    pub eagle: Option<Sprite>,
}

pub const PLANE_FILE: &str = "plane.txt";
pub const TOWER_FILE: &str = "tower.txt";
pub const EAGLE_FILE: &str = "eagle.txt";

pub fn load_sprite(path: &Path) -> Result<Sprite, AssetError> {
    let text = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    while rows.first().is_some_and(|r| r.is_empty()) {
        rows.remove(0);
    }

    if rows.is_empty() {
        return Err(AssetError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(Sprite { rows })
}

impl Sprites {
    /// Load every sprite from `dir`, falling back per sprite on failure.
    pub fn load(dir: &Path) -> Self {
        let sprites = Self {
            plane: load_or_fallback(dir, PLANE_FILE),
            tower: load_or_fallback(dir, TOWER_FILE),
            eagle: load_or_fallback(dir, EAGLE_FILE),
        };
        if sprites.is_degraded() {
            warn!(dir = %dir.display(), "using default shapes for missing sprites");
        }
        sprites
    }

    pub fn is_degraded(&self) -> bool {
        self.plane.is_none() || self.tower.is_none() || self.eagle.is_none()
    }
}

fn load_or_fallback(dir: &Path, file: &str) -> Option<Sprite> {
    match load_sprite(&dir.join(file)) {
        Ok(sprite) => {
            info!(file, width = sprite.width(), height = sprite.height(), "sprite loaded");
            Some(sprite)
        }
        Err(err) => {
            warn!(%err, "sprite unavailable");
            None
        }
    }
}
