use std::fs;

use plane_collector::assets::*;
use plane_collector::error::AssetError;

#[test]
fn load_sprite_trims_blank_edges() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tower.txt");
    fs::write(&path, "\n|^^|  \n|##|\n\n").unwrap();

    let sprite = load_sprite(&path).unwrap();
    assert_eq!(sprite.rows, vec!["|^^|".to_string(), "|##|".to_string()]);
    assert_eq!(sprite.width(), 4);
    assert_eq!(sprite.height(), 2);
}

#[test]
fn empty_sprite_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eagle.txt");
    fs::write(&path, "\n   \n").unwrap();
    assert!(matches!(load_sprite(&path), Err(AssetError::Empty { .. })));
}

#[test]
fn missing_sprite_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_sprite(&dir.path().join("plane.txt")),
        Err(AssetError::Io { .. })
    ));
}

#[test]
fn missing_directory_degrades_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    let sprites = Sprites::load(&dir.path().join("missing"));
    assert_eq!(sprites, Sprites::default());
    assert!(sprites.is_degraded());
}

#[test]
fn partial_directory_keeps_what_loads() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(PLANE_FILE), "=<|##|>=\n").unwrap();

    let sprites = Sprites::load(dir.path());
    assert!(sprites.plane.is_some());
    assert!(sprites.tower.is_none());
    assert!(sprites.eagle.is_none());
    assert!(sprites.is_degraded());
}

#[test]
fn bundled_assets_load() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    let sprites = Sprites::load(&dir);
    assert!(!sprites.is_degraded());
}
