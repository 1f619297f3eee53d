use plane_collector::compute::init_session;
use plane_collector::config::GameConfig;
use plane_collector::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(ItemKind::Reward, ItemKind::Reward);
    assert_ne!(ItemKind::Reward, ItemKind::Hazard);
    assert_eq!(GameState::Menu, GameState::Menu);
    assert_ne!(GameState::Menu, GameState::Playing);

    let kind = TrackKind::EagleRate;
    assert_eq!(kind.clone(), TrackKind::EagleRate);
    assert_eq!(TrackKind::ALL.len(), 4);
}

#[test]
fn session_clone_is_independent() {
    let original = init_session(GameConfig::default());
    let mut cloned = original.clone();

    cloned.player.x = 99.0;
    cloned.progress.currency = 999;
    cloned.items.push(Item {
        x: 5.0,
        y: 5.0,
        kind: ItemKind::Hazard,
        size: 40.0,
    });

    assert_eq!(original.player.x, 360.0);
    assert_eq!(original.progress.currency, 0);
    assert!(original.items.is_empty());
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn contained_rect_overlaps() {
    let player = Rect::new(100.0, 500.0, 80.0, 60.0);
    let inner = Rect::new(120.0, 520.0, 20.0, 20.0);
    assert!(player.overlaps(&inner));
    assert!(inner.overlaps(&player));
}

#[test]
fn disjoint_rects_do_not_overlap() {
    let player = Rect::new(100.0, 500.0, 80.0, 60.0);
    assert!(!player.overlaps(&Rect::new(300.0, 100.0, 40.0, 40.0)));
    // Same vertical band, separate horizontally
    assert!(!player.overlaps(&Rect::new(200.0, 510.0, 40.0, 40.0)));
    // Same horizontal band, separate vertically
    assert!(!player.overlaps(&Rect::new(110.0, 400.0, 40.0, 40.0)));
}

#[test]
fn touching_edges_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    assert!(a.overlaps(&Rect::new(9.0, 9.0, 10.0, 10.0)));
}

#[test]
fn contains_is_half_open() {
    let r = Rect::new(10.0, 10.0, 20.0, 20.0);
    assert!(r.contains(10.0, 10.0));
    assert!(r.contains(29.9, 29.9));
    assert!(!r.contains(30.0, 15.0));
    assert!(!r.contains(15.0, 30.0));
    assert!(!r.contains(9.9, 15.0));
}

#[test]
fn item_and_player_rects() {
    let item = Item {
        x: 12.0,
        y: 34.0,
        kind: ItemKind::Reward,
        size: 40.0,
    };
    assert_eq!(item.rect(), Rect::new(12.0, 34.0, 40.0, 40.0));

    let player = Player {
        x: 1.0,
        y: 2.0,
        width: 80.0,
        height: 60.0,
        speed: 5.0,
    };
    assert_eq!(player.rect(), Rect::new(1.0, 2.0, 80.0, 60.0));
}
