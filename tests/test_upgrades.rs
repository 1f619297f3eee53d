use plane_collector::compute::init_session;
use plane_collector::config::GameConfig;
use plane_collector::entities::*;
use plane_collector::error::UpgradeError;
use plane_collector::upgrades::*;

fn wallet(currency: u32) -> Progress {
    Progress {
        currency,
        ..Progress::default()
    }
}

// ── apply ─────────────────────────────────────────────────────────────────────

#[test]
fn apply_pays_levels_and_grows_cost() {
    let mut track = UpgradeTrack::new(TrackKind::Speed, 5, 5);
    let mut progress = wallet(12);
    track.apply(&mut progress, 1.5).unwrap();
    assert_eq!(track.level, 1);
    assert_eq!(track.cost, 7); // floor(7.5)
    assert_eq!(progress.currency, 7);
}

#[test]
fn apply_last_level_then_max_reached() {
    let mut track = UpgradeTrack {
        kind: TrackKind::TowerRate,
        level: 4,
        cost: 10,
        max_level: 5,
    };
    let mut progress = wallet(10);
    track.apply(&mut progress, 1.5).unwrap();
    assert_eq!(track.level, 5);
    assert_eq!(track.cost, 15);
    assert_eq!(progress.currency, 0);

    // Max level is reported even with plenty of currency
    progress.currency = 1_000;
    assert_eq!(
        track.apply(&mut progress, 1.5),
        Err(UpgradeError::MaxLevelReached { max_level: 5 })
    );
    assert_eq!(track.level, 5);
    assert_eq!(progress.currency, 1_000);
}

#[test]
fn apply_insufficient_funds_is_noop() {
    let mut track = UpgradeTrack::new(TrackKind::EagleRate, 4, 5);
    let mut progress = wallet(3);
    assert_eq!(
        track.apply(&mut progress, 1.5),
        Err(UpgradeError::InsufficientFunds {
            cost: 4,
            available: 3
        })
    );
    assert_eq!(track.level, 0);
    assert_eq!(track.cost, 4);
    assert_eq!(progress.currency, 3);
}

#[test]
fn cost_is_floored_at_every_step() {
    // 3 → 4 → 6 → 9 → 13 → 19; a single floor(3 * 1.5^5) would give 22.
    let mut track = UpgradeTrack::new(TrackKind::TowerRate, 3, 5);
    let mut progress = wallet(10_000);
    let mut expected = 3u32;
    for _ in 0..5 {
        track.apply(&mut progress, 1.5).unwrap();
        expected = (expected as f64 * 1.5).floor() as u32;
        assert_eq!(track.cost, expected);
    }
    assert_eq!(track.cost, 19);
    assert_eq!(progress.currency, 10_000 - (3 + 4 + 6 + 9 + 13));
}

#[test]
fn level_never_exceeds_max() {
    let mut track = UpgradeTrack::new(TrackKind::Speed, 1, 3);
    let mut progress = wallet(10_000);
    for _ in 0..10 {
        let before = track.level;
        let _ = track.apply(&mut progress, 1.5);
        assert!(track.level >= before);
        assert!(track.level <= track.max_level);
    }
    assert_eq!(track.level, 3);
}

#[test]
fn can_apply_matches_apply_without_mutating() {
    let track = UpgradeTrack::new(TrackKind::CurrencyBoost, 5, 5);
    let poor = wallet(4);
    let rich = wallet(5);
    assert!(track.can_apply(&poor).is_err());
    assert!(track.can_apply(&rich).is_ok());
    assert_eq!(track.level, 0);
    assert_eq!(rich.currency, 5);
}

#[test]
fn grow_cost_never_decreases() {
    assert_eq!(grow_cost(1, 1.5), 1);
    assert_eq!(grow_cost(2, 1.5), 3);
    assert_eq!(grow_cost(10, 1.0), 10);
}

// ── Upgrades aggregate & effects ──────────────────────────────────────────────

#[test]
fn from_config_uses_reference_costs() {
    let ups = Upgrades::from_config(&GameConfig::default().upgrades);
    assert_eq!(ups.track(TrackKind::Speed).cost, 5);
    assert_eq!(ups.track(TrackKind::TowerRate).cost, 3);
    assert_eq!(ups.track(TrackKind::EagleRate).cost, 4);
    assert_eq!(ups.track(TrackKind::CurrencyBoost).cost, 5);
    for kind in TrackKind::ALL {
        assert_eq!(ups.track(kind).level, 0);
        assert_eq!(ups.track(kind).max_level, 5);
        assert_eq!(ups.track(kind).kind, kind);
    }
}

#[test]
fn derived_effects_follow_levels() {
    let s = init_session(GameConfig::default());
    let mut ups = s.upgrades.clone();
    assert_eq!(player_speed(&s.config, &ups), 5.0);
    assert_eq!(currency_per_collect(&s.config, &ups), 1);

    ups.speed.level = 3;
    ups.tower_rate.level = 2;
    ups.eagle_rate.level = 4;
    ups.currency_boost.level = 2;
    assert_eq!(player_speed(&s.config, &ups), 11.0);
    assert!((reward_bonus(&s.config, &ups) - 0.10).abs() < 1e-9);
    assert!((hazard_reduction(&s.config, &ups) - 0.40).abs() < 1e-9);
    assert_eq!(currency_per_collect(&s.config, &ups), 3);
}

#[test]
fn buying_currency_track_raises_per_collect() {
    let s = init_session(GameConfig::default());
    let mut ups = s.upgrades.clone();
    let mut progress = wallet(5);
    ups.buy(TrackKind::CurrencyBoost, &mut progress, &s.config.upgrades)
        .unwrap();
    assert_eq!(currency_per_collect(&s.config, &ups), 2);
    assert_eq!(progress.currency, 0);
}

#[test]
fn describe_reads_out_effects() {
    let s = init_session(GameConfig::default());
    let mut ups = s.upgrades.clone();
    ups.tower_rate.level = 1;
    ups.eagle_rate.level = 2;
    assert_eq!(describe(TrackKind::Speed, &s.config, &ups), "Current Speed: 5");
    assert_eq!(
        describe(TrackKind::TowerRate, &s.config, &ups),
        "Tower Spawn Rate: 25%"
    );
    assert_eq!(
        describe(TrackKind::EagleRate, &s.config, &ups),
        "Eagle Reduction: 20%"
    );
    assert_eq!(
        describe(TrackKind::CurrencyBoost, &s.config, &ups),
        "Currency per Tower: 1"
    );
}
