//! Level scoring regression tests.
//!
//! Pins the scorer's outputs for a fixed seed and configuration so the
//! noise field, the spawn blend and the offset handling cannot drift.
//! The pinned numbers were recorded at implementation time; changing any
//! of them silently re-levels every existing world.

use std::sync::Arc;
use std::thread;

use grimscale_core::{LevelConfig, LevelScorer, MIN_LEVEL, StatMultipliers};

const SEED: i64 = 12345;
const OVERWORLD: &str = "minecraft:overworld";

/// Base factor at (5000, 0) for seed 12345 under the default config.
const PINNED_BASE_FACTOR: f64 = 0.877_202_787_223_567_9;

#[test]
fn base_factor_is_pinned() {
    let scorer = LevelScorer::new();
    let config = LevelConfig::default();

    let factor = scorer.base_factor(5000.0, 0.0, SEED, &config);
    assert!(
        (factor - PINNED_BASE_FACTOR).abs() < 1e-12,
        "base factor drifted: {factor}"
    );
}

#[test]
fn levels_are_pinned() {
    let scorer = LevelScorer::new();
    let config = LevelConfig::default();

    // (5000, 0) sits outside the default 3500 radius, so the level is the
    // rounded noise potential.
    assert_eq!(scorer.level_at(5000.0, 0.0, OVERWORLD, SEED, &config), 88);
    // The nether offset (+10) lands before rounding.
    assert_eq!(
        scorer.level_at(5000.0, 0.0, "minecraft:the_nether", SEED, &config),
        98
    );
    // The origin is forced to exactly 1 by the spawn blend.
    assert_eq!(scorer.level_at(0.0, 0.0, OVERWORLD, SEED, &config), 1);
    // Offsets still apply on top of the forced origin level: 1 + 20.
    assert_eq!(
        scorer.level_at(0.0, 0.0, "minecraft:the_end", SEED, &config),
        21
    );
    // Halfway into the radius the blend pulls the potential toward 1.
    assert_eq!(scorer.level_at(1750.0, 0.0, OVERWORLD, SEED, &config), 29);
}

#[test]
fn origin_is_level_one_for_any_seed() {
    let scorer = LevelScorer::new();
    let config = LevelConfig::default();

    for seed in [0, 1, -1, SEED, 987_654_321, i64::MIN] {
        assert_eq!(
            scorer.level_at(0.0, 0.0, OVERWORLD, seed, &config),
            1,
            "origin level must not depend on the noise value (seed {seed})"
        );
    }
}

#[test]
fn outside_radius_matches_closed_form() {
    let scorer = LevelScorer::new();
    let config = LevelConfig::default();

    for (x, z) in [(3500.0, 0.0), (5000.0, 0.0), (-40_000.0, 25_000.0), (1e6, -1e6)] {
        let expected = (scorer.base_factor(x, z, SEED, &config) * f64::from(config.max_level))
            .round() as i32;
        assert_eq!(
            scorer.level_at(x, z, OVERWORLD, SEED, &config),
            expected.max(MIN_LEVEL),
            "closed form broke at ({x}, {z})"
        );
    }
}

#[test]
fn level_never_drops_below_one() {
    let scorer = LevelScorer::new();
    // A crushing negative offset cannot push a level below 1.
    let mut config = LevelConfig::default();
    config
        .dimension_level_offsets
        .insert("abyss:below".to_owned(), -1_000_000);

    for i in 0..60 {
        let x = f64::from(i) * 7_777.0 - 200_000.0;
        let z = f64::from(i * i) * 13.0;
        assert!(scorer.level_at(x, z, "abyss:below", SEED, &config) >= MIN_LEVEL);
        assert!(scorer.level_at(x, z, OVERWORLD, SEED, &config) >= MIN_LEVEL);
    }
}

#[test]
fn repeated_queries_are_bit_identical() {
    let scorer = LevelScorer::new();
    let config = LevelConfig::default();

    let first = scorer.base_factor(9_321.5, -4_480.25, SEED, &config);
    let second = scorer.base_factor(9_321.5, -4_480.25, SEED, &config);
    assert_eq!(
        first.to_bits(),
        second.to_bits(),
        "base factor must be reproducible bit-for-bit"
    );

    assert_eq!(
        scorer.level_at(9_321.5, -4_480.25, OVERWORLD, SEED, &config),
        scorer.level_at(9_321.5, -4_480.25, OVERWORLD, SEED, &config)
    );
}

#[test]
fn independent_scorers_agree() {
    // A display-side process recomputing levels with its own cache must
    // land on the server's numbers.
    let server = LevelScorer::new();
    let display = LevelScorer::new();
    let config = LevelConfig::default();

    for i in 0..25 {
        let x = f64::from(i) * 1_311.0 - 9_000.0;
        let z = f64::from(i) * 733.0 + 100.0;
        assert_eq!(
            server.level_at(x, z, OVERWORLD, SEED, &config),
            display.level_at(x, z, OVERWORLD, SEED, &config)
        );
    }
}

#[test]
fn concurrent_first_use_builds_one_consistent_table() {
    let scorer = Arc::new(LevelScorer::new());
    let config = LevelConfig::default();

    let serial: Vec<i32> = (0..16)
        .map(|i| {
            LevelScorer::new().level_at(f64::from(i) * 4_001.0, 500.0, OVERWORLD, SEED, &config)
        })
        .collect();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let scorer = Arc::clone(&scorer);
            let config = config.clone();
            thread::spawn(move || {
                scorer.level_at(f64::from(i) * 4_001.0, 500.0, OVERWORLD, SEED, &config)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let level = handle.join().expect("scoring thread panicked");
        assert_eq!(level, serial[i], "thread {i} disagreed with serial scoring");
    }
}

#[test]
fn fallback_seeds_are_pinned() {
    assert_eq!(LevelScorer::fallback_seed(OVERWORLD), 1_104_210_353);
    assert_eq!(
        LevelScorer::fallback_seed("minecraft:the_nether"),
        -1_526_768_685
    );
    assert_eq!(LevelScorer::fallback_seed("minecraft:the_end"), 1_731_133_248);
}

#[test]
fn score_combines_level_and_stats() {
    let scorer = LevelScorer::new();
    let config = LevelConfig::default();

    let score = scorer.score(5000.0, 0.0, OVERWORLD, SEED, &config);
    assert_eq!(score.level, 88);
    assert_eq!(score.stats, StatMultipliers::for_level(88, &config));
}
