//! Tunable bounds consumed by the scorer.
//!
//! [`LevelConfig`] is an immutable snapshot passed into every call; the
//! engine deliberately has no process-wide configuration singleton. Field
//! names serialize in camelCase, matching the JSON configuration files the
//! surrounding application manages.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scaling::Stat;

/// An error from [`LevelConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `maxLevel` must be at least 1.
    #[error("maxLevel must be at least 1, got {0}")]
    MaxLevelTooLow(i32),
    /// `noiseScale` must be positive and finite.
    #[error("noiseScale must be positive and finite, got {0}")]
    InvalidNoiseScale(f64),
    /// `minNoiseLevelPercentage` must lie within `[0, 1]`.
    #[error("minNoiseLevelPercentage must be within [0, 1], got {0}")]
    InvalidMinNoisePercentage(f64),
    /// `spawnInfluenceRadius` must be finite.
    #[error("spawnInfluenceRadius must be finite, got {0}")]
    InvalidSpawnRadius(f64),
    /// A stat's bonus bounds contain a NaN or infinity.
    #[error("{stat:?} bonus bounds must be finite, got ({min}, {max})")]
    NonFiniteBonus {
        /// The stat whose bounds are broken.
        stat: Stat,
        /// Configured minimum bonus.
        min: f32,
        /// Configured maximum bonus.
        max: f32,
    },
}

/// Snapshot of the difficulty tunables.
///
/// Bonuses are signed additive fractions over a baseline of 1.0: a bonus
/// of `-0.75` means a 0.25x multiplier, `10.0` means 11x. An inverted
/// pair (`min > max`) is tolerated - the curves clamp against the sorted
/// bounds - so a half-edited config degrades instead of faulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelConfig {
    /// Highest level the noise field can produce before offsets.
    pub max_level: i32,
    /// Divisor controlling the spatial frequency of the noise field;
    /// larger values make larger, smoother difficulty regions.
    pub noise_scale: f64,
    /// Floor of the noise-derived base factor, in `[0, 1]`.
    pub min_noise_level_percentage: f64,
    /// Distance from the origin within which levels are pulled linearly
    /// toward 1. Zero or negative disables the pull.
    pub spawn_influence_radius: f64,
    /// Flat per-dimension level offsets, keyed by dimension id. Missing
    /// dimensions default to 0.
    pub dimension_level_offsets: FxHashMap<String, i32>,
    /// Health bonus at level 1.
    pub min_total_health_bonus: f32,
    /// Health bonus at `max_level`.
    pub max_total_health_bonus: f32,
    /// Attack bonus at level 1.
    pub min_total_attack_bonus: f32,
    /// Attack bonus at `max_level`.
    pub max_total_attack_bonus: f32,
    /// Loot bonus at level 1.
    pub min_total_loot_bonus: f32,
    /// Loot bonus at `max_level`.
    pub max_total_loot_bonus: f32,
    /// Experience bonus at level 1.
    pub min_total_xp_bonus: f32,
    /// Experience bonus at `max_level`.
    pub max_total_xp_bonus: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        let mut dimension_level_offsets = FxHashMap::default();
        dimension_level_offsets.insert("minecraft:the_nether".to_owned(), 10);
        dimension_level_offsets.insert("minecraft:the_end".to_owned(), 20);

        Self {
            max_level: 100,
            noise_scale: 2048.0,
            min_noise_level_percentage: 0.25,
            spawn_influence_radius: 3500.0,
            dimension_level_offsets,
            min_total_health_bonus: -0.75,
            max_total_health_bonus: 10.0,
            min_total_attack_bonus: -0.75,
            max_total_attack_bonus: 5.0,
            min_total_loot_bonus: -0.2,
            max_total_loot_bonus: 4.0,
            min_total_xp_bonus: -0.2,
            max_total_xp_bonus: 12.0,
        }
    }
}

impl LevelConfig {
    /// Check the hard invariants.
    ///
    /// Inverted bonus pairs are not an error (the curves handle them) but
    /// are logged, since they usually mean a mistyped config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level < 1 {
            return Err(ConfigError::MaxLevelTooLow(self.max_level));
        }
        if !self.noise_scale.is_finite() || self.noise_scale <= 0.0 {
            return Err(ConfigError::InvalidNoiseScale(self.noise_scale));
        }
        if !self.min_noise_level_percentage.is_finite()
            || !(0.0..=1.0).contains(&self.min_noise_level_percentage)
        {
            return Err(ConfigError::InvalidMinNoisePercentage(
                self.min_noise_level_percentage,
            ));
        }
        if !self.spawn_influence_radius.is_finite() {
            return Err(ConfigError::InvalidSpawnRadius(self.spawn_influence_radius));
        }
        for stat in Stat::ALL {
            let (min, max) = self.bonus_range(stat);
            if !min.is_finite() || !max.is_finite() {
                return Err(ConfigError::NonFiniteBonus { stat, min, max });
            }
            if min > max {
                tracing::warn!(?stat, min, max, "bonus bounds inverted, clamping to sorted pair");
            }
        }
        Ok(())
    }

    /// Configured `(min, max)` bonus pair for `stat`.
    #[must_use]
    pub fn bonus_range(&self, stat: Stat) -> (f32, f32) {
        match stat {
            Stat::Health => (self.min_total_health_bonus, self.max_total_health_bonus),
            Stat::Attack => (self.min_total_attack_bonus, self.max_total_attack_bonus),
            Stat::Loot => (self.min_total_loot_bonus, self.max_total_loot_bonus),
            Stat::Xp => (self.min_total_xp_bonus, self.max_total_xp_bonus),
        }
    }

    /// Level offset for a dimension, 0 when unconfigured.
    #[must_use]
    pub fn dimension_offset(&self, dimension_id: &str) -> i32 {
        self.dimension_level_offsets
            .get(dimension_id)
            .copied()
            .unwrap_or(0)
    }
}
