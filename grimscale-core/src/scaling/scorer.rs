//! Position-to-level scoring.
//!
//! Combines the OpenSimplex field with a distance-from-origin blend and
//! per-dimension offsets to assign an integer difficulty level to any
//! world position. Every operation is a pure function of its arguments;
//! the only state is the per-seed permutation-table cache, so the same
//! query always returns the same level no matter who asks or when.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use grimscale_utils::math::lerp;
use grimscale_utils::noise::{OpenSimplexNoise, PermutationTable};

use crate::config::LevelConfig;
use crate::scaling::stats::{MIN_LEVEL, StatMultipliers};

/// A computed level together with its derived stat multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelScore {
    /// Integer difficulty level, always at least 1.
    pub level: i32,
    /// The four stat multipliers at that level.
    pub stats: StatMultipliers,
}

/// Deterministic spatial difficulty scorer.
///
/// Derives and caches one [`PermutationTable`] per distinct seed, then
/// evaluates levels as closed-form arithmetic over the call arguments.
/// One instance can serve any number of threads: scoring takes the cache
/// read lock only, and the write lock is held just for the first
/// observation of a seed.
#[derive(Debug, Default)]
pub struct LevelScorer {
    tables: RwLock<FxHashMap<i64, Arc<PermutationTable>>>,
}

impl LevelScorer {
    /// Create a scorer with an empty table cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached table for `seed`, deriving it on first use.
    ///
    /// Derivation happens under the write lock, so concurrent first use
    /// of a seed builds the table exactly once and no caller can observe
    /// it half-built.
    fn table(&self, seed: i64) -> Arc<PermutationTable> {
        if let Some(table) = self.tables.read().get(&seed) {
            return Arc::clone(table);
        }

        let mut tables = self.tables.write();
        Arc::clone(tables.entry(seed).or_insert_with(|| {
            tracing::debug!(seed, "deriving permutation table");
            Arc::new(PermutationTable::from_seed(seed))
        }))
    }

    /// Noise-driven base factor at `(x, z)`, within
    /// `[config.min_noise_level_percentage, 1.0]`.
    #[must_use]
    pub fn base_factor(&self, x: f64, z: f64, seed: i64, config: &LevelConfig) -> f64 {
        let sampler = OpenSimplexNoise::new(self.table(seed));
        let noise = sampler.sample(x / config.noise_scale, z / config.noise_scale);

        // Normalize from roughly [-1, 1] into [0, 1], then lift the low
        // end to the configured floor.
        let normalized = (noise + 1.0) / 2.0;
        normalized * (1.0 - config.min_noise_level_percentage) + config.min_noise_level_percentage
    }

    /// Integer level at `(x, z)` in the given dimension.
    ///
    /// Distance is measured from the world origin `(0, 0)`, not from any
    /// configured spawn point. Inside `spawn_influence_radius` the level
    /// is pulled linearly toward 1 - exactly 1 at the origin, the full
    /// noise potential at the radius edge. The comparison is strict, so a
    /// zero or negative radius disables the pull rather than dividing by
    /// zero. Rounds half away from zero; never returns below 1. Callers
    /// are responsible for finite coordinates - NaN in means a garbage
    /// (but still >= 1) level out.
    #[must_use]
    pub fn level_at(
        &self,
        x: f64,
        z: f64,
        dimension_id: &str,
        seed: i64,
        config: &LevelConfig,
    ) -> i32 {
        let potential = self.base_factor(x, z, seed, config) * f64::from(config.max_level);
        let distance = (x * x + z * z).sqrt();

        let mut level = if distance < config.spawn_influence_radius {
            lerp(distance / config.spawn_influence_radius, 1.0, potential)
        } else {
            potential
        };

        level += f64::from(config.dimension_offset(dimension_id));

        (level.round() as i32).max(MIN_LEVEL)
    }

    /// The level at `(x, z)` plus all four stat multipliers, in one call.
    #[must_use]
    pub fn score(
        &self,
        x: f64,
        z: f64,
        dimension_id: &str,
        seed: i64,
        config: &LevelConfig,
    ) -> LevelScore {
        let level = self.level_at(x, z, dimension_id, seed, config);
        LevelScore {
            level,
            stats: StatMultipliers::for_level(level, config),
        }
    }

    /// Deterministic stand-in seed for callers that only know the
    /// dimension id (for example, display-side prediction on a client
    /// that never receives the authoritative world seed).
    ///
    /// Hashes the id's UTF-16 code units as `h = 31 * h + unit` over a
    /// wrapping 32-bit accumulator, then widens. Both halves of a
    /// client/server pair agree on the result for any id, on any
    /// platform.
    #[must_use]
    pub fn fallback_seed(dimension_id: &str) -> i64 {
        let mut hash: i32 = 0;
        for unit in dimension_id.encode_utf16() {
            hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
        }
        i64::from(hash)
    }
}
