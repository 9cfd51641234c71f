//! Level-to-multiplier stat curves.
//!
//! One generic bounded interpolation drives all four stats; only the
//! configured bonus pair differs per stat.

use grimscale_utils::math::lerp;
use serde::{Deserialize, Serialize};

use crate::config::LevelConfig;

/// The lowest level a position (or an entity at it) can have.
pub const MIN_LEVEL: i32 = 1;

/// The four stats the engine scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    /// Maximum health.
    Health,
    /// Attack damage.
    Attack,
    /// Loot quantity.
    Loot,
    /// Experience yield.
    Xp,
}

impl Stat {
    /// All stats, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Health, Self::Attack, Self::Loot, Self::Xp];
}

/// Multiplier for one stat at `level`.
///
/// The bonus scales linearly from `min_bonus` at level 1 to `max_bonus`
/// at `max_level`, and the result always lands in
/// `1 + [min(min_bonus, max_bonus), max(min_bonus, max_bonus)]` even when
/// the configured pair is inverted. `max_level <= 1` (or a level at or
/// below the minimum) takes the degenerate no-progression branch instead
/// of dividing by zero.
#[must_use]
pub fn multiplier(level: i32, max_level: i32, min_bonus: f32, max_bonus: f32) -> f32 {
    let lo = min_bonus.min(max_bonus);
    let hi = min_bonus.max(max_bonus);

    if max_level <= MIN_LEVEL || level <= MIN_LEVEL {
        return 1.0 + min_bonus.clamp(lo, hi);
    }

    // Progress from 0 at MIN_LEVEL to 1 at max_level, clamped for levels
    // outside that range.
    let progress =
        ((level - MIN_LEVEL) as f32 / (max_level - MIN_LEVEL) as f32).clamp(0.0, 1.0);
    let bonus = lerp(progress, min_bonus, max_bonus).clamp(lo, hi);
    1.0 + bonus
}

/// Multiplier for one stat at `level` under `config`.
#[must_use]
pub fn multiplier_for(level: i32, config: &LevelConfig, stat: Stat) -> f32 {
    let (min_bonus, max_bonus) = config.bonus_range(stat);
    multiplier(level, config.max_level, min_bonus, max_bonus)
}

/// All four multipliers for one level under one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatMultipliers {
    /// Health multiplier.
    pub health: f32,
    /// Attack-damage multiplier.
    pub attack: f32,
    /// Loot-quantity multiplier.
    pub loot: f32,
    /// Experience multiplier.
    pub xp: f32,
}

impl StatMultipliers {
    /// Compute the four multipliers for `level`.
    ///
    /// Levels below [`MIN_LEVEL`] are treated as [`MIN_LEVEL`].
    #[must_use]
    pub fn for_level(level: i32, config: &LevelConfig) -> Self {
        let level = level.max(MIN_LEVEL);
        Self {
            health: multiplier_for(level, config, Stat::Health),
            attack: multiplier_for(level, config, Stat::Attack),
            loot: multiplier_for(level, config, Stat::Loot),
            xp: multiplier_for(level, config, Stat::Xp),
        }
    }

    /// The multiplier for a single stat.
    #[must_use]
    pub const fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Health => self.health,
            Stat::Attack => self.attack,
            Stat::Loot => self.loot,
            Stat::Xp => self.xp,
        }
    }
}
