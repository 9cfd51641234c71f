//! Difficulty scaling.
//!
//! This module turns positions into levels and levels into stat
//! multipliers:
//!
//! - [`LevelScorer`] - noise-driven level computation with a per-seed
//!   permutation-table cache
//! - [`StatMultipliers`] / [`multiplier`] - bounded interpolation from a
//!   level to the four stat multipliers

mod scorer;
mod stats;

pub use scorer::{LevelScore, LevelScorer};
pub use stats::{MIN_LEVEL, Stat, StatMultipliers, multiplier, multiplier_for};
