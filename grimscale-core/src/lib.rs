//! Deterministic spatial difficulty scoring.
//!
//! Given a world seed, a 2D position, a dimension identifier and a
//! [`LevelConfig`], this crate produces an integer difficulty level and
//! four derived stat multipliers (health, attack, loot, experience).
//! Identical inputs yield bit-identical results whether computed by a
//! server process or recomputed independently for display, so levels
//! never need to be synchronized - both sides just evaluate the same
//! function.
//!
//! Data flows one way:
//!
//! ```text
//! seed -> PermutationTable -> OpenSimplexNoise -> LevelScorer -> level -> StatMultipliers
//! ```
//!
//! The crate performs no I/O and holds no global state; the only mutable
//! state anywhere is the per-seed permutation-table cache inside
//! [`LevelScorer`], which is safe to share across threads.

pub mod config;
pub mod scaling;

pub use config::{ConfigError, LevelConfig};
pub use scaling::{LevelScore, LevelScorer, MIN_LEVEL, Stat, StatMultipliers};
