//! Noise generation primitives for spatial difficulty scoring.
//!
//! - [`PermutationTable`] - seed-derived bijection on `[0, 255]` used to
//!   hash lattice coordinates into gradient indices
//! - [`OpenSimplexNoise`] - 2D gradient noise on a triangular lattice
//!
//! Everything here is deterministic in the seed: fixed-width wrapping
//! integer arithmetic and IEEE doubles only, so the same inputs produce
//! the same bits on every platform.

mod open_simplex;
mod permutation;

pub use open_simplex::OpenSimplexNoise;
pub use permutation::PermutationTable;

/// The eight 2D gradient vectors, selected cyclically by hashing.
///
/// Laid out as `(dx, dy)` pairs; a hashed table value masked to an even
/// index picks one pair.
pub(crate) const GRADIENTS_2D: [[i32; 2]; 8] = [
    [5, 2],
    [2, 5],
    [-5, 2],
    [-2, 5],
    [5, -2],
    [2, -5],
    [-5, -2],
    [-2, -5],
];
