//! 2D OpenSimplex noise, after Kurt Spencer's public-domain algorithm.
//!
//! Samples a gradient field on a triangular lattice. Unlike classic
//! Perlin noise there is no directional artifact along the axes, which
//! matters here because the output drives region shapes players see on a
//! map.

use std::sync::Arc;

use crate::math::floor;
use crate::noise::{GRADIENTS_2D, PermutationTable};

/// Stretch factor for the 2D lattice skew: `(1/sqrt(3) - 1) / 2`.
///
/// Kept as the truncated literal rather than a const expression: the
/// recomputed value differs by a few ulps, and every recorded sample
/// depends on this exact bit pattern.
const STRETCH_2D: f64 = -0.211_324_865_405_187;
/// Squish factor for the 2D lattice unskew: `(sqrt(3) - 1) / 2`.
const SQUISH_2D: f64 = 0.366_025_403_784_439;
/// Normalization divisor bringing the summed contributions to roughly `[-1, 1]`.
const NORM_2D: f64 = 47.0;
/// Squared kernel radius in the attenuation term `(R^2 - d^2)^4`.
const R_SQUARED: f64 = 2.0;

/// 2D gradient-noise sampler over a shared permutation table.
///
/// Sampling never mutates, so one instance (or clones of it, which share
/// the table) may be used from any number of threads without
/// synchronization. Identical `(seed, x, y)` always produces bit-identical
/// doubles. Output is empirically bounded to about `[-1.23, 1.23]`; that
/// bound is verified by sampling, not proven.
#[derive(Debug, Clone)]
pub struct OpenSimplexNoise {
    table: Arc<PermutationTable>,
}

impl OpenSimplexNoise {
    /// Create a sampler over an existing (typically cached) table.
    #[must_use]
    pub const fn new(table: Arc<PermutationTable>) -> Self {
        Self { table }
    }

    /// Derive a fresh table for `seed` and wrap it in a sampler.
    #[must_use]
    pub fn from_seed(seed: i64) -> Self {
        Self::new(Arc::new(PermutationTable::from_seed(seed)))
    }

    /// Dot product of the hashed gradient at lattice vertex `(xsv, ysv)`
    /// with the offset `(dx, dy)` of the sample point from that vertex.
    #[inline]
    fn extrapolate(&self, xsv: i32, ysv: i32, dx: f64, dy: f64) -> f64 {
        let hash = self.table.get(self.table.get(xsv) + ysv);
        let grad = GRADIENTS_2D[((hash & 0x0E) >> 1) as usize];
        f64::from(grad[0]) * dx + f64::from(grad[1]) * dy
    }

    /// Attenuated contribution of one lattice vertex: `attn^4 * (g . d)`,
    /// zero once the vertex is outside the kernel radius.
    #[inline]
    fn corner(&self, xsv: i32, ysv: i32, dx: f64, dy: f64) -> f64 {
        let mut attn = R_SQUARED - dx * dx - dy * dy;
        if attn > 0.0 {
            attn *= attn;
            attn * attn * self.extrapolate(xsv, ysv, dx, dy)
        } else {
            0.0
        }
    }

    /// Sample the noise field at `(x, y)`.
    #[must_use]
    #[allow(clippy::similar_names, reason = "lattice-offset naming scheme")]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew the input point onto the triangular lattice.
        let stretch_offset = (x + y) * STRETCH_2D;
        let xs = x + stretch_offset;
        let ys = y + stretch_offset;

        // Base rhombus cell, and the point's position inside it.
        let mut xsb = floor(xs);
        let mut ysb = floor(ys);
        let squish_offset = f64::from(xsb + ysb) * SQUISH_2D;
        let xb = f64::from(xsb) + squish_offset;
        let yb = f64::from(ysb) + squish_offset;
        let xins = xs - f64::from(xsb);
        let yins = ys - f64::from(ysb);
        let in_sum = xins + yins;

        let mut dx0 = x - xb;
        let mut dy0 = y - yb;

        let mut value = 0.0;

        // The two axis neighbors (1,0) and (0,1) contribute in every case.
        let dx1 = dx0 - 1.0 - SQUISH_2D;
        let dy1 = dy0 - SQUISH_2D;
        value += self.corner(xsb + 1, ysb, dx1, dy1);

        let dx2 = dx0 - SQUISH_2D;
        let dy2 = dy0 - 1.0 - SQUISH_2D;
        value += self.corner(xsb, ysb + 1, dx2, dy2);

        // Which sub-triangle of the unit rhombus holds the point decides
        // the remaining two vertices. Six mutually exclusive cases; this
        // selection is lattice geometry, and changing which vertices
        // contribute changes the field's shape across cell borders.
        let xsv_ext: i32;
        let ysv_ext: i32;
        let dx_ext: f64;
        let dy_ext: f64;

        if in_sum <= 1.0 {
            // Inside the triangle whose right angle sits at (0,0).
            let zins = 1.0 - in_sum;
            if zins > xins || zins > yins {
                // (0,0) is one of the two closest vertices.
                if xins > yins {
                    xsv_ext = xsb + 1;
                    ysv_ext = ysb - 1;
                    dx_ext = dx0 - 1.0;
                    dy_ext = dy0 + 1.0;
                } else {
                    xsv_ext = xsb - 1;
                    ysv_ext = ysb + 1;
                    dx_ext = dx0 + 1.0;
                    dy_ext = dy0 - 1.0;
                }
            } else {
                // (1,0) and (0,1) are the two closest; the extra vertex
                // is the far corner (1,1).
                xsv_ext = xsb + 1;
                ysv_ext = ysb + 1;
                dx_ext = dx0 - 1.0 - 2.0 * SQUISH_2D;
                dy_ext = dy0 - 1.0 - 2.0 * SQUISH_2D;
            }
        } else {
            // Inside the triangle whose right angle sits at (1,1).
            let zins = 2.0 - in_sum;
            if zins < xins || zins < yins {
                // (1,1) is one of the two closest vertices.
                if xins > yins {
                    xsv_ext = xsb + 2;
                    ysv_ext = ysb;
                    dx_ext = dx0 - 2.0 - 2.0 * SQUISH_2D;
                    dy_ext = dy0 - 2.0 * SQUISH_2D;
                } else {
                    xsv_ext = xsb;
                    ysv_ext = ysb + 2;
                    dx_ext = dx0 - 2.0 * SQUISH_2D;
                    dy_ext = dy0 - 2.0 - 2.0 * SQUISH_2D;
                }
            } else {
                // (1,0) and (0,1) are the two closest; the extra vertex
                // is the near corner (0,0).
                xsv_ext = xsb;
                ysv_ext = ysb;
                dx_ext = dx0;
                dy_ext = dy0;
            }
            // Rebase the "own corner" contribution onto (1,1).
            xsb += 1;
            ysb += 1;
            dx0 = dx0 - 1.0 - 2.0 * SQUISH_2D;
            dy0 = dy0 - 1.0 - 2.0 * SQUISH_2D;
        }

        // The cell's own corner (or its diagonal opposite after rebasing).
        value += self.corner(xsb, ysb, dx0, dy0);
        // The extra extrapolated vertex for this sub-triangle.
        value += self.corner(xsv_ext, ysv_ext, dx_ext, dy_ext);

        value / NORM_2D
    }
}
