//! Math helpers shared by the noise and scoring code.

use num_traits::Float;

/// Floor a double to an `i32`, rounding toward negative infinity.
///
/// A plain `as` cast truncates toward zero, which is off by one for
/// negative non-integer inputs; correct for that after the cast.
#[inline]
#[must_use]
pub const fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < truncated as f64 {
        truncated - 1
    } else {
        truncated
    }
}

/// Linear interpolation: `start + delta * (end - start)`.
///
/// `delta` is not clamped; callers clamp when they need a bounded result.
#[inline]
#[must_use]
pub fn lerp<T: Float>(delta: T, start: T, end: T) -> T {
    start + delta * (end - start)
}
