//! Scalar helpers for sketch code.

use super::Numeric;

pub const PI: f64 = std::f64::consts::PI;
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;
pub const QUARTER_PI: f64 = std::f64::consts::FRAC_PI_4;
pub const TWO_PI: f64 = std::f64::consts::TAU;
pub const TAU: f64 = std::f64::consts::TAU;
pub const E: f64 = std::f64::consts::E;

/// Limits `value` to `[low, high]`.
#[inline]
pub fn constrain(value: impl Numeric, low: impl Numeric, high: impl Numeric) -> f64 {
    value.to_f64().max(low.to_f64()).min(high.to_f64())
}

/// Euclidean distance between two points.
#[inline]
pub fn dist(x1: impl Numeric, y1: impl Numeric, x2: impl Numeric, y2: impl Numeric) -> f64 {
    let dx = x2.to_f64() - x1.to_f64();
    let dy = y2.to_f64() - y1.to_f64();
    dx.hypot(dy)
}

#[inline]
pub fn lerp(start: impl Numeric, stop: impl Numeric, amount: impl Numeric) -> f64 {
    let (a, b) = (start.to_f64(), stop.to_f64());
    a + (b - a) * amount.to_f64()
}

/// Length of the vector `(x, y)`.
#[inline]
pub fn mag(x: impl Numeric, y: impl Numeric) -> f64 {
    x.to_f64().hypot(y.to_f64())
}

/// Re-maps `value` from one range to another.
///
/// With `within_bounds` the result is clamped to the target range, which may be
/// given in either direction.
pub fn map_range(
    value: impl Numeric,
    start1: impl Numeric,
    stop1: impl Numeric,
    start2: impl Numeric,
    stop2: impl Numeric,
    within_bounds: bool,
) -> f64 {
    let (v, s1, e1) = (value.to_f64(), start1.to_f64(), stop1.to_f64());
    let (s2, e2) = (start2.to_f64(), stop2.to_f64());
    let mapped = s2 + (e2 - s2) * ((v - s1) / (e1 - s1));
    if !within_bounds {
        return mapped;
    }
    let (lo, hi) = if s2 <= e2 { (s2, e2) } else { (e2, s2) };
    mapped.max(lo).min(hi)
}

/// Normalizes `value` from `[start, stop]` into `[0, 1]` without clamping.
#[inline]
pub fn norm(value: impl Numeric, start: impl Numeric, stop: impl Numeric) -> f64 {
    map_range(value, start, stop, 0.0, 1.0, false)
}

#[inline]
pub fn sq(value: impl Numeric) -> f64 {
    let v = value.to_f64();
    v * v
}

/// Largest element, or `0.0` for an empty slice.
pub fn max_of<T: Numeric>(values: &[T]) -> f64 {
    values.iter().map(|v| v.to_f64()).reduce(f64::max).unwrap_or(0.0)
}

/// Smallest element, or `0.0` for an empty slice.
pub fn min_of<T: Numeric>(values: &[T]) -> f64 {
    values.iter().map(|v| v.to_f64()).reduce(f64::min).unwrap_or(0.0)
}

#[inline]
pub fn radians(degrees: impl Numeric) -> f64 {
    degrees.to_f64().to_radians()
}

#[inline]
pub fn degrees(radians: impl Numeric) -> f64 {
    radians.to_f64().to_degrees()
}
