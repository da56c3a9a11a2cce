use crate::coords::Vec2;

/// Samples generated per spline segment.
pub const CURVE_DETAIL: usize = 20;

/// Catmull-Rom interpolation between `p1` and `p2` at `u` in `[0, 1]`.
#[inline]
pub fn catmull_rom(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, u: f64) -> Vec2 {
    let u2 = u * u;
    let u3 = u2 * u;
    let q1 = -u3 + 2.0 * u2 - u;
    let q2 = 3.0 * u3 - 5.0 * u2 + 2.0;
    let q3 = -3.0 * u3 + 4.0 * u2 + u;
    let q4 = u3 - u2;
    (p0 * q1 + p1 * q2 + p2 * q3 + p3 * q4) * 0.5
}

/// Closed loop through every point. Indices wrap modulo the point count, so the
/// segment leaving point `i` is shaped by points `i - 1` and `i + 2`.
///
/// Returns `points.len() * CURVE_DETAIL` samples, starting exactly at `points[0]`.
pub fn closed_curve(points: &[Vec2]) -> Vec<Vec2> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n * CURVE_DETAIL);
    for i in 0..n * CURVE_DETAIL {
        let seg = i / CURVE_DETAIL;
        let u = (i % CURVE_DETAIL) as f64 / CURVE_DETAIL as f64;
        let p0 = points[(seg + n - 1) % n];
        let p1 = points[seg % n];
        let p2 = points[(seg + 1) % n];
        let p3 = points[(seg + 2) % n];
        out.push(catmull_rom(p0, p1, p2, p3, u));
    }
    out
}

/// Open curve from the second point to the second-to-last one; the first and last
/// points only steer the ends. Needs at least four points, otherwise empty.
pub fn open_curve(points: &[Vec2]) -> Vec<Vec2> {
    let n = points.len();
    if n < 4 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity((n - 3) * CURVE_DETAIL + 1);
    for seg in 1..n - 2 {
        for k in 0..CURVE_DETAIL {
            let u = k as f64 / CURVE_DETAIL as f64;
            out.push(catmull_rom(points[seg - 1], points[seg], points[seg + 1], points[seg + 2], u));
        }
    }
    out.push(points[n - 2]);
    out
}
