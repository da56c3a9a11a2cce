use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Width and height may be negative when built from corners in reverse order;
/// use [`Rect::normalized`] where a canonical form is needed.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle spanning two opposite corners. Size is `b - a`, unnormalized.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self::from_origin_size(a, b - a)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.size.y
    }

    /// True when either extent is zero (in either direction) or not finite.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.size.x == 0.0 || self.size.y == 0.0 || !self.is_finite()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let Vec2 { mut x, mut y } = self.origin;
        let Vec2 { x: mut w, y: mut h } = self.size;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x < max.x && p.y < max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f64, y: f64, w: f64, h: f64) -> Rect { Rect::new(x, y, w, h) }

    // ── from_corners ──────────────────────────────────────────────────────

    #[test]
    fn from_corners_subtracts() {
        let rect = Rect::from_corners(Vec2::new(10.0, 10.0), Vec2::new(60.0, 40.0));
        assert_eq!(rect, r(10.0, 10.0, 50.0, 30.0));
    }

    #[test]
    fn from_corners_reversed_is_negative_until_normalized() {
        let rect = Rect::from_corners(Vec2::new(60.0, 40.0), Vec2::new(10.0, 10.0));
        assert_eq!(rect.size, Vec2::new(-50.0, -30.0));
        assert_eq!(rect.normalized(), r(10.0, 10.0, 50.0, 30.0));
    }

    // ── normalized / center ───────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn center_of_rect() {
        assert_eq!(r(0.0, 0.0, 10.0, 4.0).center(), Vec2::new(5.0, 2.0));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_is_half_open() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(5.0, 5.0)));
        assert!(!rect.contains(Vec2::new(10.0, 10.0)));
    }

    // ── is_degenerate ─────────────────────────────────────────────────────

    #[test]
    fn degenerate_sizes() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_degenerate());
        assert!(r(0.0, 0.0, 5.0, f64::NAN).is_degenerate());
        assert!(!r(0.0, 0.0, -5.0, 5.0).is_degenerate());
    }
}
