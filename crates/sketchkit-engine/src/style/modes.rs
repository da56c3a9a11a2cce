use crate::coords::{Affine2, Rect, Vec2};

/// How the four numbers given to `rect`, `ellipse`, `arc` and `image` are read.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ShapeMode {
    /// `(x, y)` is the top-left corner, `(w, h)` the size.
    #[default]
    Corner,
    /// `(x, y)` and `(w, h)` are opposite corners.
    Corners,
    /// `(x, y)` is the center, `(w, h)` the size.
    Center,
    /// Drawn at half scale, so `(w, h)` act as radii.
    Radius,
}

/// Result of interpreting shape arguments under a [`ShapeMode`].
///
/// `pre` is composed onto the current transform for this one primitive only; the
/// persistent matrix stack is never touched.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub pre: Affine2,
    pub rect: Rect,
}

impl ShapeMode {
    pub fn place(self, x: f64, y: f64, w: f64, h: f64) -> Placement {
        match self {
            ShapeMode::Corner => Placement { pre: Affine2::IDENTITY, rect: Rect::new(x, y, w, h) },
            ShapeMode::Corners => Placement {
                pre: Affine2::IDENTITY,
                rect: Rect::from_corners(Vec2::new(x, y), Vec2::new(w, h)),
            },
            ShapeMode::Center => Placement {
                pre: Affine2::translate(-w / 2.0, -h / 2.0),
                rect: Rect::new(x, y, w, h),
            },
            ShapeMode::Radius => Placement {
                pre: Affine2::scale(0.5, 0.5),
                rect: Rect::new(x, y, w, h),
            },
        }
    }
}

/// Closing behavior of `arc`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ArcMode {
    /// Stroke follows the arc only.
    #[default]
    Open,
    /// Closes with a straight line between the endpoints.
    Chord,
    /// Closes through the center.
    Pie,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum StrokeCap {
    /// Flat end at the endpoint.
    Square,
    /// Flat end extended by half the stroke weight.
    Project,
    #[default]
    Round,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Bevel,
    Round,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextAlignY {
    Top,
    Center,
    #[default]
    Baseline,
    Bottom,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    #[default]
    Normal,
    /// Erases what is underneath; set by `erase()`.
    Clear,
    Add,
    Multiply,
    Screen,
    Overlay,
    Darkest,
    Lightest,
    Difference,
    Exclusion,
    Replace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn(p: Placement) -> Rect {
        let a = p.pre.apply(p.rect.min());
        let b = p.pre.apply(p.rect.max());
        Rect::from_corners(a, b)
    }

    #[test]
    fn corner_is_identity() {
        let p = ShapeMode::Corner.place(10.0, 10.0, 60.0, 40.0);
        assert!(p.pre.is_identity());
        assert_eq!(p.rect, Rect::new(10.0, 10.0, 60.0, 40.0));
    }

    #[test]
    fn corners_subtracts_to_size() {
        let p = ShapeMode::Corners.place(10.0, 10.0, 60.0, 40.0);
        assert_eq!(drawn(p), Rect::new(10.0, 10.0, 50.0, 30.0));
    }

    #[test]
    fn center_shifts_by_half_extent() {
        let p = ShapeMode::Center.place(50.0, 50.0, 20.0, 10.0);
        assert_eq!(drawn(p), Rect::new(40.0, 45.0, 20.0, 10.0));
    }

    #[test]
    fn radius_prescales_by_half() {
        let p = ShapeMode::Radius.place(40.0, 40.0, 20.0, 20.0);
        assert_eq!(drawn(p), Rect::new(20.0, 20.0, 10.0, 10.0));
    }
}
