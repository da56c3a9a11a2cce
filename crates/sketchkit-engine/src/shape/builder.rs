use crate::coords::Vec2;
use crate::path::{FillRule, Path};

use super::spline::{closed_curve, open_curve};

/// How accumulated points are joined. Set by the vertex call used.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum VertexMode {
    /// Straight segments (`vertex`).
    #[default]
    Normal,
    /// Catmull-Rom spline (`curve_vertex`).
    Curve,
    /// Cubic Bezier chain (`bezier_vertex`).
    Bezier,
}

/// Whether `end_shape` closes the outline.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum EndMode {
    #[default]
    Open,
    Close,
}

/// Point accumulator between `begin_shape` and `end_shape`.
#[derive(Debug, Default)]
pub struct ShapeBuilder {
    points: Vec<Vec2>,
    contours: Vec<Vec<Vec2>>,
    open_contour: Option<Vec<Vec2>>,
    mode: VertexMode,
    in_shape: bool,
}

impl ShapeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new shape, discarding anything accumulated so far.
    ///
    /// Returns `false` when a shape was already open (the previous one is lost).
    pub fn begin(&mut self) -> bool {
        let was_open = self.in_shape;
        self.reset();
        self.in_shape = true;
        !was_open
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.in_shape
    }

    #[inline]
    pub fn mode(&self) -> VertexMode {
        self.mode
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Adds a point to the open contour if there is one, else to the outline.
    pub fn vertex(&mut self, p: Vec2) {
        match &mut self.open_contour {
            Some(contour) => contour.push(p),
            None => self.points.push(p),
        }
    }

    pub fn curve_vertex(&mut self, p: Vec2) {
        self.mode = VertexMode::Curve;
        self.vertex(p);
    }

    /// Adds one Bezier segment ending at `to`; the segment starts at the previous point.
    pub fn bezier_vertex(&mut self, c1: Vec2, c2: Vec2, to: Vec2) {
        self.mode = VertexMode::Bezier;
        self.vertex(c1);
        self.vertex(c2);
        self.vertex(to);
    }

    /// Opens a contour. An already open contour is finished first.
    pub fn begin_contour(&mut self) {
        if self.open_contour.is_some() {
            log::warn!("begin_contour: previous contour was not ended; closing it");
            self.end_contour();
        }
        self.open_contour = Some(Vec::new());
    }

    /// Closes the open contour by repeating its first point.
    ///
    /// # Panics
    /// Panics if no contour is open.
    #[track_caller]
    pub fn end_contour(&mut self) {
        let Some(mut contour) = self.open_contour.take() else {
            panic!("end_contour called without matching begin_contour");
        };
        if let Some(&first) = contour.first() {
            contour.push(first);
            self.contours.push(contour);
        }
    }

    /// Builds the outline and resets all state, including the vertex mode.
    ///
    /// Returns `None` when nothing drawable was accumulated.
    pub fn finish(&mut self, end: EndMode) -> Option<Path> {
        if !self.in_shape {
            log::warn!("end_shape called without begin_shape");
        }
        if self.open_contour.is_some() {
            log::warn!("end_shape: contour still open; closing it");
            self.end_contour();
        }

        let path = self.build(end);
        self.reset();
        path
    }

    fn build(&self, end: EndMode) -> Option<Path> {
        if self.points.is_empty() {
            log::debug!("end_shape: no vertices, nothing drawn");
            return None;
        }

        let close = end == EndMode::Close;
        let mut path = Path::new();

        match self.mode {
            VertexMode::Normal => path.add_polyline(&self.points, close),
            VertexMode::Curve => {
                let samples = if close { closed_curve(&self.points) } else { open_curve(&self.points) };
                if samples.is_empty() {
                    log::debug!(
                        "end_shape: open curve needs 4 points, got {}; nothing drawn",
                        self.points.len()
                    );
                    return None;
                }
                path.add_polyline(&samples, close);
            }
            VertexMode::Bezier => {
                let (&start, rest) = self.points.split_first()?;
                path.move_to(start);
                let segments = rest.chunks_exact(3);
                if !segments.remainder().is_empty() {
                    log::debug!(
                        "end_shape: ignoring {} trailing bezier point(s)",
                        segments.remainder().len()
                    );
                }
                for seg in segments {
                    path.cubic_to(seg[0], seg[1], seg[2]);
                }
                if close {
                    path.close();
                }
            }
        }

        if !self.contours.is_empty() {
            for contour in &self.contours {
                path.add_polyline(contour, true);
            }
            path.set_fill_rule(FillRule::EvenOdd);
        }

        Some(path)
    }

    fn reset(&mut self) {
        self.points.clear();
        self.contours.clear();
        self.open_contour = None;
        self.mode = VertexMode::Normal;
        self.in_shape = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCmd;
    use crate::shape::CURVE_DETAIL;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── polygon ───────────────────────────────────────────────────────────

    #[test]
    fn closed_polygon_in_input_order() {
        let mut b = ShapeBuilder::new();
        b.begin();
        for p in [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)] {
            b.vertex(p);
        }
        let path = b.finish(EndMode::Close).unwrap();

        assert_eq!(
            path.commands(),
            &[
                PathCmd::MoveTo(v(0.0, 0.0)),
                PathCmd::LineTo(v(10.0, 0.0)),
                PathCmd::LineTo(v(10.0, 10.0)),
                PathCmd::LineTo(v(0.0, 10.0)),
                PathCmd::Close,
            ]
        );
        assert_eq!(path.fill_rule(), FillRule::NonZero);
    }

    #[test]
    fn open_polygon_has_no_close() {
        let mut b = ShapeBuilder::new();
        b.begin();
        b.vertex(v(0.0, 0.0));
        b.vertex(v(5.0, 5.0));
        assert!(!b.finish(EndMode::Open).unwrap().is_closed());
    }

    #[test]
    fn empty_shape_draws_nothing() {
        let mut b = ShapeBuilder::new();
        b.begin();
        assert!(b.finish(EndMode::Close).is_none());
    }

    // ── state reset ───────────────────────────────────────────────────────

    #[test]
    fn finish_resets_points_and_mode() {
        let mut b = ShapeBuilder::new();
        b.begin();
        b.curve_vertex(v(1.0, 1.0));
        assert_eq!(b.mode(), VertexMode::Curve);
        let _ = b.finish(EndMode::Open);

        assert!(b.points().is_empty());
        assert_eq!(b.mode(), VertexMode::Normal);
        assert!(!b.is_open());
    }

    #[test]
    fn begin_twice_reports_and_discards() {
        let mut b = ShapeBuilder::new();
        assert!(b.begin());
        b.vertex(v(1.0, 1.0));
        assert!(!b.begin());
        assert!(b.points().is_empty());
    }

    // ── curves ────────────────────────────────────────────────────────────

    #[test]
    fn closed_curve_samples_all_segments() {
        let mut b = ShapeBuilder::new();
        b.begin();
        for p in [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)] {
            b.curve_vertex(p);
        }
        let path = b.finish(EndMode::Close).unwrap();
        // move + (4 * detail - 1) lines + close
        assert_eq!(path.commands().len(), 4 * CURVE_DETAIL + 1);
        assert!(path.is_closed());
    }

    #[test]
    fn short_open_curve_draws_nothing() {
        let mut b = ShapeBuilder::new();
        b.begin();
        b.curve_vertex(v(0.0, 0.0));
        b.curve_vertex(v(1.0, 0.0));
        b.curve_vertex(v(2.0, 0.0));
        assert!(b.finish(EndMode::Open).is_none());
    }

    // ── bezier ────────────────────────────────────────────────────────────

    #[test]
    fn bezier_groups_points_in_threes() {
        let mut b = ShapeBuilder::new();
        b.begin();
        b.vertex(v(0.0, 0.0));
        b.bezier_vertex(v(0.0, 10.0), v(10.0, 10.0), v(10.0, 0.0));
        b.bezier_vertex(v(10.0, -10.0), v(20.0, -10.0), v(20.0, 0.0));
        let path = b.finish(EndMode::Open).unwrap();

        assert_eq!(path.commands().len(), 3);
        assert_eq!(
            path.commands()[2],
            PathCmd::CubicTo { c1: v(10.0, -10.0), c2: v(20.0, -10.0), to: v(20.0, 0.0) }
        );
    }

    #[test]
    fn bezier_incomplete_triple_is_ignored() {
        let mut b = ShapeBuilder::new();
        b.begin();
        b.vertex(v(0.0, 0.0));
        b.bezier_vertex(v(0.0, 10.0), v(10.0, 10.0), v(10.0, 0.0));
        b.vertex(v(99.0, 99.0));
        let path = b.finish(EndMode::Open).unwrap();
        assert_eq!(path.commands().len(), 2);
    }

    // ── contours ──────────────────────────────────────────────────────────

    #[test]
    fn contour_becomes_even_odd_subpath() {
        let mut b = ShapeBuilder::new();
        b.begin();
        for p in [v(0.0, 0.0), v(100.0, 0.0), v(100.0, 100.0), v(0.0, 100.0)] {
            b.vertex(p);
        }
        b.begin_contour();
        for p in [v(25.0, 25.0), v(75.0, 25.0), v(75.0, 75.0), v(25.0, 75.0)] {
            b.vertex(p);
        }
        b.end_contour();
        let path = b.finish(EndMode::Close).unwrap();

        assert_eq!(path.subpath_count(), 2);
        assert_eq!(path.fill_rule(), FillRule::EvenOdd);
        // The contour is closed explicitly by repeating its first point.
        let flat = path.flatten(1);
        assert_eq!(flat[1].first(), flat[1].last());
        assert_eq!(flat[1].len(), 5);
    }

    #[test]
    fn contour_points_do_not_leak_into_outline() {
        let mut b = ShapeBuilder::new();
        b.begin();
        b.vertex(v(0.0, 0.0));
        b.begin_contour();
        b.vertex(v(5.0, 5.0));
        b.end_contour();
        assert_eq!(b.points(), &[v(0.0, 0.0)]);
    }

    #[test]
    #[should_panic(expected = "end_contour called without matching begin_contour")]
    fn end_contour_without_begin_panics() {
        let mut b = ShapeBuilder::new();
        b.begin();
        b.end_contour();
    }
}
