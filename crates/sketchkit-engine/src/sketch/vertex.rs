use crate::coords::{Affine2, Vec2};
use crate::numeric::Numeric;
use crate::shape::EndMode;
use crate::surface::Surface;

use super::Sketch;

impl<S: Surface> Sketch<S> {
    /// Starts collecting vertices. An unfinished shape is discarded.
    pub fn begin_shape(&mut self) {
        if !self.shape.begin() {
            log::warn!("begin_shape() called twice; previous shape discarded");
        }
    }

    /// Straight-segment vertex.
    pub fn vertex(&mut self, x: impl Numeric, y: impl Numeric) {
        self.shape.vertex(Vec2::new(x.to_f64(), y.to_f64()));
    }

    /// Catmull-Rom control point; switches the shape to curve mode.
    pub fn curve_vertex(&mut self, x: impl Numeric, y: impl Numeric) {
        self.shape.curve_vertex(Vec2::new(x.to_f64(), y.to_f64()));
    }

    /// Cubic segment from the previous vertex to `(x, y)`; switches the shape to
    /// Bezier mode. The first vertex must be a plain `vertex`.
    #[allow(clippy::too_many_arguments)]
    pub fn bezier_vertex(
        &mut self,
        cx1: impl Numeric,
        cy1: impl Numeric,
        cx2: impl Numeric,
        cy2: impl Numeric,
        x: impl Numeric,
        y: impl Numeric,
    ) {
        self.shape.bezier_vertex(
            Vec2::new(cx1.to_f64(), cy1.to_f64()),
            Vec2::new(cx2.to_f64(), cy2.to_f64()),
            Vec2::new(x.to_f64(), y.to_f64()),
        );
    }

    /// Starts a hole. Vertices until `end_contour` are cut out of the shape.
    pub fn begin_contour(&mut self) {
        self.shape.begin_contour();
    }

    /// # Panics
    /// Panics without a matching `begin_contour`.
    #[track_caller]
    pub fn end_contour(&mut self) {
        self.shape.end_contour();
    }

    /// Builds the collected outline and draws it as one group.
    ///
    /// Points, contours and the vertex mode are cleared whether or not anything was
    /// drawn.
    pub fn end_shape(&mut self, mode: EndMode) {
        let Some(path) = self.shape.finish(mode) else {
            return;
        };
        self.surface.begin_layer();
        self.draw_path(&path, Affine2::IDENTITY);
        self.surface.end_layer();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sketch;
    use super::*;
    use crate::path::{FillRule, PathCmd};
    use crate::scene::{DrawCmd, DrawList};
    use crate::shape::{CURVE_DETAIL, VertexMode};

    fn fill_path(s: &Sketch<DrawList>) -> crate::path::Path {
        s.surface()
            .commands()
            .find_map(|c| match c {
                DrawCmd::FillPath(f) => Some(f.path.clone()),
                _ => None,
            })
            .expect("a fill was recorded")
    }

    // ── polygon ───────────────────────────────────────────────────────────

    #[test]
    fn four_vertices_closed_make_one_polygon_in_input_order() {
        let mut s = sketch();
        s.begin_shape();
        s.vertex(0, 0);
        s.vertex(10, 0);
        s.vertex(10, 10);
        s.vertex(0, 10);
        s.end_shape(EndMode::Close);

        let kinds: Vec<_> = s.surface().commands().map(DrawCmd::kind).collect();
        assert_eq!(kinds, ["begin-layer", "fill", "stroke", "end-layer"]);

        let path = fill_path(&s);
        assert_eq!(
            path.commands(),
            &[
                PathCmd::MoveTo(Vec2::new(0.0, 0.0)),
                PathCmd::LineTo(Vec2::new(10.0, 0.0)),
                PathCmd::LineTo(Vec2::new(10.0, 10.0)),
                PathCmd::LineTo(Vec2::new(0.0, 10.0)),
                PathCmd::Close,
            ]
        );
        assert_eq!(path.subpath_count(), 1);
    }

    #[test]
    fn empty_shape_emits_nothing() {
        let mut s = sketch();
        s.begin_shape();
        s.end_shape(EndMode::Close);
        assert!(s.surface().is_empty());
    }

    // ── curves ────────────────────────────────────────────────────────────

    #[test]
    fn closed_curve_samples_every_segment() {
        let mut s = sketch();
        s.begin_shape();
        for (x, y) in [(0, 0), (10, 0), (10, 10), (0, 10)] {
            s.curve_vertex(x, y);
        }
        s.end_shape(EndMode::Close);

        let path = fill_path(&s);
        let lines = path.commands().iter().filter(|c| matches!(c, PathCmd::LineTo(_))).count();
        assert_eq!(lines + 1, 4 * CURVE_DETAIL);
        assert!(path.is_closed());
    }

    #[test]
    fn vertex_mode_resets_after_end_shape() {
        let mut s = sketch();
        s.begin_shape();
        s.curve_vertex(0, 0);
        s.end_shape(EndMode::Open);
        assert_eq!(s.shape.mode(), VertexMode::Normal);
        assert!(s.shape.points().is_empty());
    }

    #[test]
    fn bezier_segments_follow_the_first_vertex() {
        let mut s = sketch();
        s.begin_shape();
        s.vertex(0, 0);
        s.bezier_vertex(0, 10, 10, 10, 10, 0);
        s.end_shape(EndMode::Open);

        let path = fill_path(&s);
        assert_eq!(path.commands()[0], PathCmd::MoveTo(Vec2::zero()));
        assert_eq!(
            path.commands()[1],
            PathCmd::CubicTo {
                c1: Vec2::new(0.0, 10.0),
                c2: Vec2::new(10.0, 10.0),
                to: Vec2::new(10.0, 0.0),
            }
        );
    }

    // ── contours ──────────────────────────────────────────────────────────

    #[test]
    fn contour_is_cut_with_even_odd() {
        let mut s = sketch();
        s.begin_shape();
        s.vertex(0, 0);
        s.vertex(30, 0);
        s.vertex(30, 30);
        s.vertex(0, 30);
        s.begin_contour();
        s.vertex(10, 10);
        s.vertex(20, 10);
        s.vertex(20, 20);
        s.end_contour();
        s.end_shape(EndMode::Close);

        let path = fill_path(&s);
        assert_eq!(path.subpath_count(), 2);
        assert_eq!(path.fill_rule(), FillRule::EvenOdd);
    }

    #[test]
    #[should_panic(expected = "end_contour called without matching begin_contour")]
    fn end_contour_without_begin_panics() {
        let mut s = sketch();
        s.begin_shape();
        s.end_contour();
    }
}
