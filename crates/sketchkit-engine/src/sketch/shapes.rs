use crate::coords::{Affine2, Rect, Vec2};
use crate::numeric::Numeric;
use crate::path::{FillRule, Path};
use crate::style::{ArcMode, Placement};
use crate::surface::{LineCap, Surface};

use super::Sketch;

impl<S: Surface> Sketch<S> {
    /// Rectangle read under the current `rect_mode`.
    pub fn rect(&mut self, x: impl Numeric, y: impl Numeric, w: impl Numeric, h: impl Numeric) {
        let placed = self.settings.rect_mode.place(x.to_f64(), y.to_f64(), w.to_f64(), h.to_f64());
        if degenerate("rect", placed) {
            return;
        }
        self.draw_path(&Path::rect(placed.rect), placed.pre);
    }

    pub fn square(&mut self, x: impl Numeric, y: impl Numeric, size: impl Numeric) {
        let size = size.to_f64();
        self.rect(x, y, size, size);
    }

    /// Ellipse read under the current `ellipse_mode`.
    pub fn ellipse(&mut self, x: impl Numeric, y: impl Numeric, w: impl Numeric, h: impl Numeric) {
        let placed = self.settings.ellipse_mode.place(x.to_f64(), y.to_f64(), w.to_f64(), h.to_f64());
        if degenerate("ellipse", placed) {
            return;
        }
        self.draw_path(&Path::ellipse(placed.rect), placed.pre);
    }

    pub fn circle(&mut self, x: impl Numeric, y: impl Numeric, diameter: impl Numeric) {
        let d = diameter.to_f64();
        self.ellipse(x, y, d, d);
    }

    /// Pie-slice arc of the ellipse `(x, y, w, h)` from `start` to `stop` radians.
    pub fn arc(
        &mut self,
        x: impl Numeric,
        y: impl Numeric,
        w: impl Numeric,
        h: impl Numeric,
        start: impl Numeric,
        stop: impl Numeric,
    ) {
        self.arc_with_mode(x, y, w, h, start, stop, ArcMode::Pie);
    }

    /// Arc of the ellipse `(x, y, w, h)`, read under `ellipse_mode`.
    ///
    /// - `Pie` closes through the center
    /// - `Chord` closes between the endpoints
    /// - `Open` leaves the stroke unclosed
    #[allow(clippy::too_many_arguments)]
    pub fn arc_with_mode(
        &mut self,
        x: impl Numeric,
        y: impl Numeric,
        w: impl Numeric,
        h: impl Numeric,
        start: impl Numeric,
        stop: impl Numeric,
        mode: ArcMode,
    ) {
        let placed = self.settings.ellipse_mode.place(x.to_f64(), y.to_f64(), w.to_f64(), h.to_f64());
        if degenerate("arc", placed) {
            return;
        }
        let r = placed.rect.normalized();
        let center = r.center();
        let radii = r.size * 0.5;

        let mut path = Path::new().with_fill_rule(FillRule::EvenOdd);
        if mode == ArcMode::Pie {
            path.move_to(center);
        }
        path.arc(center, radii, start.to_f64(), stop.to_f64());
        if mode != ArcMode::Open {
            path.close();
        }
        self.draw_path(&path, placed.pre);
    }

    /// Straight segment; stroke only.
    pub fn line(&mut self, x1: impl Numeric, y1: impl Numeric, x2: impl Numeric, y2: impl Numeric) {
        let from = Vec2::new(x1.to_f64(), y1.to_f64());
        let to = Vec2::new(x2.to_f64(), y2.to_f64());
        self.stroke_only(&Path::polygon(&[from, to], false), Affine2::IDENTITY, None);
    }

    /// A round dot: a round-capped segment one stroke weight long, in the stroke color.
    pub fn point(&mut self, x: impl Numeric, y: impl Numeric) {
        let at = Vec2::new(x.to_f64(), y.to_f64());
        let to = at + Vec2::new(self.settings.stroke_weight, 0.0);
        self.stroke_only(&Path::polygon(&[at, to], false), Affine2::IDENTITY, Some(LineCap::Round));
    }

    pub fn triangle(
        &mut self,
        x1: impl Numeric,
        y1: impl Numeric,
        x2: impl Numeric,
        y2: impl Numeric,
        x3: impl Numeric,
        y3: impl Numeric,
    ) {
        let points = [
            Vec2::new(x1.to_f64(), y1.to_f64()),
            Vec2::new(x2.to_f64(), y2.to_f64()),
            Vec2::new(x3.to_f64(), y3.to_f64()),
        ];
        self.polygon(&points);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn quad(
        &mut self,
        x1: impl Numeric,
        y1: impl Numeric,
        x2: impl Numeric,
        y2: impl Numeric,
        x3: impl Numeric,
        y3: impl Numeric,
        x4: impl Numeric,
        y4: impl Numeric,
    ) {
        let points = [
            Vec2::new(x1.to_f64(), y1.to_f64()),
            Vec2::new(x2.to_f64(), y2.to_f64()),
            Vec2::new(x3.to_f64(), y3.to_f64()),
            Vec2::new(x4.to_f64(), y4.to_f64()),
        ];
        self.polygon(&points);
    }

    fn polygon(&mut self, points: &[Vec2]) {
        let path = Path::polygon(points, true).with_fill_rule(FillRule::EvenOdd);
        self.draw_path(&path, Affine2::IDENTITY);
    }
}

fn degenerate(what: &str, placed: Placement) -> bool {
    let r = placed.rect;
    if r.is_degenerate() {
        log::debug!("{what}: degenerate bounds {r:?}, nothing drawn");
        return true;
    }
    false
}
