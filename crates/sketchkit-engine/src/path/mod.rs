//! Resolution-independent path geometry handed to drawing surfaces.
//!
//! A [`Path`] may hold several subpaths (each starting with `MoveTo`). How they
//! combine when filled is governed by its [`FillRule`]; shapes with contours use
//! [`FillRule::EvenOdd`] so holes subtract regardless of winding.

use crate::coords::{Rect, Vec2};

/// Single path instruction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    CubicTo { c1: Vec2, c2: Vec2, to: Vec2 },
    /// Elliptical arc around `center` from `start` to `end` radians, increasing angle.
    /// Connected to the current point with a straight line if one exists.
    Arc { center: Vec2, radii: Vec2, start: f64, end: f64 },
    Close,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
    fill_rule: FillRule,
    start: Option<Vec2>,
    current: Option<Vec2>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed axis-aligned rectangle.
    pub fn rect(r: Rect) -> Self {
        let min = r.min();
        let max = r.max();
        let mut p = Path::new();
        p.move_to(min);
        p.line_to(Vec2::new(max.x, min.y));
        p.line_to(max);
        p.line_to(Vec2::new(min.x, max.y));
        p.close();
        p
    }

    /// Closed ellipse inscribed in `r`.
    pub fn ellipse(r: Rect) -> Self {
        let center = r.center();
        let radii = r.size * 0.5;
        let mut p = Path::new();
        p.move_to(Vec2::new(center.x + radii.x, center.y));
        p.arc(center, radii, 0.0, std::f64::consts::TAU);
        p.close();
        p
    }

    /// Polyline through `points`, closed when `close` is set.
    pub fn polygon(points: &[Vec2], close: bool) -> Self {
        let mut p = Path::new();
        p.add_polyline(points, close);
        p
    }

    pub fn with_fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }

    pub fn set_fill_rule(&mut self, rule: FillRule) {
        self.fill_rule = rule;
    }

    #[inline]
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    // ── builders ──────────────────────────────────────────────────────────

    pub fn move_to(&mut self, p: Vec2) {
        self.cmds.push(PathCmd::MoveTo(p));
        self.start = Some(p);
        self.current = Some(p);
    }

    /// Starts a subpath at `p` if there is no current point.
    pub fn line_to(&mut self, p: Vec2) {
        if self.current.is_none() {
            self.move_to(p);
            return;
        }
        self.cmds.push(PathCmd::LineTo(p));
        self.current = Some(p);
    }

    pub fn cubic_to(&mut self, c1: Vec2, c2: Vec2, to: Vec2) {
        if self.current.is_none() {
            self.move_to(c1);
        }
        self.cmds.push(PathCmd::CubicTo { c1, c2, to });
        self.current = Some(to);
    }

    pub fn arc(&mut self, center: Vec2, radii: Vec2, start: f64, end: f64) {
        let from = arc_point(center, radii, start);
        if self.current.is_none() {
            self.move_to(from);
        }
        self.cmds.push(PathCmd::Arc { center, radii, start, end });
        self.current = Some(arc_point(center, radii, end));
    }

    /// Closes the current subpath. A no-op on an empty path.
    pub fn close(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.cmds.push(PathCmd::Close);
        self.current = self.start;
    }

    /// Appends `points` as a new subpath.
    pub fn add_polyline(&mut self, points: &[Vec2], close: bool) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(first);
        for &p in rest {
            self.line_to(p);
        }
        if close {
            self.close();
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn current_point(&self) -> Option<Vec2> {
        self.current
    }

    pub fn subpath_count(&self) -> usize {
        self.cmds.iter().filter(|c| matches!(c, PathCmd::MoveTo(_))).count()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.cmds.last(), Some(PathCmd::Close))
    }

    /// Approximates every subpath with line segments.
    ///
    /// Curves are split into `segments` pieces and arcs into `segments` pieces per
    /// full turn (at least one). Closed subpaths repeat their first point at the end.
    pub fn flatten(&self, segments: usize) -> Vec<Vec<Vec2>> {
        let segments = segments.max(1);
        let mut out: Vec<Vec<Vec2>> = Vec::new();
        let mut cur: Vec<Vec2> = Vec::new();

        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    if !cur.is_empty() {
                        out.push(std::mem::take(&mut cur));
                    }
                    cur.push(p);
                }
                PathCmd::LineTo(p) => cur.push(p),
                PathCmd::CubicTo { c1, c2, to } => {
                    let p0 = cur.last().copied().unwrap_or(c1);
                    for i in 1..=segments {
                        let t = i as f64 / segments as f64;
                        cur.push(cubic_point(p0, c1, c2, to, t));
                    }
                }
                PathCmd::Arc { center, radii, start, end } => {
                    let from = arc_point(center, radii, start);
                    if cur.last() != Some(&from) {
                        cur.push(from);
                    }
                    let turns = ((end - start).abs() / std::f64::consts::TAU).max(1.0 / segments as f64);
                    let steps = ((turns * segments as f64).ceil() as usize).max(1);
                    for i in 1..=steps {
                        let a = start + (end - start) * (i as f64 / steps as f64);
                        cur.push(arc_point(center, radii, a));
                    }
                }
                PathCmd::Close => {
                    if let Some(&first) = cur.first() {
                        if cur.last() != Some(&first) {
                            cur.push(first);
                        }
                    }
                    out.push(std::mem::take(&mut cur));
                }
            }
        }
        if !cur.is_empty() {
            out.push(cur);
        }
        out
    }
}

#[inline]
fn arc_point(center: Vec2, radii: Vec2, angle: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(center.x + radii.x * cos, center.y + radii.y * sin)
}

fn cubic_point(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, t: f64) -> Vec2 {
    let mt = 1.0 - t;
    p0 * (mt * mt * mt) + c1 * (3.0 * mt * mt * t) + c2 * (3.0 * mt * t * t) + p3 * (t * t * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    // ── builders ──────────────────────────────────────────────────────────

    #[test]
    fn rect_is_one_closed_subpath() {
        let p = Path::rect(Rect::new(0.0, 0.0, 10.0, 5.0));
        assert_eq!(p.subpath_count(), 1);
        assert!(p.is_closed());
        assert_eq!(p.commands()[2], PathCmd::LineTo(Vec2::new(10.0, 5.0)));
    }

    #[test]
    fn line_to_without_current_point_starts_subpath() {
        let mut p = Path::new();
        p.line_to(Vec2::new(3.0, 4.0));
        assert_eq!(p.commands(), &[PathCmd::MoveTo(Vec2::new(3.0, 4.0))]);
    }

    #[test]
    fn close_on_empty_is_noop() {
        let mut p = Path::new();
        p.close();
        assert!(p.is_empty());
    }

    #[test]
    fn close_returns_to_subpath_start() {
        let mut p = Path::polygon(&[Vec2::new(1.0, 1.0), Vec2::new(5.0, 1.0)], true);
        assert_eq!(p.current_point(), Some(Vec2::new(1.0, 1.0)));
        p.add_polyline(&[Vec2::new(7.0, 7.0)], false);
        assert_eq!(p.subpath_count(), 2);
    }

    // ── flatten ───────────────────────────────────────────────────────────

    #[test]
    fn flatten_closed_polygon_repeats_first_point() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)];
        let flat = Path::polygon(&pts, true).flatten(8);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].len(), 4);
        assert_eq!(flat[0][3], pts[0]);
    }

    #[test]
    fn flatten_ellipse_stays_on_boundary() {
        let flat = Path::ellipse(Rect::new(0.0, 0.0, 20.0, 10.0)).flatten(32);
        for p in &flat[0] {
            let nx = (p.x - 10.0) / 10.0;
            let ny = (p.y - 5.0) / 5.0;
            assert!((nx * nx + ny * ny - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn flatten_cubic_hits_endpoint() {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0));
        p.cubic_to(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0), Vec2::new(10.0, 0.0));
        let flat = p.flatten(10);
        let last = *flat[0].last().unwrap();
        assert!((last.x - 10.0).abs() < EPS && last.y.abs() < EPS);
    }
}
