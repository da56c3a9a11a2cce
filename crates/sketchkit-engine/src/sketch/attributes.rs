use crate::numeric::Numeric;
use crate::style::{BlendMode, ShapeMode, StrokeCap, StrokeJoin};
use crate::surface::Surface;

use super::Sketch;

impl<S: Surface> Sketch<S> {
    pub fn stroke_weight(&mut self, weight: impl Numeric) {
        self.settings.stroke_weight = weight.to_f64();
    }

    pub fn stroke_cap(&mut self, cap: StrokeCap) {
        self.settings.stroke_cap = cap;
    }

    pub fn stroke_join(&mut self, join: StrokeJoin) {
        self.settings.stroke_join = join;
    }

    /// How `rect` and `square` read their arguments.
    pub fn rect_mode(&mut self, mode: ShapeMode) {
        self.settings.rect_mode = mode;
    }

    /// How `ellipse`, `circle` and `arc` read their arguments.
    pub fn ellipse_mode(&mut self, mode: ShapeMode) {
        self.settings.ellipse_mode = mode;
    }

    /// How `image_sized` reads its arguments.
    pub fn image_mode(&mut self, mode: ShapeMode) {
        self.settings.image_mode = mode;
    }

    pub fn blend_mode(&mut self, mode: BlendMode) {
        self.settings.blend_mode = mode;
    }
}
