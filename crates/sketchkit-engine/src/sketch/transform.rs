use crate::coords::{Affine2, Vec2};
use crate::numeric::Numeric;
use crate::surface::Surface;

use super::Sketch;

impl<S: Surface> Sketch<S> {
    pub fn translate(&mut self, x: impl Numeric, y: impl Numeric) {
        self.matrix = self.matrix.then(Affine2::translate(x.to_f64(), y.to_f64()));
    }

    /// Rotates by `angle` radians.
    pub fn rotate(&mut self, angle: impl Numeric) {
        self.matrix = self.matrix.then(Affine2::rotate(angle.to_f64()));
    }

    pub fn scale(&mut self, x: impl Numeric, y: impl Numeric) {
        self.matrix = self.matrix.then(Affine2::scale(x.to_f64(), y.to_f64()));
    }

    pub fn scale_uniform(&mut self, factor: impl Numeric) {
        let f = factor.to_f64();
        self.matrix = self.matrix.then(Affine2::scale(f, f));
    }

    /// Back to the frame's base transform (`scale(pixel_density)`).
    pub fn reset_matrix(&mut self) {
        self.matrix = self.base_matrix();
    }

    /// The full current transform, device scale included.
    #[inline]
    pub fn current_matrix(&self) -> Affine2 {
        self.matrix
    }

    /// Translation of the current transform in logical pixels.
    pub fn current_translation(&self) -> Vec2 {
        self.matrix.translation() / self.pixel_density
    }

    /// Scale of the current transform relative to the device base.
    pub fn current_scale(&self) -> Vec2 {
        self.matrix.scale_factors() / self.pixel_density
    }
}
