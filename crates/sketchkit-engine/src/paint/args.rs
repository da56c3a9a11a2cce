use crate::numeric::Numeric;

use super::{Color, ColorMode, SystemColor};

/// Anything `fill`, `stroke`, `tint`, `background` and `color` accept.
///
/// - a single number: gray level, RGB range
/// - `(gray, alpha)`: RGB range
/// - `(v1, v2, v3)` / `(v1, v2, v3, alpha)`: read under the sketch's color mode
/// - a [`Color`] or [`SystemColor`]: used as is
pub trait ColorArg {
    fn into_color(self, mode: ColorMode) -> Color;
}

impl<T: Numeric> ColorArg for T {
    #[inline]
    fn into_color(self, _mode: ColorMode) -> Color {
        Color::gray(self.to_f64())
    }
}

impl<A: Numeric, B: Numeric> ColorArg for (A, B) {
    #[inline]
    fn into_color(self, _mode: ColorMode) -> Color {
        Color::gray_alpha(self.0.to_f64(), self.1.to_f64())
    }
}

impl<A: Numeric, B: Numeric, C: Numeric> ColorArg for (A, B, C) {
    #[inline]
    fn into_color(self, mode: ColorMode) -> Color {
        Color::new(self.0.to_f64(), self.1.to_f64(), self.2.to_f64(), mode.alpha_max(), mode)
    }
}

impl<A: Numeric, B: Numeric, C: Numeric, D: Numeric> ColorArg for (A, B, C, D) {
    #[inline]
    fn into_color(self, mode: ColorMode) -> Color {
        Color::new(self.0.to_f64(), self.1.to_f64(), self.2.to_f64(), self.3.to_f64(), mode)
    }
}

impl ColorArg for Color {
    #[inline]
    fn into_color(self, _mode: ColorMode) -> Color {
        self
    }
}

impl ColorArg for &Color {
    #[inline]
    fn into_color(self, _mode: ColorMode) -> Color {
        *self
    }
}

impl ColorArg for SystemColor {
    #[inline]
    fn into_color(self, _mode: ColorMode) -> Color {
        self.into()
    }
}
