use crate::coords::Rect;
use crate::paint::{Color, ColorArg, ColorMode};
use crate::path::Path;
use crate::style::BlendMode;
use crate::surface::{FillStyle, Surface};

use super::Sketch;

impl<S: Surface> Sketch<S> {
    /// Selects how 3- and 4-component colors are read from now on.
    pub fn color_mode(&mut self, mode: ColorMode) {
        self.settings.color_mode = mode;
    }

    pub fn fill(&mut self, color: impl ColorArg) {
        self.settings.fill = color.into_color(self.settings.color_mode);
    }

    pub fn no_fill(&mut self) {
        self.settings.fill = Color::transparent(self.settings.color_mode);
    }

    pub fn stroke(&mut self, color: impl ColorArg) {
        self.settings.stroke = color.into_color(self.settings.color_mode);
    }

    pub fn no_stroke(&mut self) {
        self.settings.stroke = Color::transparent(self.settings.color_mode);
    }

    /// Tints subsequent images.
    pub fn tint(&mut self, color: impl ColorArg) {
        self.settings.tint = color.into_color(self.settings.color_mode);
    }

    pub fn no_tint(&mut self) {
        self.settings.tint = Color::transparent(self.settings.color_mode);
    }

    /// Paints the whole canvas, ignoring the current transform and style.
    pub fn background(&mut self, color: impl ColorArg) {
        let color = color.into_color(self.settings.color_mode).to_rgba();
        if color.is_invisible() {
            return;
        }
        let canvas = Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height);
        let style = FillStyle { color, blend: BlendMode::Normal };
        let base = self.base_matrix();
        self.surface.fill_path(&Path::rect(canvas), &style, &base);
    }

    /// Subsequent shapes clear what they cover instead of painting.
    pub fn erase(&mut self) {
        self.settings.blend_mode = BlendMode::Clear;
    }

    pub fn no_erase(&mut self) {
        self.settings.blend_mode = BlendMode::Normal;
    }

    /// Builds a color under the current color mode without changing any state.
    #[must_use]
    pub fn color(&self, color: impl ColorArg) -> Color {
        color.into_color(self.settings.color_mode)
    }

    /// Parses `#rrggbb` / `#rrggbbaa`.
    ///
    /// # Panics
    /// Panics on a malformed string; use [`Color::from_hex`] for untrusted input.
    #[track_caller]
    #[must_use]
    pub fn color_hex(&self, hex: &str) -> Color {
        match Color::from_hex(hex) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        }
    }

    // ── component readers ─────────────────────────────────────────────────

    pub fn red(&self, color: &Color) -> f64 {
        color.red()
    }

    pub fn green(&self, color: &Color) -> f64 {
        color.green()
    }

    pub fn blue(&self, color: &Color) -> f64 {
        color.blue()
    }

    pub fn alpha(&self, color: &Color) -> f64 {
        color.alpha()
    }

    pub fn hue(&self, color: &Color) -> f64 {
        color.hue()
    }

    pub fn saturation(&self, color: &Color) -> f64 {
        color.saturation()
    }

    pub fn brightness(&self, color: &Color) -> f64 {
        color.brightness()
    }
}
