use crate::coords::Vec2;
use crate::numeric::Numeric;
use crate::style::{TextAlign, TextAlignY};
use crate::surface::{Surface, TextRun};
use crate::text::{FontId, FontLoadError};

use super::Sketch;

impl<S: Surface> Sketch<S> {
    pub fn text_size(&mut self, size: impl Numeric) {
        self.settings.text_size = size.to_f64();
    }

    /// Selects a font by name: one registered with [`load_font`](Self::load_font),
    /// or any name the surface resolves itself.
    pub fn text_font(&mut self, name: impl Into<String>) {
        self.settings.text_font = name.into();
    }

    pub fn text_align(&mut self, x: TextAlign, y: TextAlignY) {
        self.settings.text_align = x;
        self.settings.text_align_y = y;
    }

    /// Space between lines, in points.
    pub fn text_leading(&mut self, leading: impl Numeric) {
        self.settings.text_leading = leading.to_f64();
    }

    /// Draws `text` anchored at `(x, y)`.
    pub fn text(&mut self, text: impl Into<String>, x: impl Numeric, y: impl Numeric) {
        let run = self.text_run(text.into(), Vec2::new(x.to_f64(), y.to_f64()), None);
        self.emit_text(run);
    }

    /// Draws `text` wrapped inside the box at `(x, y)` of size `(w, h)`.
    pub fn text_in_box(
        &mut self,
        text: impl Into<String>,
        x: impl Numeric,
        y: impl Numeric,
        w: impl Numeric,
        h: impl Numeric,
    ) {
        let bounds = Vec2::new(w.to_f64(), h.to_f64());
        let run = self.text_run(text.into(), Vec2::new(x.to_f64(), y.to_f64()), Some(bounds));
        self.emit_text(run);
    }

    /// Registers a TrueType/OpenType font under `name` for measurement.
    pub fn load_font(&mut self, name: &str, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        self.fonts.load_font(name, bytes)
    }

    /// Width of `text` in the current font and size.
    ///
    /// Fonts that were never loaded measure as zero.
    pub fn text_width(&self, text: &str) -> f64 {
        match self.fonts.font_id(&self.settings.text_font) {
            Some(id) => self.fonts.measure_text(text, id, self.settings.text_size, None).x,
            None => {
                log::debug!("text_width: font '{}' not loaded", self.settings.text_font);
                0.0
            }
        }
    }

    fn text_run(&self, text: String, origin: Vec2, bounds: Option<Vec2>) -> TextRun {
        let fill = self.fill_style().map(|f| f.color);
        let stroke = self.stroke_style().map(|s| (s.color, s.weight));
        TextRun {
            text,
            origin,
            bounds,
            font: self.settings.text_font.clone(),
            size: self.settings.text_size,
            leading: self.settings.text_leading,
            align: self.settings.text_align,
            align_y: self.settings.text_align_y,
            fill,
            stroke,
            blend: self.settings.blend_mode,
        }
    }

    fn emit_text(&mut self, run: TextRun) {
        if run.text.is_empty() || (run.fill.is_none() && run.stroke.is_none()) {
            return;
        }
        let transform = self.matrix;
        self.surface.draw_text(&run, &transform);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sketch;
    use super::*;
    use crate::paint::Rgba;
    use crate::scene::DrawCmd;
    use crate::style::SketchSettings;

    fn runs(s: &Sketch<crate::scene::DrawList>) -> Vec<TextRun> {
        s.surface()
            .commands()
            .filter_map(|c| match c {
                DrawCmd::Text(t) => Some(t.run.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn text_carries_the_current_style() {
        let mut s = sketch();
        s.text_size(18);
        s.text_leading(22);
        s.text_align(TextAlign::Center, TextAlignY::Top);
        s.fill((255, 0, 0));
        s.no_stroke();
        s.text("hi", 10, 20);

        let run = &runs(&s)[0];
        assert_eq!(run.text, "hi");
        assert_eq!(run.origin, Vec2::new(10.0, 20.0));
        assert_eq!(run.bounds, None);
        assert_eq!(run.font, SketchSettings::DEFAULT_FONT);
        assert_eq!((run.size, run.leading), (18.0, 22.0));
        assert_eq!((run.align, run.align_y), (TextAlign::Center, TextAlignY::Top));
        assert_eq!(run.fill, Some(Rgba::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(run.stroke, None);
    }

    #[test]
    fn boxed_text_has_bounds_and_stroke() {
        let mut s = sketch();
        s.stroke_weight(2);
        s.text_in_box("wrap me", 0, 0, 50, 80);
        let run = &runs(&s)[0];
        assert_eq!(run.bounds, Some(Vec2::new(50.0, 80.0)));
        assert_eq!(run.stroke, Some((Rgba::black(), 2.0)));
    }

    #[test]
    fn invisible_text_is_skipped() {
        let mut s = sketch();
        s.no_fill();
        s.no_stroke();
        s.text("ghost", 0, 0);
        s.fill(0);
        s.text("", 0, 0);
        assert!(s.surface().is_empty());
    }

    #[test]
    fn unknown_font_measures_zero() {
        let mut s = sketch();
        s.text_font("Nope");
        assert_eq!(s.text_width("abc"), 0.0);
        assert!(s.load_font("Broken", b"not a font").is_err());
    }
}
