use std::collections::HashMap;
use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Named collection of parsed fonts.
///
/// Fonts are registered under the name sketches pass to `text_font`. Loading a
/// second font under an existing name replaces the mapping.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
    names: HashMap<String, FontId>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType or OpenType font from raw bytes and registers it as `name`.
    pub fn load_font(&mut self, name: &str, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        self.names.insert(name.to_owned(), id);
        log::debug!("font '{name}' loaded as {id:?}");
        Ok(id)
    }

    pub fn font_id(&self, name: &str) -> Option<FontId> {
        self.names.get(name).copied()
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Computes the extent of a laid-out string as `(width, height)`.
    ///
    /// Unknown fonts measure as zero width and one line of `size * 1.2`.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f64, max_width: Option<f64>) -> Vec2 {
        let fallback = Vec2::new(0.0, size * 1.2);
        let Some(font) = self.get(id) else {
            return fallback;
        };

        let px = size as f32;
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            max_width: max_width.map(|w| w as f32),
            ..LayoutSettings::default()
        });
        layout.append(&[font], &TextStyle::new(text, px, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return fallback;
        }

        // Pen position after each glyph, not the bitmap edge, so trailing spaces count.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, px);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(px, f32::max);
        Vec2::new(f64::from(w), f64::from(h))
    }
}
