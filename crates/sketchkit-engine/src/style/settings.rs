use crate::paint::{Color, ColorMode};

use super::{BlendMode, ShapeMode, StrokeCap, StrokeJoin, TextAlign, TextAlignY};

/// The style state every drawing call reads.
///
/// Defaults:
///
/// | field          | default                 |
/// |----------------|-------------------------|
/// | color_mode     | RGB                     |
/// | fill           | white (255)             |
/// | stroke         | black (0)               |
/// | tint           | transparent (no tint)   |
/// | stroke_weight  | 1                       |
/// | stroke_join    | miter                   |
/// | stroke_cap     | round                   |
/// | rect_mode      | corner                  |
/// | ellipse_mode   | center                  |
/// | image_mode     | corner                  |
/// | text_font      | `HelveticaNeue-Thin`    |
/// | text_size      | 32                      |
/// | text_leading   | 37                      |
/// | text_align     | left / baseline         |
/// | blend_mode     | normal                  |
#[derive(Debug, Clone, PartialEq)]
pub struct SketchSettings {
    pub color_mode: ColorMode,
    pub fill: Color,
    pub stroke: Color,
    pub tint: Color,
    pub stroke_weight: f64,
    pub stroke_join: StrokeJoin,
    pub stroke_cap: StrokeCap,
    pub rect_mode: ShapeMode,
    pub ellipse_mode: ShapeMode,
    pub image_mode: ShapeMode,
    pub text_font: String,
    pub text_size: f64,
    pub text_leading: f64,
    pub text_align: TextAlign,
    pub text_align_y: TextAlignY,
    pub blend_mode: BlendMode,
}

impl SketchSettings {
    pub const DEFAULT_FONT: &'static str = "HelveticaNeue-Thin";
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Rgb,
            fill: Color::gray(255.0),
            stroke: Color::gray(0.0),
            tint: Color::gray_alpha(0.0, 0.0),
            stroke_weight: 1.0,
            stroke_join: StrokeJoin::Miter,
            stroke_cap: StrokeCap::Round,
            rect_mode: ShapeMode::Corner,
            ellipse_mode: ShapeMode::Center,
            image_mode: ShapeMode::Corner,
            text_font: Self::DEFAULT_FONT.to_owned(),
            text_size: 32.0,
            text_leading: 37.0,
            text_align: TextAlign::Left,
            text_align_y: TextAlignY::Baseline,
            blend_mode: BlendMode::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_table() {
        let s = SketchSettings::default();
        assert_eq!(s.fill.to_array_rgb(), [255.0, 255.0, 255.0, 255.0]);
        assert_eq!(s.stroke.to_array_rgb(), [0.0, 0.0, 0.0, 255.0]);
        assert!(s.tint.is_transparent());
        assert_eq!(s.stroke_cap, StrokeCap::Round);
        assert_eq!(s.ellipse_mode, ShapeMode::Center);
        assert_eq!(s.rect_mode, ShapeMode::Corner);
        assert_eq!(s.text_size, 32.0);
        assert_eq!(s.text_leading, 37.0);
        assert_eq!(s.text_align_y, TextAlignY::Baseline);
    }
}
