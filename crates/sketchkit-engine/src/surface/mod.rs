//! Drawing surface contract.
//!
//! The sketch never rasterizes. Every drawing call resolves the current settings into
//! an explicit style, composes the transform, and hands both to a [`Surface`]. A surface
//! therefore holds no sketch state of its own: the sketch's logical state and what the
//! surface is asked to draw cannot drift apart.
//!
//! [`DrawList`](crate::scene::DrawList) is the built-in recording implementation.

use crate::coords::{Affine2, Rect, Vec2};
use crate::image::Image;
use crate::paint::Rgba;
use crate::path::Path;
use crate::scene3d::{GeometryBackend, SceneGraph};
use crate::style::{BlendMode, StrokeCap, StrokeJoin, TextAlign, TextAlignY};

/// Line end shape as a rasterizer understands it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl From<StrokeCap> for LineCap {
    fn from(cap: StrokeCap) -> Self {
        match cap {
            StrokeCap::Square => LineCap::Butt,
            StrokeCap::Project => LineCap::Square,
            StrokeCap::Round => LineCap::Round,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LineJoin {
    #[default]
    Miter,
    Bevel,
    Round,
}

impl From<StrokeJoin> for LineJoin {
    fn from(join: StrokeJoin) -> Self {
        match join {
            StrokeJoin::Miter => LineJoin::Miter,
            StrokeJoin::Bevel => LineJoin::Bevel,
            StrokeJoin::Round => LineJoin::Round,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillStyle {
    pub color: Rgba,
    pub blend: BlendMode,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub weight: f64,
    pub cap: LineCap,
    pub join: LineJoin,
    pub blend: BlendMode,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageStyle {
    /// Multiplied into the image colors; `None` draws the pixels unchanged.
    pub tint: Option<Rgba>,
    pub alpha: f64,
    pub blend: BlendMode,
}

/// One text-layout request.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Anchor point, interpreted through `align` / `align_y`.
    pub origin: Vec2,
    /// Wrapping box size for `text_in_box`; `None` lays out a single unbounded run.
    pub bounds: Option<Vec2>,
    pub font: String,
    pub size: f64,
    pub leading: f64,
    pub align: TextAlign,
    pub align_y: TextAlignY,
    pub fill: Option<Rgba>,
    /// Outline color and width.
    pub stroke: Option<(Rgba, f64)>,
    pub blend: BlendMode,
}

/// Capability the sketch draws through.
///
/// The 2D half takes fully-resolved styles and the transform to draw under. The 3D
/// half ([`GeometryBackend`]) creates and releases retained geometry on behalf of
/// the [`SceneGraph`].
pub trait Surface: GeometryBackend {
    fn fill_path(&mut self, path: &Path, style: &FillStyle, transform: &Affine2);

    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle, transform: &Affine2);

    /// Draws `image` scaled into `dest` (in the space of `transform`).
    fn draw_image(&mut self, image: &Image, dest: Rect, style: &ImageStyle, transform: &Affine2);

    fn draw_text(&mut self, run: &TextRun, transform: &Affine2);

    /// Called before anything is drawn for a new frame.
    fn begin_frame(&mut self) {}

    /// Opens a transparency layer; everything until [`end_layer`](Surface::end_layer)
    /// composites as one group.
    fn begin_layer(&mut self) {}

    fn end_layer(&mut self) {}

    /// Called once per frame in 3D mode after the sweep, with the settled tree.
    fn present_scene(&mut self, scene: &SceneGraph) {
        let _ = scene;
    }
}
