//! The drawing context.
//!
//! [`Sketch`] is the single object user code draws through. It owns the live
//! [`SketchSettings`], the style and matrix stacks, the shape builder, the 3D scene
//! graph and the [`Surface`] every primitive ends up on.
//!
//! The API is split by topic:
//! - `color`, `attributes`: state setters
//! - `stack`, `transform`: push/pop and the current transform
//! - `shapes`, `vertex`: 2D primitives and `begin_shape`/`end_shape`
//! - `typography`, `image`: text and bitmaps
//! - `scene`: the optional 3D mode
//! - `environment`, `random`: canvas, loop control, touch, randomness
//!
//! Numeric arguments are `impl Numeric` and converted to `f64` on entry, so sketches
//! can mix integer and float literals freely.
//!
//! A `Sketch` is bound to the thread driving its frames; it is neither `Send` nor
//! `Sync`.

mod attributes;
mod color;
mod environment;
mod image;
mod random;
mod scene;
mod shapes;
mod stack;
mod transform;
mod typography;
mod vertex;

use std::marker::PhantomData;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::coords::{Affine2, Viewport};
use crate::core::{FrameError, SketchConfig};
use crate::input::{FrameInput, TouchState, TouchTransitions};
use crate::path::Path;
use crate::scene3d::{Material, SceneGraph};
use crate::shape::{EndMode, ShapeBuilder};
use crate::style::{BlendMode, MatrixStack, SettingsStack, SketchSettings};
use crate::surface::{FillStyle, LineCap, StrokeStyle, Surface};
use crate::text::FontSystem;
use crate::time::FrameTime;

pub use stack::PushGuard;

pub struct Sketch<S: Surface> {
    surface: S,

    settings: SketchSettings,
    style_stack: SettingsStack,
    matrix: Affine2,
    matrix_stack: MatrixStack,
    /// One entry per `push()`: whether it opened a scene branch.
    branch_marks: Vec<bool>,
    shape: ShapeBuilder,

    scene: SceneGraph,
    material: Material,
    enable_3d: bool,
    scene_open: bool,
    warned_3d: bool,

    fonts: FontSystem,
    rng: StdRng,
    touch: TouchState,

    viewport: Viewport,
    pixel_density: f64,
    frame_count: u64,
    delta_time: f64,
    frame_rate: f64,
    looping: bool,
    redraw_requested: bool,

    _not_send: PhantomData<Rc<()>>,
}

impl<S: Surface> Sketch<S> {
    pub fn new(config: &SketchConfig, surface: S) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let pixel_density = if config.pixel_density > 0.0 { config.pixel_density } else { 1.0 };

        Self {
            surface,
            settings: SketchSettings::default(),
            style_stack: SettingsStack::new("style"),
            matrix: Affine2::scale(pixel_density, pixel_density),
            matrix_stack: MatrixStack::new("matrix"),
            branch_marks: Vec::new(),
            shape: ShapeBuilder::new(),
            scene: SceneGraph::new(),
            material: Material::default(),
            enable_3d: config.enable_3d,
            scene_open: false,
            warned_3d: false,
            fonts: FontSystem::new(),
            rng,
            touch: TouchState::default(),
            viewport: Viewport::new(config.width, config.height),
            pixel_density,
            frame_count: 0,
            delta_time: 1.0 / 60.0,
            frame_rate: config.frame_rate,
            looping: true,
            redraw_requested: false,
            _not_send: PhantomData,
        }
    }

    // ── frame protocol ────────────────────────────────────────────────────

    /// Starts a frame: resets the transform to the device base and marks the 3D graph.
    ///
    /// Settings persist across frames; the transform does not.
    pub fn begin_frame(&mut self, time: FrameTime) {
        debug_assert!(
            self.style_stack.is_empty()
                && self.matrix_stack.is_empty()
                && self.branch_marks.is_empty(),
            "push/pop state leaked into the start of a frame"
        );

        self.frame_count += 1;
        self.delta_time = time.dt;
        self.matrix = self.base_matrix();
        self.surface.begin_frame();

        if self.enable_3d {
            self.open_scene();
        }
    }

    /// Ends a frame: checks stack balance, then sweeps and presents the 3D graph.
    ///
    /// On imbalance the settings go back to what they were before the first unmatched
    /// push, every stack is reset so the next frame starts clean, and the depths found
    /// are returned.
    pub fn end_frame(&mut self) -> Result<(), FrameError> {
        if self.shape.is_open() {
            log::warn!(
                "begin_shape() without end_shape(); discarding {} point(s)",
                self.shape.points().len()
            );
            let _ = self.shape.finish(EndMode::Open);
        }

        let style = self.style_stack.depth();
        let matrix = self.matrix_stack.depth();
        let nodes = self.scene.branch_depth();
        let balanced = style == 0 && matrix == 0 && nodes == 0;

        if !balanced {
            if let Some(settings) = self.style_stack.unwind() {
                self.settings = settings;
            }
            self.matrix_stack.clear();
            self.branch_marks.clear();
            self.scene.reset_branches();
        }

        if self.scene_open {
            self.scene_open = false;
            self.scene.end_frame(&mut self.surface);
            self.surface.present_scene(&self.scene);
        }

        if balanced {
            Ok(())
        } else {
            Err(FrameError::UnbalancedStack { style, matrix, nodes })
        }
    }

    /// Applies this tick's touch samples.
    pub(crate) fn update_touches(&mut self, input: &FrameInput) -> TouchTransitions {
        self.touch.apply(input)
    }

    /// Releases every retained 3D object.
    pub fn teardown(&mut self) {
        self.scene.teardown(&mut self.surface);
        self.scene_open = false;
    }

    pub(crate) fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn open_scene(&mut self) {
        self.scene.begin_frame();
        self.material = Material::default();
        self.scene_open = true;
    }

    #[inline]
    fn base_matrix(&self) -> Affine2 {
        Affine2::scale(self.pixel_density, self.pixel_density)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The live settings record.
    #[inline]
    pub fn settings(&self) -> &SketchSettings {
        &self.settings
    }

    #[inline]
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    #[inline]
    pub fn fonts(&self) -> &FontSystem {
        &self.fonts
    }

    // ── emission ──────────────────────────────────────────────────────────

    /// Resolved fill, or `None` when nothing would be painted.
    fn fill_style(&self) -> Option<FillStyle> {
        let color = self.settings.fill.to_rgba();
        let blend = self.settings.blend_mode;
        if color.is_invisible() && blend != BlendMode::Clear {
            return None;
        }
        Some(FillStyle { color, blend })
    }

    /// Resolved stroke, or `None` when nothing would be painted.
    fn stroke_style(&self) -> Option<StrokeStyle> {
        let color = self.settings.stroke.to_rgba();
        let blend = self.settings.blend_mode;
        let weight = self.settings.stroke_weight;
        if weight <= 0.0 || (color.is_invisible() && blend != BlendMode::Clear) {
            return None;
        }
        Some(StrokeStyle {
            color,
            weight,
            cap: self.settings.stroke_cap.into(),
            join: self.settings.stroke_join.into(),
            blend,
        })
    }

    /// Fills, then strokes, `path` under the current transform with `pre` composed
    /// in local space.
    fn draw_path(&mut self, path: &Path, pre: Affine2) {
        let transform = self.matrix.then(pre);
        if let Some(fill) = self.fill_style() {
            self.surface.fill_path(path, &fill, &transform);
        }
        self.stroke_only(path, pre, None);
    }

    /// Strokes `path`, optionally overriding the cap for this one call.
    fn stroke_only(&mut self, path: &Path, pre: Affine2, cap: Option<LineCap>) {
        let transform = self.matrix.then(pre);
        if let Some(mut stroke) = self.stroke_style() {
            if let Some(cap) = cap {
                stroke.cap = cap;
            }
            self.surface.stroke_path(path, &stroke, &transform);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::scene::DrawCmd;

    #[test]
    fn frame_starts_at_device_scale() {
        let mut s =
            sketch_with(SketchConfig { pixel_density: 2.0, ..SketchConfig::headless(10.0, 10.0) });
        s.translate(5, 5);
        s.end_frame().unwrap();
        next_frame(&mut s);
        assert_eq!(s.current_matrix(), Affine2::scale(2.0, 2.0));
    }

    #[test]
    fn settings_persist_across_frames() {
        let mut s = sketch();
        s.stroke_weight(4);
        s.end_frame().unwrap();
        next_frame(&mut s);
        assert_eq!(s.settings().stroke_weight, 4.0);
    }

    #[test]
    fn open_shape_is_discarded_at_frame_end() {
        let mut s = sketch();
        s.begin_shape();
        s.vertex(0, 0);
        s.end_frame().unwrap();
        next_frame(&mut s);
        s.begin_shape();
        s.vertex(1, 1);
        s.vertex(2, 2);
        s.end_shape(EndMode::Open);
        let strokes: Vec<_> = s
            .surface()
            .commands()
            .filter_map(|c| match c {
                DrawCmd::StrokePath(p) => Some(p.path.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].commands().len(), 2);
    }
}
