use crate::coords::Vec3;
use crate::image::Image;
use crate::numeric::Numeric;
use crate::paint::{ColorArg, Rgba};
use crate::scene3d::{Camera, Shape3d};
use crate::surface::Surface;

use super::Sketch;

impl<S: Surface> Sketch<S> {
    /// Switches the sketch into 3D mode. Safe to call mid-frame.
    pub fn create_3d(&mut self) {
        self.enable_3d = true;
        if !self.scene_open {
            self.open_scene();
        }
    }

    #[inline]
    pub fn is_3d(&self) -> bool {
        self.enable_3d
    }

    // ── transforms ────────────────────────────────────────────────────────

    pub fn translate_3d(&mut self, x: impl Numeric, y: impl Numeric, z: impl Numeric) {
        if self.scene_ready("translate_3d") {
            self.scene.translate(Vec3::new(x.to_f64(), y.to_f64(), z.to_f64()));
        }
    }

    /// Euler rotation in radians, applied as one node.
    pub fn rotate_3d(&mut self, x: impl Numeric, y: impl Numeric, z: impl Numeric) {
        if self.scene_ready("rotate_3d") {
            self.scene.rotate(Vec3::new(x.to_f64(), y.to_f64(), z.to_f64()));
        }
    }

    pub fn rotate_x(&mut self, angle: impl Numeric) {
        self.rotate_3d(angle, 0.0, 0.0);
    }

    pub fn rotate_y(&mut self, angle: impl Numeric) {
        self.rotate_3d(0.0, angle, 0.0);
    }

    pub fn rotate_z(&mut self, angle: impl Numeric) {
        self.rotate_3d(0.0, 0.0, angle);
    }

    // ── shapes ────────────────────────────────────────────────────────────

    pub fn sphere(&mut self, radius: impl Numeric) {
        self.add_shape("sphere", Shape3d::Sphere { radius: radius.to_f64() });
    }

    pub fn box_(&mut self, width: impl Numeric, height: impl Numeric, length: impl Numeric) {
        self.box_chamfered(width, height, length, 0.0);
    }

    /// Box with rounded edges of radius `chamfer`.
    pub fn box_chamfered(
        &mut self,
        width: impl Numeric,
        height: impl Numeric,
        length: impl Numeric,
        chamfer: impl Numeric,
    ) {
        let shape = Shape3d::Box {
            width: width.to_f64(),
            height: height.to_f64(),
            length: length.to_f64(),
            chamfer: chamfer.to_f64(),
        };
        self.add_shape("box", shape);
    }

    pub fn cylinder(&mut self, radius: impl Numeric, height: impl Numeric) {
        self.add_shape("cylinder", Shape3d::Cylinder { radius: radius.to_f64(), height: height.to_f64() });
    }

    pub fn cone(&mut self, top_radius: impl Numeric, bottom_radius: impl Numeric, height: impl Numeric) {
        let shape = Shape3d::Cone {
            top_radius: top_radius.to_f64(),
            bottom_radius: bottom_radius.to_f64(),
            height: height.to_f64(),
        };
        self.add_shape("cone", shape);
    }

    pub fn pyramid(&mut self, width: impl Numeric, height: impl Numeric, length: impl Numeric) {
        let shape =
            Shape3d::Pyramid { width: width.to_f64(), height: height.to_f64(), length: length.to_f64() };
        self.add_shape("pyramid", shape);
    }

    pub fn capsule(&mut self, radius: impl Numeric, height: impl Numeric) {
        self.add_shape("capsule", Shape3d::Capsule { radius: radius.to_f64(), height: height.to_f64() });
    }

    pub fn torus(&mut self, ring_radius: impl Numeric, pipe_radius: impl Numeric) {
        let shape =
            Shape3d::Torus { ring_radius: ring_radius.to_f64(), pipe_radius: pipe_radius.to_f64() };
        self.add_shape("torus", shape);
    }

    pub fn plane(&mut self, width: impl Numeric, height: impl Numeric) {
        self.add_shape("plane", Shape3d::Plane { width: width.to_f64(), height: height.to_f64() });
    }

    // ── material ──────────────────────────────────────────────────────────
    //
    // Material state lasts until the end of the frame. The fill color is read from
    // the 2D fill whenever a shape is added.

    pub fn shininess(&mut self, shininess: impl Numeric) {
        self.material.shininess = shininess.to_f64();
    }

    pub fn specular_material(&mut self, color: impl ColorArg) {
        self.material.specular = Some(self.rgba(color));
    }

    pub fn ambient_material(&mut self, color: impl ColorArg) {
        self.material.ambient = Some(self.rgba(color));
    }

    pub fn emissive_material(&mut self, color: impl ColorArg) {
        self.material.emissive = Some(self.rgba(color));
    }

    /// Wraps `image` around subsequent shapes.
    pub fn texture(&mut self, image: &Image) {
        self.material.texture = Some(image.id());
    }

    pub fn no_texture(&mut self) {
        self.material.texture = None;
    }

    // ── lights and camera ─────────────────────────────────────────────────

    /// Omnidirectional light at `(x, y, z)` under the current node.
    pub fn point_light(&mut self, color: impl ColorArg, x: impl Numeric, y: impl Numeric, z: impl Numeric) {
        let shape = Shape3d::PointLight {
            color: self.rgba(color),
            position: Vec3::new(x.to_f64(), y.to_f64(), z.to_f64()),
        };
        self.add_shape("point_light", shape);
    }

    /// Parallel light shining along `(x, y, z)`.
    pub fn directional_light(
        &mut self,
        color: impl ColorArg,
        x: impl Numeric,
        y: impl Numeric,
        z: impl Numeric,
    ) {
        let shape = Shape3d::DirectionalLight {
            color: self.rgba(color),
            direction: Vec3::new(x.to_f64(), y.to_f64(), z.to_f64()),
        };
        self.add_shape("directional_light", shape);
    }

    pub fn ambient_light(&mut self, color: impl ColorArg) {
        if self.scene_ready("ambient_light") {
            let color = self.rgba(color);
            self.scene.set_ambient_light(Some(color));
        }
    }

    pub fn no_ambient_light(&mut self) {
        if self.scene_ready("no_ambient_light") {
            self.scene.set_ambient_light(None);
        }
    }

    /// Points the camera from `eye` at `center`, with `up` as the vertical.
    pub fn camera(&mut self, eye: Vec3, center: Vec3, up: Vec3) {
        if self.scene_ready("camera") {
            self.scene.set_camera(Camera { eye, center, up });
        }
    }

    // ── helpers ───────────────────────────────────────────────────────────

    fn rgba(&self, color: impl ColorArg) -> Rgba {
        color.into_color(self.settings.color_mode).to_rgba()
    }

    fn add_shape(&mut self, what: &str, shape: Shape3d) {
        if !self.scene_ready(what) {
            return;
        }
        self.material.fill = self.settings.fill.to_rgba();
        self.scene.add_geometry(&mut self.surface, shape, &self.material);
    }

    /// Whether 3D calls can reach the scene right now. Warns once per sketch when
    /// 3D mode was never enabled.
    fn scene_ready(&mut self, what: &str) -> bool {
        if !self.enable_3d {
            if !self.warned_3d {
                log::warn!("{what}() ignored: call create_3d() or enable 3D in the config first");
                self.warned_3d = true;
            }
            return false;
        }
        if !self.scene_open {
            log::debug!("{what}() outside a frame ignored");
            return false;
        }
        true
    }
}
