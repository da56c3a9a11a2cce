use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::coords::Vec3;
use crate::image::ImageId;
use crate::paint::Rgba;

use super::NodeId;
use super::key::quantize;

/// Shape or light attached to a transition node.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape3d {
    Sphere { radius: f64 },
    Box { width: f64, height: f64, length: f64, chamfer: f64 },
    Cylinder { radius: f64, height: f64 },
    Cone { top_radius: f64, bottom_radius: f64, height: f64 },
    Pyramid { width: f64, height: f64, length: f64 },
    Capsule { radius: f64, height: f64 },
    Torus { ring_radius: f64, pipe_radius: f64 },
    Plane { width: f64, height: f64 },
    PointLight { color: Rgba, position: Vec3 },
    DirectionalLight { color: Rgba, direction: Vec3 },
}

/// Surface appearance of 3D geometry.
///
/// Reset to defaults at the start of every frame; `fill` is refreshed from the
/// current fill color whenever a shape is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub fill: Rgba,
    pub shininess: f64,
    pub specular: Option<Rgba>,
    pub ambient: Option<Rgba>,
    pub emissive: Option<Rgba>,
    pub texture: Option<ImageId>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            fill: Rgba::white(),
            shininess: 1.0,
            specular: None,
            ambient: None,
            emissive: None,
            texture: None,
        }
    }
}

impl Material {
    /// Content hash used in [`GeometryKey`](super::GeometryKey).
    ///
    /// Two materials that would render identically hash identically, so geometry can
    /// be reused across frames even though the material value is rebuilt each frame.
    pub fn fingerprint(&self) -> u64 {
        fn rgba(h: &mut DefaultHasher, c: Option<Rgba>) {
            match c {
                None => 0u8.hash(h),
                Some(c) => {
                    1u8.hash(h);
                    c.to_u8().hash(h);
                }
            }
        }

        let mut h = DefaultHasher::new();
        rgba(&mut h, Some(self.fill));
        quantize(self.shininess).hash(&mut h);
        rgba(&mut h, self.specular);
        rgba(&mut h, self.ambient);
        rgba(&mut h, self.emissive);
        self.texture.map(ImageId::get).hash(&mut h);
        h.finish()
    }
}

/// Everything a backend needs to build one retained geometry object.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryDesc {
    pub shape: Shape3d,
    pub material: Material,
    /// Transition node the geometry hangs under.
    pub node: NodeId,
}

/// Backend-assigned identity of a retained geometry object.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct GeometryHandle(pub u64);

/// Retained-geometry half of a drawing surface.
pub trait GeometryBackend {
    fn create_geometry(&mut self, desc: &GeometryDesc) -> GeometryHandle;
    fn release_geometry(&mut self, handle: GeometryHandle);
}

/// Look-at camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            center: Vec3::zero(),
            up: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}
