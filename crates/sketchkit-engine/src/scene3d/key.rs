use crate::coords::Vec3;

use super::{Material, Shape3d};

const QUANTUM: f64 = 4096.0;

/// Fixed-point form of a parameter so that keys hash and compare exactly.
#[inline]
pub(crate) fn quantize(v: f64) -> i64 {
    (v * QUANTUM).round() as i64
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Sphere,
    Box,
    Cylinder,
    Cone,
    Pyramid,
    Capsule,
    Torus,
    Plane,
    PointLight,
    DirectionalLight,
}

/// Structural identity of a piece of geometry: kind, quantized parameters and
/// material fingerprint. Geometry is reused across frames only on an exact match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GeometryKey {
    pub kind: ShapeKind,
    pub params: [i64; 7],
    pub material: u64,
}

impl GeometryKey {
    pub fn new(shape: &Shape3d, material: &Material) -> Self {
        let mut params = [0i64; 7];
        let mut put = |values: &[f64]| {
            for (slot, v) in params.iter_mut().zip(values) {
                *slot = quantize(*v);
            }
        };
        let color = |c: crate::paint::Rgba| [c.r as f64, c.g as f64, c.b as f64, c.a as f64];
        let vec = |v: Vec3| [v.x, v.y, v.z];

        let kind = match *shape {
            Shape3d::Sphere { radius } => {
                put(&[radius]);
                ShapeKind::Sphere
            }
            Shape3d::Box { width, height, length, chamfer } => {
                put(&[width, height, length, chamfer]);
                ShapeKind::Box
            }
            Shape3d::Cylinder { radius, height } => {
                put(&[radius, height]);
                ShapeKind::Cylinder
            }
            Shape3d::Cone { top_radius, bottom_radius, height } => {
                put(&[top_radius, bottom_radius, height]);
                ShapeKind::Cone
            }
            Shape3d::Pyramid { width, height, length } => {
                put(&[width, height, length]);
                ShapeKind::Pyramid
            }
            Shape3d::Capsule { radius, height } => {
                put(&[radius, height]);
                ShapeKind::Capsule
            }
            Shape3d::Torus { ring_radius, pipe_radius } => {
                put(&[ring_radius, pipe_radius]);
                ShapeKind::Torus
            }
            Shape3d::Plane { width, height } => {
                put(&[width, height]);
                ShapeKind::Plane
            }
            Shape3d::PointLight { color: c, position } => {
                let [r, g, b, a] = color(c);
                let [x, y, z] = vec(position);
                put(&[r, g, b, a, x, y, z]);
                ShapeKind::PointLight
            }
            Shape3d::DirectionalLight { color: c, direction } => {
                let [r, g, b, a] = color(c);
                let [x, y, z] = vec(direction);
                put(&[r, g, b, a, x, y, z]);
                ShapeKind::DirectionalLight
            }
        };

        Self { kind, params, material: material.fingerprint() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(shape: Shape3d) -> GeometryKey {
        GeometryKey::new(&shape, &Material::default())
    }

    #[test]
    fn same_shape_same_key() {
        let b = Shape3d::Box { width: 1.0, height: 1.0, length: 1.0, chamfer: 0.0 };
        assert_eq!(key(b), key(b));
    }

    #[test]
    fn parameters_distinguish_keys() {
        let a = key(Shape3d::Sphere { radius: 1.0 });
        let b = key(Shape3d::Sphere { radius: 2.0 });
        assert_ne!(a, b);
    }

    #[test]
    fn kinds_distinguish_keys_with_equal_params() {
        let a = key(Shape3d::Cylinder { radius: 1.0, height: 2.0 });
        let b = key(Shape3d::Capsule { radius: 1.0, height: 2.0 });
        assert_ne!(a, b);
    }

    #[test]
    fn float_noise_below_quantum_is_ignored() {
        let a = key(Shape3d::Sphere { radius: 1.0 });
        let b = key(Shape3d::Sphere { radius: 1.0 + 1e-9 });
        assert_eq!(a, b);
    }
}
