//! Coordinate and geometry types shared by the drawing context and surfaces.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! All scalars are `f64`; see [`crate::numeric`] for how user input gets here.

mod rect;
mod transform;
mod vec2;
mod vec3;
mod viewport;

pub use rect::Rect;
pub use transform::Affine2;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;
