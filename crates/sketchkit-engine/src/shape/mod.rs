//! Vertex accumulation for `begin_shape` / `end_shape`.
//!
//! [`ShapeBuilder`] collects points and contours and, on [`ShapeBuilder::finish`],
//! turns them into a single [`Path`](crate::path::Path): straight segments, a
//! Catmull-Rom spline, or a chain of cubic Bezier segments depending on the
//! [`VertexMode`] set by the last vertex call. Contours become extra closed
//! subpaths filled with the even-odd rule, so they cut holes whatever their winding.

mod builder;
mod spline;

pub use builder::{EndMode, ShapeBuilder, VertexMode};
pub use spline::{CURVE_DETAIL, catmull_rom, closed_curve, open_curve};
