//! Retained 3D scene with frame-to-frame node pooling.
//!
//! Immediate-mode 3D calls (`translate_3d`, `box_`, ...) are replayed every frame,
//! but the backend keeps retained objects. To avoid rebuilding them each frame the
//! graph works as a mark-and-sweep cache:
//!
//! 1. [`SceneGraph::begin_frame`] moves every live node's children and geometry into
//!    per-node *available* pools (mark).
//! 2. During the frame, transform calls adopt an available child with the same
//!    operation, and shape calls adopt available geometry with the same
//!    [`GeometryKey`]. Only misses allocate.
//! 3. [`SceneGraph::end_frame`] releases whatever is still available (sweep).
//!
//! Reuse is structural: a sketch that draws the same thing every frame allocates once.

mod arena;
mod geometry;
mod graph;
mod key;
mod node;

pub use arena::NodeId;
pub use geometry::{Camera, GeometryBackend, GeometryDesc, GeometryHandle, Material, Shape3d};
pub use graph::{SceneGraph, SceneStats};
pub use key::{GeometryKey, ShapeKind};
pub use node::{NodeOp, TransitionNode};
