//! Recorded draw stream.
//!
//! Responsibilities:
//! - store surface calls as renderer-agnostic commands, in paint order
//! - keep retained 3D geometry bookkeeping for backends that replay the list
//! - keep command-specific payloads and push helpers isolated under `scene::shapes`
//!
//! [`DrawList`] implements [`Surface`](crate::surface::Surface), which makes it both
//! the headless backend and the test double for the drawing context.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, GeometryCounters};
pub use shapes::{FillPathCmd, ImageCmd, StrokePathCmd, TextCmd};
