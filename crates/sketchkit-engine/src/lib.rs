//! Sketchkit engine crate.
//!
//! An immediate-mode creative-coding context: a [`Sketch`] holds drawing state
//! (colors, stroke, shape modes, transform) and turns primitive calls into
//! resolved commands on a [`Surface`]. An optional 3D mode builds a retained
//! scene graph that is pooled from frame to frame.
//!
//! A [`FrameDriver`] runs a [`SketchApp`] through setup, touch dispatch and draw,
//! once per frame.

pub mod core;
pub mod input;
pub mod logging;
pub mod time;

pub mod coords;
pub mod numeric;
pub mod paint;
pub mod path;
pub mod style;

pub mod image;
pub mod scene;
pub mod scene3d;
pub mod shape;
pub mod sketch;
pub mod surface;
pub mod text;

pub use crate::core::{AppControl, FrameDriver, FrameError, SketchApp, SketchConfig};
pub use crate::sketch::Sketch;
pub use crate::surface::Surface;
