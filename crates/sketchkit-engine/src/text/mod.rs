//! Font loading and text measurement.
//!
//! Layout and rasterization belong to the surface; the sketch only needs metrics
//! (`text_width`) for fonts the host has handed it.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
