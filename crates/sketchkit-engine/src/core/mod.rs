//! Core sketch-facing contracts.
//!
//! This module defines the interface between the frame driver and user sketches:
//! the [`SketchApp`] callbacks, the [`SketchConfig`] a sketch starts from, and the
//! [`FrameDriver`] that owns the per-frame protocol.

mod app;
mod config;
mod driver;
mod error;

pub use app::{AppControl, SketchApp};
pub use config::SketchConfig;
pub use driver::FrameDriver;
pub use error::FrameError;
