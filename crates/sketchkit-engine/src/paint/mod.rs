//! Color model.
//!
//! Scope:
//! - sketch-facing [`Color`] with simultaneous RGB and HSB views
//! - device-facing [`Rgba`] (normalized straight alpha) handed to surfaces
//! - the named [`SystemColor`] palette

mod args;
mod color;
mod hex;
mod rgba;
mod system;

pub use args::ColorArg;
pub use color::{Color, ColorMode};
pub use hex::ColorParseError;
pub use rgba::Rgba;
pub use system::SystemColor;
