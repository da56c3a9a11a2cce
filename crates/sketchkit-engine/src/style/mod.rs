//! Drawing-state record and its stacks.
//!
//! Exactly one [`SketchSettings`] is live on a sketch; the style stack holds copies.
//! The transform lives next to it in a [`MatrixStack`] so the two can be saved and
//! restored independently (`push_style` vs `push_matrix`) or together (`push`).

mod modes;
mod settings;
mod stack;

pub use modes::{ArcMode, BlendMode, Placement, ShapeMode, StrokeCap, StrokeJoin, TextAlign, TextAlignY};
pub use settings::SketchSettings;
pub use stack::{MatrixStack, SettingsStack, SnapshotStack};
