//! Input subsystem.
//!
//! The host samples touch/pointer contacts once per tick into a [`FrameInput`];
//! [`TouchState`] turns consecutive samples into started/moved/ended edges.

mod frame;
mod touch;

pub use frame::FrameInput;
pub use touch::{MOVE_THRESHOLD, TouchState, TouchTransitions};
