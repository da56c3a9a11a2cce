//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to the frame driver.
//! Intended usage:
//! - one `FrameClock` per driver
//! - call `tick()` once per frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
