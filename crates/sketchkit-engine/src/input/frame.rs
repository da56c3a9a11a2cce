use crate::coords::Vec2;

/// Capability inputs sampled by the host for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Contacts currently down, in logical pixels. Order must be stable across ticks
    /// for movement detection to compare like with like.
    pub touches: Vec<Vec2>,
}

impl FrameInput {
    pub fn with_touches(touches: impl Into<Vec<Vec2>>) -> Self {
        Self { touches: touches.into() }
    }
}
