use std::fmt;

/// Frame protocol violation.
///
/// The driver logs it, restores a balanced state, and hands it back to the caller.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FrameError {
    /// A push without a matching pop at the end of `draw()`. Depths are the stack
    /// sizes found.
    UnbalancedStack { style: usize, matrix: usize, nodes: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::UnbalancedStack { style, matrix, nodes } => write!(
                f,
                "unbalanced push/pop at end of draw() \
                 (style depth {style}, matrix depth {matrix}, node depth {nodes})"
            ),
        }
    }
}

impl std::error::Error for FrameError {}
