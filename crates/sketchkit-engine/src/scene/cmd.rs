use crate::scene::shapes::{FillPathCmd, ImageCmd, StrokePathCmd, TextCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a payload module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that module
/// - route the matching `Surface` method to it in `list.rs`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillPath(FillPathCmd),
    StrokePath(StrokePathCmd),
    Image(ImageCmd),
    Text(TextCmd),
    BeginLayer,
    EndLayer,
}

impl DrawCmd {
    /// Short tag for logs and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::FillPath(_) => "fill",
            DrawCmd::StrokePath(_) => "stroke",
            DrawCmd::Image(_) => "image",
            DrawCmd::Text(_) => "text",
            DrawCmd::BeginLayer => "begin-layer",
            DrawCmd::EndLayer => "end-layer",
        }
    }
}
