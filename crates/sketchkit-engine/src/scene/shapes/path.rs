use crate::coords::Affine2;
use crate::path::Path;
use crate::scene::{DrawCmd, DrawList};
use crate::surface::{FillStyle, StrokeStyle};

/// Path fill payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPathCmd {
    pub path: Path,
    pub style: FillStyle,
    pub transform: Affine2,
}

/// Path stroke payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePathCmd {
    pub path: Path,
    pub style: StrokeStyle,
    pub transform: Affine2,
}

impl DrawList {
    /// Records a path fill.
    #[inline]
    pub fn push_fill(&mut self, path: Path, style: FillStyle, transform: Affine2) {
        self.push(DrawCmd::FillPath(FillPathCmd { path, style, transform }));
    }

    /// Records a path stroke.
    #[inline]
    pub fn push_stroke(&mut self, path: Path, style: StrokeStyle, transform: Affine2) {
        self.push(DrawCmd::StrokePath(StrokePathCmd { path, style, transform }));
    }
}
