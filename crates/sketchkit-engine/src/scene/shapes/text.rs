use crate::coords::Affine2;
use crate::scene::{DrawCmd, DrawList};
use crate::surface::TextRun;

/// Text layout payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub run: TextRun,
    pub transform: Affine2,
}

impl DrawList {
    /// Records a text layout request.
    #[inline]
    pub fn push_text(&mut self, run: TextRun, transform: Affine2) {
        self.push(DrawCmd::Text(TextCmd { run, transform }));
    }
}
