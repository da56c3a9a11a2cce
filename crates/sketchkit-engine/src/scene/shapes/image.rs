use crate::coords::{Affine2, Rect};
use crate::image::{Image, ImageId};
use crate::scene::{DrawCmd, DrawList};
use crate::surface::ImageStyle;

/// Image blit payload. Pixels are referenced by id, not copied.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub image: ImageId,
    /// Source size in pixels.
    pub width: u32,
    pub height: u32,
    pub dest: Rect,
    pub style: ImageStyle,
    pub transform: Affine2,
}

impl DrawList {
    /// Records an image blit.
    pub fn push_image(&mut self, image: &Image, dest: Rect, style: ImageStyle, transform: Affine2) {
        self.push(DrawCmd::Image(ImageCmd {
            image: image.id(),
            width: image.width(),
            height: image.height(),
            dest,
            style,
            transform,
        }));
    }
}
