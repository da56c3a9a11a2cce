use std::path::Path as FsPath;

use anyhow::Result;

use crate::image::Image;
use crate::numeric::Numeric;
use crate::surface::{ImageStyle, Surface};

use super::Sketch;

impl<S: Surface> Sketch<S> {
    /// Blank, fully transparent image.
    pub fn create_image(&self, width: u32, height: u32) -> Image {
        Image::new(width, height)
    }

    pub fn load_image(&self, path: impl AsRef<FsPath>) -> Result<Image> {
        Image::load(path)
    }

    /// Draws `image` at its own pixel size.
    pub fn image(&mut self, image: &Image, x: impl Numeric, y: impl Numeric) {
        let size = image.size();
        self.image_sized(image, x, y, size.x, size.y);
    }

    /// Draws `image` scaled into `(x, y, w, h)`, read under `image_mode`, with the
    /// current tint.
    pub fn image_sized(
        &mut self,
        image: &Image,
        x: impl Numeric,
        y: impl Numeric,
        w: impl Numeric,
        h: impl Numeric,
    ) {
        let placed = self.settings.image_mode.place(x.to_f64(), y.to_f64(), w.to_f64(), h.to_f64());
        if placed.rect.is_degenerate() {
            log::debug!("image: degenerate bounds {:?}, nothing drawn", placed.rect);
            return;
        }

        let tint = self.settings.tint.to_rgba();
        let style = ImageStyle {
            tint: (!tint.is_invisible()).then_some(tint),
            alpha: image.alpha,
            blend: image.blend_mode,
        };
        let transform = self.matrix.then(placed.pre);
        self.surface.draw_image(image, placed.rect, &style, &transform);
    }
}
