//! Sketch images.
//!
//! An [`Image`] is a CPU-side RGBA8 pixel buffer plus the per-image draw
//! attributes (blend mode, opacity). Surfaces receive it by reference in
//! [`Surface::draw_image`](crate::surface::Surface::draw_image) and may key
//! uploaded textures on [`Image::id`].

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context;
use bytemuck::{Pod, Zeroable};
use image::RgbaImage;
use image::imageops::FilterType;

use crate::coords::Vec2;
use crate::style::BlendMode;

/// One straight-alpha RGBA8 pixel.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Process-unique image identity. Clones receive a fresh id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ImageId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct Image {
    id: ImageId,
    buffer: RgbaImage,
    pub blend_mode: BlendMode,
    /// Opacity in `[0, 1]` applied on top of the pixel alpha.
    pub alpha: f64,
}

impl Clone for Image {
    fn clone(&self) -> Self {
        Self {
            id: ImageId::next(),
            buffer: self.buffer.clone(),
            blend_mode: self.blend_mode,
            alpha: self.alpha,
        }
    }
}

impl Image {
    /// Fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_buffer(RgbaImage::new(width, height))
    }

    /// Wraps an existing RGBA8 buffer (`width * height * 4` bytes, row-major).
    pub fn from_rgba(width: u32, height: u32, bytes: Vec<u8>) -> anyhow::Result<Self> {
        let expected = width as usize * height as usize * 4;
        anyhow::ensure!(
            bytes.len() == expected,
            "RGBA buffer for {width}x{height} image must be {expected} bytes, got {}",
            bytes.len()
        );
        let buffer = RgbaImage::from_raw(width, height, bytes)
            .context("RGBA buffer does not match image dimensions")?;
        Ok(Self::from_buffer(buffer))
    }

    /// Decodes an image file. The format is inferred from the path.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path)
            .with_context(|| format!("failed to load image {}", path.display()))?;
        Ok(Self::from_buffer(decoded.to_rgba8()))
    }

    /// Encodes to a file. The format is inferred from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.buffer
            .save(path)
            .with_context(|| format!("failed to save image {}", path.display()))
    }

    fn from_buffer(buffer: RgbaImage) -> Self {
        Self { id: ImageId::next(), buffer, blend_mode: BlendMode::Normal, alpha: 1.0 }
    }

    #[inline]
    pub fn id(&self) -> ImageId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Size in logical pixels (one pixel per unit).
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(f64::from(self.width()), f64::from(self.height()))
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        self.buffer.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Pixel::new(r, g, b, a)
        })
    }

    /// Writes one pixel. Returns `false` when `(x, y)` is out of bounds.
    pub fn set(&mut self, x: u32, y: u32, px: Pixel) -> bool {
        match self.buffer.get_pixel_mut_checked(x, y) {
            Some(p) => {
                p.0 = [px.r, px.g, px.b, px.a];
                true
            }
            None => false,
        }
    }

    /// Row-major pixel view.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        bytemuck::cast_slice(self.buffer.as_raw())
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        bytemuck::cast_slice_mut(&mut *self.buffer)
    }

    /// Resamples to `width` x `height` with a triangle filter.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.buffer = image::imageops::resize(&self.buffer, width, height, FilterType::Triangle);
    }

    #[inline]
    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.buffer
    }
}
