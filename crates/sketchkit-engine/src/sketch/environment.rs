use crate::coords::{Vec2, Viewport};
use crate::numeric::Numeric;
use crate::surface::Surface;

use super::Sketch;

impl<S: Surface> Sketch<S> {
    /// Canvas width in logical pixels.
    #[inline]
    pub fn width(&self) -> f64 {
        self.viewport.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.viewport.height
    }

    /// Resizes the canvas. Takes effect for everything drawn afterwards.
    pub fn create_canvas(&mut self, width: impl Numeric, height: impl Numeric) {
        let viewport = Viewport::new(width.to_f64(), height.to_f64());
        if !viewport.is_valid() {
            log::warn!("create_canvas: ignoring invalid size {}x{}", viewport.width, viewport.height);
            return;
        }
        self.viewport = viewport;
    }

    #[inline]
    pub fn pixel_density(&self) -> f64 {
        self.pixel_density
    }

    /// Frames started so far; 1 during the first `setup`/`draw`.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Seconds since the previous frame.
    #[inline]
    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    /// Target frames per second.
    #[inline]
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn set_frame_rate(&mut self, fps: impl Numeric) {
        let fps = fps.to_f64();
        if fps > 0.0 && fps.is_finite() {
            self.frame_rate = fps;
        } else {
            log::warn!("set_frame_rate: ignoring {fps}");
        }
    }

    /// Stops the loop after the current frame.
    pub fn no_loop(&mut self) {
        self.looping = false;
    }

    /// Resumes the loop.
    pub fn loop_(&mut self) {
        self.looping = true;
    }

    /// Requests one more frame while the loop is stopped.
    pub fn redraw(&mut self) {
        self.redraw_requested = true;
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    // ── touch ─────────────────────────────────────────────────────────────

    /// Contacts currently down, in logical pixels.
    #[inline]
    pub fn touches(&self) -> &[Vec2] {
        self.touch.touches()
    }

    #[inline]
    pub fn touched(&self) -> bool {
        self.touch.touched()
    }

    /// X of the first contact, or 0 with none.
    pub fn touch_x(&self) -> f64 {
        self.touch.primary().map_or(0.0, |p| p.x)
    }

    pub fn touch_y(&self) -> f64 {
        self.touch.primary().map_or(0.0, |p| p.y)
    }
}
