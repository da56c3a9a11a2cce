use std::time::Instant;

use anyhow::{Context, Result};

use crate::input::FrameInput;
use crate::sketch::Sketch;
use crate::surface::Surface;
use crate::time::FrameClock;

use super::{AppControl, FrameError, SketchApp, SketchConfig};

/// Drives a [`SketchApp`] one frame at a time.
///
/// Per frame:
/// 1. tick the clock, reset the transform to `scale(pixel_density)`, mark the 3D graph
/// 2. `setup()` on the first frame only
/// 3. touch transitions, then `draw()`
/// 4. check stack balance, sweep the 3D graph and present it
///
/// The host owns the loop: call [`frame`](Self::frame) from a display callback, or
/// [`run`](Self::run) to let the driver pace itself.
pub struct FrameDriver<A, S: Surface> {
    sketch: Sketch<S>,
    app: A,
    clock: FrameClock,
    pacing: bool,
    setup_done: bool,
    ended: bool,
}

impl<A, S> FrameDriver<A, S>
where
    A: SketchApp<S>,
    S: Surface,
{
    pub fn new(config: SketchConfig, surface: S, app: A) -> Self {
        log::info!(
            "sketch '{}' {}x{} @{}x, {} fps{}",
            config.title,
            config.width,
            config.height,
            config.pixel_density,
            config.frame_rate,
            if config.enable_3d { ", 3D" } else { "" },
        );
        Self {
            sketch: Sketch::new(&config, surface),
            app,
            clock: FrameClock::new(),
            pacing: config.pacing,
            setup_done: false,
            ended: false,
        }
    }

    /// Runs one frame with this tick's input.
    ///
    /// Returns [`AppControl::Exit`] once the sketch has stopped looping and no redraw
    /// is pending. The host may keep calling `frame` regardless (e.g. on input).
    pub fn frame(&mut self, input: &FrameInput) -> Result<AppControl, FrameError> {
        let time = self.clock.tick();
        self.sketch.begin_frame(time);

        if !self.setup_done {
            self.setup_done = true;
            self.app.setup(&mut self.sketch);
        }

        let touch = self.sketch.update_touches(input);
        if touch.started {
            self.app.touch_started(&mut self.sketch);
        }
        if touch.moved {
            self.app.touch_moved(&mut self.sketch);
        }
        if touch.ended {
            self.app.touch_ended(&mut self.sketch);
        }

        self.app.draw(&mut self.sketch);

        if let Err(err) = self.sketch.end_frame() {
            log::error!("frame {}: {err}", self.sketch.frame_count());
            return Err(err);
        }

        if self.sketch.take_redraw() || self.sketch.is_looping() {
            Ok(AppControl::Continue)
        } else {
            Ok(AppControl::Exit)
        }
    }

    /// Runs up to `frames` frames (forever with `None`) with empty input.
    pub fn run(&mut self, frames: Option<u64>) -> Result<u64> {
        self.run_with(frames, |_| FrameInput::default())
    }

    /// Like [`run`](Self::run), asking `input` for each frame's touch samples.
    ///
    /// Stops early when the sketch calls `no_loop()`; `end_draw()` is then called
    /// once. Returns the number of frames drawn.
    pub fn run_with<F>(&mut self, frames: Option<u64>, mut input: F) -> Result<u64>
    where
        F: FnMut(u64) -> FrameInput,
    {
        let mut drawn = 0u64;

        while frames.is_none_or(|limit| drawn < limit) {
            if self.pacing && drawn > 0 {
                let wait = self.clock.until_next(self.sketch.frame_rate(), Instant::now());
                if !wait.is_zero() {
                    std::thread::sleep(wait);
                }
            }

            let frame_input = input(drawn);
            let control = self
                .frame(&frame_input)
                .with_context(|| format!("frame {} failed", self.sketch.frame_count()))?;
            drawn += 1;

            if control == AppControl::Exit {
                break;
            }
        }

        if !self.sketch.is_looping() && !self.ended {
            self.ended = true;
            log::debug!("loop stopped after {drawn} frame(s)");
            self.app.end_draw(&mut self.sketch);
        }

        Ok(drawn)
    }

    /// Releases all retained 3D geometry and hands back the app and surface.
    pub fn finish(mut self) -> (A, S) {
        self.sketch.teardown();
        (self.app, self.sketch.into_surface())
    }

    #[inline]
    pub fn sketch(&self) -> &Sketch<S> {
        &self.sketch
    }

    #[inline]
    pub fn sketch_mut(&mut self) -> &mut Sketch<S> {
        &mut self.sketch
    }

    #[inline]
    pub fn app(&self) -> &A {
        &self.app
    }

    #[inline]
    pub fn surface(&self) -> &S {
        self.sketch.surface()
    }
}
