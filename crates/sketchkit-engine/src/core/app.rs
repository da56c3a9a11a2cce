use crate::sketch::Sketch;
use crate::surface::Surface;

/// Control directive reported by the driver after each frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Sketch contract implemented by user code.
///
/// Every callback receives the drawing context. Only `draw` is required.
pub trait SketchApp<S: Surface> {
    /// Called once, inside the first frame, before the first `draw`.
    fn setup(&mut self, sketch: &mut Sketch<S>) {
        let _ = sketch;
    }

    /// Called once per frame.
    fn draw(&mut self, sketch: &mut Sketch<S>);

    /// First contact after a frame with none.
    fn touch_started(&mut self, sketch: &mut Sketch<S>) {
        let _ = sketch;
    }

    /// Contacts moved by at least [`MOVE_THRESHOLD`](crate::input::MOVE_THRESHOLD) in total.
    fn touch_moved(&mut self, sketch: &mut Sketch<S>) {
        let _ = sketch;
    }

    /// Last contact lifted.
    fn touch_ended(&mut self, sketch: &mut Sketch<S>) {
        let _ = sketch;
    }

    /// Called once when the loop stops.
    fn end_draw(&mut self, sketch: &mut Sketch<S>) {
        let _ = sketch;
    }
}
