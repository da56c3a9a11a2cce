use std::ops::{Deref, DerefMut};

use crate::surface::Surface;

use super::Sketch;

/// Scope guard returned by [`Sketch::push_scope`]; pops on drop.
///
/// Derefs to the sketch, so drawing continues through the guard:
///
/// ```ignore
/// {
///     let mut s = sketch.push_scope();
///     s.translate(10, 10);
///     s.rect(0, 0, 5, 5);
/// } // pop() here
/// ```
///
/// Do not call `pop()` yourself inside the scope.
pub struct PushGuard<'a, S: Surface> {
    sketch: &'a mut Sketch<S>,
}

impl<S: Surface> Deref for PushGuard<'_, S> {
    type Target = Sketch<S>;

    fn deref(&self) -> &Sketch<S> {
        self.sketch
    }
}

impl<S: Surface> DerefMut for PushGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut Sketch<S> {
        self.sketch
    }
}

impl<S: Surface> Drop for PushGuard<'_, S> {
    fn drop(&mut self) {
        // a second panic while unwinding would abort
        if !std::thread::panicking() {
            self.sketch.pop();
        }
    }
}

impl<S: Surface> Sketch<S> {
    /// Saves the full style record.
    pub fn push_style(&mut self) {
        self.style_stack.push(self.settings.clone());
    }

    /// Restores the most recently saved style record as a whole.
    ///
    /// # Panics
    /// Panics if there is no matching `push_style`.
    #[track_caller]
    pub fn pop_style(&mut self) {
        self.settings = self.style_stack.pop();
    }

    /// Saves the current transform.
    pub fn push_matrix(&mut self) {
        self.matrix_stack.push(self.matrix);
    }

    /// Restores exactly the transform saved by the matching `push_matrix`.
    ///
    /// # Panics
    /// Panics if there is no matching `push_matrix`.
    #[track_caller]
    pub fn pop_matrix(&mut self) {
        self.matrix = self.matrix_stack.pop();
    }

    /// `push_style` + `push_matrix`; in 3D mode also opens a scene branch.
    pub fn push(&mut self) {
        self.push_style();
        self.push_matrix();
        let branched = self.enable_3d && self.scene_open;
        if branched {
            self.scene.push_branch();
        }
        self.branch_marks.push(branched);
    }

    /// `pop_style` + `pop_matrix`; also closes the scene branch if the matching
    /// `push` opened one.
    ///
    /// # Panics
    /// Panics if there is no matching `push`.
    #[track_caller]
    pub fn pop(&mut self) {
        self.pop_style();
        self.pop_matrix();
        if self.branch_marks.pop() == Some(true) {
            self.scene.pop_branch();
        }
    }

    /// `push()` now, `pop()` when the guard drops.
    pub fn push_scope(&mut self) -> PushGuard<'_, S> {
        self.push();
        PushGuard { sketch: self }
    }

    /// Runs `f` between `push()` and `pop()`.
    pub fn with_push<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut guard = self.push_scope();
        f(&mut guard)
    }

    #[inline]
    pub fn style_depth(&self) -> usize {
        self.style_stack.depth()
    }

    #[inline]
    pub fn matrix_depth(&self) -> usize {
        self.matrix_stack.depth()
    }

    /// Open 3D branches.
    #[inline]
    pub fn node_depth(&self) -> usize {
        self.scene.branch_depth()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sketch;
    use crate::paint::{Color, ColorMode};
    use crate::style::{ShapeMode, StrokeCap};

    // ── balance ───────────────────────────────────────────────────────────

    #[test]
    fn n_pushes_then_n_pops_restore_bit_for_bit() {
        let mut s = sketch();
        s.translate(3.25, -7);
        s.rotate(0.3);
        s.fill((12, 34, 56));
        let style0 = s.settings().clone();
        let matrix0 = s.current_matrix();

        for i in 0..5 {
            s.push();
            s.translate(i, i * 2);
            s.rotate(0.1 * f64::from(i));
            s.scale(1.5, 0.5);
            s.stroke_weight(i);
            s.color_mode(ColorMode::Hsb);
            s.fill((i * 30, 50, 50));
            s.rect_mode(ShapeMode::Center);
        }
        for _ in 0..5 {
            s.pop();
        }

        assert_eq!(*s.settings(), style0);
        assert_eq!(s.current_matrix(), matrix0);
        assert_eq!(s.style_depth(), 0);
        assert_eq!(s.matrix_depth(), 0);
    }

    #[test]
    fn style_and_matrix_stacks_are_independent() {
        let mut s = sketch();
        s.push_style();
        s.push_matrix();
        s.stroke_cap(StrokeCap::Square);
        s.translate(10, 0);

        s.pop_style();
        assert_eq!(s.settings().stroke_cap, StrokeCap::Round);
        assert_eq!(s.current_translation().x, 10.0);

        s.pop_matrix();
        assert_eq!(s.current_translation().x, 0.0);
    }

    #[test]
    #[should_panic(expected = "style stack popped more times than pushed")]
    fn pop_on_empty_panics() {
        sketch().pop();
    }

    #[test]
    #[should_panic(expected = "matrix stack popped more times than pushed")]
    fn pop_matrix_on_empty_panics() {
        sketch().pop_matrix();
    }

    // ── scope guard ───────────────────────────────────────────────────────

    #[test]
    fn guard_pops_on_drop() {
        let mut s = sketch();
        {
            let mut g = s.push_scope();
            g.fill(Color::rgb(1.0, 2.0, 3.0));
            g.translate(5, 5);
            assert_eq!(g.style_depth(), 1);
        }
        assert_eq!(s.style_depth(), 0);
        assert_eq!(s.settings().fill, Color::gray(255.0));
        assert!(s.current_matrix().is_identity());
    }

    #[test]
    fn with_push_returns_the_closure_value() {
        let mut s = sketch();
        let depth = s.with_push(|s| {
            s.scale_uniform(2);
            s.matrix_depth()
        });
        assert_eq!(depth, 1);
        assert_eq!(s.current_scale().x, 1.0);
    }

    #[test]
    fn push_in_3d_branches_the_scene() {
        let mut s = sketch();
        s.create_3d();
        let before = s.scene().current();
        s.push();
        assert_eq!(s.node_depth(), 1);
        assert_ne!(s.scene().current(), before);
        s.pop();
        assert_eq!(s.scene().current(), before);
    }

    #[test]
    fn create_3d_between_push_and_pop_stays_balanced() {
        let mut s = sketch();
        s.push();
        s.create_3d();
        s.push();
        assert_eq!(s.node_depth(), 1);
        s.pop();
        s.pop();
        assert_eq!(s.node_depth(), 0);
        assert_eq!(s.style_depth(), 0);
        s.end_frame().unwrap();
    }

    #[test]
    fn guard_does_not_pop_again_while_unwinding() {
        let mut s = sketch();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut g = s.push_scope();
            g.pop();
            panic!("draw failed");
        }));
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"draw failed"));
        assert_eq!(s.style_depth(), 0);
    }
}
