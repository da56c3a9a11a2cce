use crate::coords::Affine2;

use super::SketchSettings;

/// LIFO of saved snapshots.
///
/// Popping an empty stack is a programming error and panics with `what` in the
/// message, so an unbalanced `pop()` is caught at the offending call.
#[derive(Debug, Clone)]
pub struct SnapshotStack<T> {
    what: &'static str,
    items: Vec<T>,
}

pub type SettingsStack = SnapshotStack<SketchSettings>;
pub type MatrixStack = SnapshotStack<Affine2>;

impl<T> SnapshotStack<T> {
    pub const fn new(what: &'static str) -> Self {
        Self { what, items: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, snapshot: T) {
        self.items.push(snapshot);
    }

    /// # Panics
    /// Panics if the stack is empty.
    #[track_caller]
    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(v) => v,
            None => panic!("{} stack popped more times than pushed", self.what),
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every snapshot. Used by the frame driver to recover after an unbalanced frame.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Empties the stack and returns the oldest snapshot, i.e. the state before the
    /// first unmatched push.
    pub fn unwind(&mut self) -> Option<T> {
        self.items.drain(..).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_order() {
        let mut s = SnapshotStack::new("test");
        s.push(1);
        s.push(2);
        assert_eq!(s.depth(), 2);
        assert_eq!(s.pop(), 2);
        assert_eq!(s.pop(), 1);
        assert!(s.is_empty());
    }

    #[test]
    fn unwind_returns_the_oldest_snapshot() {
        let mut s = SnapshotStack::new("test");
        assert_eq!(s.unwind(), None::<u8>);
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.unwind(), Some(1));
        assert!(s.is_empty());
    }

    #[test]
    #[should_panic(expected = "matrix stack popped more times than pushed")]
    fn pop_empty_panics() {
        let mut s: MatrixStack = SnapshotStack::new("matrix");
        s.pop();
    }
}
