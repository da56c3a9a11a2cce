use crate::coords::Vec2;

use super::FrameInput;

/// Summed contact displacement (logical px) below which a tick is not a move.
pub const MOVE_THRESHOLD: f64 = 1.0;

/// Edges detected between two consecutive ticks.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TouchTransitions {
    /// More contacts than last tick.
    pub started: bool,
    /// Same number of contacts, moved by more than [`MOVE_THRESHOLD`] in total.
    pub moved: bool,
    /// Fewer contacts than last tick.
    pub ended: bool,
}

impl TouchTransitions {
    #[inline]
    pub fn any(self) -> bool {
        self.started || self.moved || self.ended
    }
}

/// Current touch contacts.
///
/// Holds what is down now; per-tick edges come back from [`TouchState::apply`].
#[derive(Debug, Clone, Default)]
pub struct TouchState {
    touches: Vec<Vec2>,
}

impl TouchState {
    /// Replaces the contact set with this tick's samples and reports the edges.
    pub fn apply(&mut self, input: &FrameInput) -> TouchTransitions {
        let prev = std::mem::replace(&mut self.touches, input.touches.clone());

        let mut t = TouchTransitions::default();
        if self.touches.len() > prev.len() {
            t.started = true;
        } else if self.touches.len() < prev.len() {
            t.ended = true;
        } else if !prev.is_empty() {
            let travelled: f64 = prev.iter().zip(&self.touches).map(|(a, b)| a.dist(*b)).sum();
            t.moved = travelled > MOVE_THRESHOLD;
        }
        t
    }

    #[inline]
    pub fn touches(&self) -> &[Vec2] {
        &self.touches
    }

    #[inline]
    pub fn touched(&self) -> bool {
        !self.touches.is_empty()
    }

    /// First contact, if any.
    #[inline]
    pub fn primary(&self) -> Option<Vec2> {
        self.touches.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(points: &[(f64, f64)]) -> FrameInput {
        FrameInput::with_touches(points.iter().map(|&(x, y)| Vec2::new(x, y)).collect::<Vec<_>>())
    }

    #[test]
    fn press_move_release_sequence() {
        let mut s = TouchState::default();

        let t = s.apply(&at(&[(10.0, 10.0)]));
        assert!(t.started && !t.moved && !t.ended);
        assert!(s.touched());

        let t = s.apply(&at(&[(15.0, 10.0)]));
        assert!(t.moved && !t.started);
        assert_eq!(s.primary(), Some(Vec2::new(15.0, 10.0)));

        let t = s.apply(&at(&[]));
        assert!(t.ended);
        assert!(!s.touched());
    }

    #[test]
    fn jitter_below_threshold_is_not_a_move() {
        let mut s = TouchState::default();
        s.apply(&at(&[(10.0, 10.0), (50.0, 50.0)]));
        let t = s.apply(&at(&[(10.4, 10.0), (50.0, 50.5)]));
        assert!(!t.any());
    }

    #[test]
    fn displacement_is_summed_over_contacts() {
        let mut s = TouchState::default();
        s.apply(&at(&[(0.0, 0.0), (0.0, 0.0)]));
        let t = s.apply(&at(&[(0.6, 0.0), (0.6, 0.0)]));
        assert!(t.moved);
    }

    #[test]
    fn idle_ticks_report_nothing() {
        let mut s = TouchState::default();
        assert!(!s.apply(&FrameInput::default()).any());
    }
}
