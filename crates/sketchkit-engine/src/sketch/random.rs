use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::numeric::Numeric;
use crate::surface::Surface;

use super::Sketch;

impl<S: Surface> Sketch<S> {
    /// Uniform value in `[0, high]`.
    pub fn random(&mut self, high: impl Numeric) -> f64 {
        self.random_range(0.0, high)
    }

    /// Uniform value between `low` and `high`, inclusive, in either order.
    pub fn random_range(&mut self, low: impl Numeric, high: impl Numeric) -> f64 {
        let (a, b) = (low.to_f64(), high.to_f64());
        if !(a.is_finite() && b.is_finite()) {
            log::debug!("random_range({a}, {b}): non-finite bound");
            return a;
        }
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.rng.gen_range(lo..=hi)
    }

    /// Restarts the generator so the same sequence repeats.
    pub fn random_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sketch;

    #[test]
    fn values_stay_in_range_either_order() {
        let mut s = sketch();
        for _ in 0..200 {
            let v = s.random_range(10, -10);
            assert!((-10.0..=10.0).contains(&v));
            let w = s.random(3);
            assert!((0.0..=3.0).contains(&w));
        }
        assert_eq!(s.random_range(4, 4), 4.0);
    }

    #[test]
    fn seeding_repeats_the_sequence() {
        let mut s = sketch();
        s.random_seed(7);
        let a: Vec<f64> = (0..5).map(|_| s.random(100)).collect();
        s.random_seed(7);
        let b: Vec<f64> = (0..5).map(|_| s.random(100)).collect();
        assert_eq!(a, b);
    }
}
