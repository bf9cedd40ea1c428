//! Injectable random source.
//!
//! Every randomized decision takes a `&mut impl RandomSource` so that tests can
//! script draws and parallel workers can each own an independent stream.
//! Any [`rand::Rng`] is a `RandomSource`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces uniform integers and reals in a range.
pub trait RandomSource {
    /// Uniform integer in `[low, high]` (inclusive). Requires `low <= high`.
    fn uniform_int(&mut self, low: u64, high: u64) -> u64;

    /// Uniform real in `[low, high)`. Returns `low` when the range is empty.
    fn uniform_real(&mut self, low: f64, high: f64) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn uniform_int(&mut self, low: u64, high: u64) -> u64 {
        self.random_range(low..=high)
    }

    fn uniform_real(&mut self, low: f64, high: f64) -> f64 {
        if high > low {
            self.random_range(low..high)
        } else {
            low
        }
    }
}

/// Creates a seeded standard RNG.
///
/// ```
/// use u_dispatch::random::{create_rng, RandomSource};
///
/// let mut a = create_rng(42);
/// let mut b = create_rng(42);
/// assert_eq!(a.uniform_int(1, 100), b.uniform_int(1, 100));
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seed for trial `index` of a run seeded with `seed`.
///
/// Spreads consecutive indices apart (SplitMix64 finalizer) so that
/// neighbouring trials get unrelated streams.
pub fn trial_seed(seed: u64, index: u64) -> u64 {
    let mut z = seed.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;

    use super::RandomSource;

    /// Replays fixed draws. Panics when a draw is requested that was not
    /// scripted, which doubles as an assertion that no entropy is consumed.
    #[derive(Debug, Default)]
    pub struct ScriptedSource {
        ints: VecDeque<u64>,
        reals: VecDeque<f64>,
    }

    impl ScriptedSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_ints(mut self, ints: &[u64]) -> Self {
            self.ints.extend(ints);
            self
        }

        pub fn with_reals(mut self, reals: &[f64]) -> Self {
            self.reals.extend(reals);
            self
        }

        pub fn is_exhausted(&self) -> bool {
            self.ints.is_empty() && self.reals.is_empty()
        }
    }

    impl RandomSource for ScriptedSource {
        fn uniform_int(&mut self, low: u64, high: u64) -> u64 {
            let v = self.ints.pop_front().expect("unscripted integer draw");
            assert!(v >= low && v <= high, "scripted {v} outside [{low}, {high}]");
            v
        }

        fn uniform_real(&mut self, low: f64, high: f64) -> f64 {
            let v = self.reals.pop_front().expect("unscripted real draw");
            assert!(v >= low && v < high, "scripted {v} outside [{low}, {high})");
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_int_bounds() {
        let mut rng = create_rng(7);
        for _ in 0..1000 {
            let v = rng.uniform_int(1, 5);
            assert!((1..=5).contains(&v));
        }
        assert_eq!(rng.uniform_int(3, 3), 3);
    }

    #[test]
    fn test_uniform_real_bounds() {
        let mut rng = create_rng(7);
        for _ in 0..1000 {
            let v = rng.uniform_real(0.0, 2.5);
            assert!((0.0..2.5).contains(&v));
        }
        assert_eq!(rng.uniform_real(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_seeded_reproducible() {
        let mut a = create_rng(99);
        let mut b = create_rng(99);
        let xs: Vec<u64> = (0..10).map(|_| a.uniform_int(0, 1000)).collect();
        let ys: Vec<u64> = (0..10).map(|_| b.uniform_int(0, 1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_trial_seed_distinct() {
        let seeds: std::collections::HashSet<u64> = (0..100).map(|i| trial_seed(1, i)).collect();
        assert_eq!(seeds.len(), 100);
        assert_eq!(trial_seed(5, 3), trial_seed(5, 3));
        assert_ne!(trial_seed(5, 3), trial_seed(6, 3));
    }
}
