//! Pluggable random source for randomize and ion-mode policies.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer draws over an inclusive range.
///
/// Implementations must return a value within `[low, high]` (bounds are
/// swapped when given in reverse order).
pub trait RandomSource {
    fn next_in_range(&mut self, low: i64, high: i64) -> i64;
}

/// Process thread RNG. Not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        let (low, high) = ordered(low, high);
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Seeded RNG for reproducible sequences.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        let (low, high) = ordered(low, high);
        self.rng.gen_range(low..=high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        (**self).next_in_range(low, high)
    }
}

fn ordered(low: i64, high: i64) -> (i64, i64) {
    if low <= high {
        (low, high)
    } else {
        (high, low)
    }
}

#[cfg(test)]
mod tests {
    use super::{RandomSource, SeededRandom, ThreadRandom};

    #[test]
    fn draws_stay_in_range() {
        let mut thread = ThreadRandom;
        let mut seeded = SeededRandom::new(7);
        for _ in 0..500 {
            let a = thread.next_in_range(-2, 2);
            let b = seeded.next_in_range(1, 12);
            assert!((-2..=2).contains(&a));
            assert!((1..=12).contains(&b));
        }
        assert_eq!(seeded.next_in_range(5, 5), 5);
        assert!((0..=3).contains(&seeded.next_in_range(3, 0)));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut first = SeededRandom::new(42);
        let mut second = SeededRandom::new(42);
        let a = (0..20).map(|_| first.next_in_range(0, 1000)).collect::<Vec<_>>();
        let b = (0..20).map(|_| second.next_in_range(0, 1000)).collect::<Vec<_>>();
        assert_eq!(a, b);
    }
}
