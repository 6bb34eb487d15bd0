use crate::RandSource;
use ::rand::{Rng, SeedableRng, rngs::StdRng};

#[cfg(feature = "parking-lot")]
use parking_lot::Mutex;
#[cfg(not(feature = "parking-lot"))]
use std::sync::{Mutex, PoisonError};

/// A reproducible `RandSource` backed by a seeded [`StdRng`].
///
/// Two sources built from the same seed produce the same sequence of draws,
/// which makes picks exact-match testable. The generator sits behind a mutex
/// so the source is `Send + Sync` and can be shared by pickers on several
/// threads; the interleaving across threads is then up to the scheduler.
///
/// # Example
/// ```
/// use quotepick::{RandSource, SeededRandom};
///
/// let a = SeededRandom::new(7);
/// let b = SeededRandom::new(7);
/// assert_eq!(a.rand(), b.rand());
/// ```
#[derive(Debug)]
pub struct SeededRandom {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Creates a source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The seed this source was created with.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewinds the source to the start of its sequence.
    pub fn reset(&self) {
        *self.lock() = StdRng::seed_from_u64(self.seed);
    }

    #[cfg(feature = "parking-lot")]
    fn lock(&self) -> parking_lot::MutexGuard<'_, StdRng> {
        self.rng.lock()
    }

    // A panic while drawing cannot leave the generator half-updated, so a
    // poisoned lock is still usable.
    #[cfg(not(feature = "parking-lot"))]
    fn lock(&self) -> std::sync::MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clone for SeededRandom {
    /// Clones the current position in the sequence, not just the seed.
    fn clone(&self) -> Self {
        Self {
            seed: self.seed,
            rng: Mutex::new(self.lock().clone()),
        }
    }
}

impl RandSource for SeededRandom {
    fn rand(&self) -> f64 {
        self.lock().random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(source: &SeededRandom, n: usize) -> Vec<f64> {
        (0..n).map(|_| source.rand()).collect()
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        assert_eq!(draws(&a, 64), draws(&b, 64));
    }

    #[test]
    fn different_seeds_diverge() {
        let a = SeededRandom::new(1);
        let b = SeededRandom::new(2);
        assert_ne!(draws(&a, 16), draws(&b, 16));
    }

    #[test]
    fn reset_rewinds_sequence() {
        let source = SeededRandom::new(9);
        let first = draws(&source, 8);
        source.reset();
        assert_eq!(draws(&source, 8), first);
    }

    #[test]
    fn clone_continues_from_current_position() {
        let source = SeededRandom::new(3);
        let _ = draws(&source, 5);
        let copy = source.clone();
        assert_eq!(copy.seed(), 3);
        assert_eq!(draws(&copy, 8), draws(&source, 8));
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let source = SeededRandom::new(0);
        assert!(draws(&source, 10_000).iter().all(|d| (0.0..1.0).contains(d)));
    }
}
