use crate::RandSource;
use ::rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and automatically
/// reseeded periodically.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free and safe. This type does **not** store the RNG itself; it
/// simply accesses the thread-local generator on each call.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn rand(&self) -> f64 {
        // `StandardUniform` samples f64 in [0, 1)
        rng().random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_unit_interval() {
        let rng = ThreadRandom;
        for _ in 0..10_000 {
            let draw = rng.rand();
            assert!((0.0..1.0).contains(&draw), "draw out of range: {draw}");
        }
    }
}
