use crate::RandSource;
use portable_atomic::{AtomicUsize, Ordering};
use std::vec::Vec;

/// A `RandSource` that replays a fixed list of draws, cycling when it runs
/// out.
///
/// Draws are returned as given, without range checks, which makes this the
/// tool for pinning boundary cases such as a draw of exactly `1.0`. The cursor
/// is atomic, so a shared source hands out each draw exactly once per cycle
/// even across threads.
///
/// An empty list yields `0.0` forever.
///
/// # Example
/// ```
/// use quotepick::{RandSource, SequenceRandom};
///
/// let rng = SequenceRandom::new([0.5, 0.1]);
/// assert_eq!(rng.rand(), 0.5);
/// assert_eq!(rng.rand(), 0.1);
/// assert_eq!(rng.rand(), 0.5);
/// ```
#[derive(Debug)]
pub struct SequenceRandom {
    draws: Vec<f64>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    /// Creates a source that replays `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Creates a source that always returns `draw`.
    pub fn constant(draw: f64) -> Self {
        Self::new([draw])
    }

    /// The draws this source cycles through.
    pub fn draws(&self) -> &[f64] {
        &self.draws
    }
}

impl Clone for SequenceRandom {
    fn clone(&self) -> Self {
        Self {
            draws: self.draws.clone(),
            cursor: AtomicUsize::new(self.cursor.load(Ordering::Relaxed)),
        }
    }
}

impl RandSource for SequenceRandom {
    fn rand(&self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.draws[i % self.draws.len()]
    }
}
