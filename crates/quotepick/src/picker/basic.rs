#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{DisplaySink, Error, PickResult, RandSource, Result, pick};

/// A random picker over a fixed, borrowed list of items.
///
/// The picker holds a read-only view of the list and exclusively owns its
/// [`RandSource`]. It keeps no other state, so every pick is independent and
/// a picker shared across threads is race-free as long as `T` and `R` are
/// `Sync`.
///
/// An empty list is accepted at construction, but every pick from it fails
/// with [`Error::InvalidInput`].
///
/// ## Features
/// - ✅ Uniform selection (`floor(draw * len)`, clamped into range)
/// - ✅ Pluggable randomness (thread-local, seeded or scripted)
/// - ✅ Display decoupled through [`DisplaySink`]
///
/// # Example
/// ```
/// use quotepick::{QUOTES, RandomPicker, ThreadRandom};
///
/// let picker = RandomPicker::new(QUOTES, ThreadRandom);
/// let result = picker.pick().unwrap();
/// assert_eq!(QUOTES[result.index], *result.item);
/// ```
#[derive(Debug, Clone)]
pub struct RandomPicker<'a, T, R>
where
    R: RandSource,
{
    items: &'a [T],
    rng: R,
}

impl<'a, T, R> RandomPicker<'a, T, R>
where
    R: RandSource,
{
    /// Creates a new [`RandomPicker`] over `items`, drawing from `rng`.
    ///
    /// # Parameters
    /// - `items`: The list to pick from; never mutated
    /// - `rng`: A [`RandSource`] producing draws in `[0, 1)`
    pub const fn new(items: &'a [T], rng: R) -> Self {
        Self { items, rng }
    }

    /// The list this picker selects from.
    pub const fn items(&self) -> &'a [T] {
        self.items
    }

    /// Number of items available.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there is nothing to pick.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The randomness source.
    pub const fn rng(&self) -> &R {
        &self.rng
    }

    /// Consumes the picker, returning its randomness source.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Picks one item uniformly at random.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if the list is empty.
    pub fn pick(&self) -> Result<PickResult<'a, T>> {
        pick(self.items, &self.rng)
    }

    /// Picks one item and forwards it to `sink`.
    ///
    /// The sink is only called after a successful pick: an empty list fails
    /// with [`Error::InvalidInput`] and leaves the sink untouched, so callers
    /// can surface the failure instead of showing a stale item.
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] if the list is empty
    /// - [`Error::Sink`] if the sink rejects the item
    ///
    /// # Example
    /// ```
    /// use quotepick::{CollectSink, RandomPicker, SequenceRandom};
    ///
    /// let items = ["a", "b"];
    /// let picker = RandomPicker::new(&items, SequenceRandom::constant(0.99999));
    /// let mut sink = CollectSink::new();
    ///
    /// let result = picker.pick_into(&mut sink).unwrap();
    /// assert_eq!(result.index, 1);
    /// assert_eq!(sink.items(), ["b"]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = self.items.len())))]
    pub fn pick_into<S>(&self, sink: &mut S) -> Result<PickResult<'a, T>, Error<S::Error>>
    where
        S: DisplaySink<T> + ?Sized,
    {
        let result = self.pick().map_err(Error::<S::Error>::widen)?;
        sink.show(result.item).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::warn!(index = result.index, "display sink rejected picked item");
            Error::Sink(e)
        })?;
        Ok(result)
    }
}
