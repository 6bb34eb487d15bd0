#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, PickResult, RandSource, Result};

/// Maps a draw onto an index of a list with `len` items.
///
/// Computes `floor(draw * len)` and clamps it into `0..len`:
/// - a draw of exactly `1.0` (or anything larger) maps to `len - 1`
/// - negative draws and NaN map to `0`
///
/// Returns `None` when `len == 0`, since no index is valid.
///
/// # Example
/// ```
/// use quotepick::index_for;
///
/// assert_eq!(index_for(0.0, 3), Some(0));
/// assert_eq!(index_for(0.5, 3), Some(1));
/// assert_eq!(index_for(1.0, 3), Some(2));
/// assert_eq!(index_for(0.5, 0), None);
/// ```
#[inline]
pub fn index_for(draw: f64, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    // Float-to-int casts truncate toward zero and saturate, which is `floor`
    // for non-negative values and sends negatives and NaN to 0.
    let scaled = (draw * len as f64) as usize;
    Some(scaled.min(last))
}

/// Picks one item from `list` uniformly at random, drawing once from
/// `source`.
///
/// This is the stateless core of [`RandomPicker`]: it never mutates `list`,
/// performs no I/O and keeps nothing between calls.
///
/// # Errors
/// Returns [`Error::InvalidInput`] if `list` is empty. The source is not
/// consulted in that case.
///
/// # Example
/// ```
/// use quotepick::{pick, SequenceRandom};
///
/// let list = ["a", "b", "c"];
/// let result = pick(&list, &SequenceRandom::constant(0.5)).unwrap();
/// assert_eq!(result.index, 1);
/// assert_eq!(*result.item, "b");
/// ```
///
/// [`RandomPicker`]: crate::RandomPicker
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = list.len())))]
pub fn pick<'a, T, R>(list: &'a [T], source: &R) -> Result<PickResult<'a, T>>
where
    R: RandSource + ?Sized,
{
    if list.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("refusing to pick from an empty list");
        return Err(Error::InvalidInput);
    }

    let draw = source.rand();
    let index = index_for(draw, list.len()).ok_or(Error::InvalidInput)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(draw, index, "picked");

    Ok(PickResult {
        item: &list[index],
        index,
    })
}
