use core::fmt;

/// A result type whose error defaults to a sink that cannot fail.
///
/// Plain picks only ever fail with [`Error::InvalidInput`]. Picks that also
/// forward the item to a [`DisplaySink`] carry the sink's error type in `E`.
///
/// [`DisplaySink`]: crate::DisplaySink
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `quotepick` can produce.
///
/// The generic parameter `E` is the error type of the [`DisplaySink`] used by
/// [`RandomPicker::pick_into`]. Picks that never touch a sink use the
/// `Infallible` default, so the `Sink` variant can never be observed there.
///
/// [`DisplaySink`]: crate::DisplaySink
/// [`RandomPicker::pick_into`]: crate::RandomPicker::pick_into
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error<E = core::convert::Infallible> {
    /// The item list was empty, so there is nothing to pick.
    ///
    /// This is never replaced by a fallback item. Callers wired to a trigger
    /// are expected to surface it.
    InvalidInput,

    /// The display sink rejected the picked item.
    Sink(E),
}

impl<E> Error<E> {
    /// Returns `true` if this is an [`Error::InvalidInput`].
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput)
    }

    /// Re-types an error that carries no sink failure.
    ///
    /// Used to lift errors from [`pick`](crate::pick) into the sink-aware
    /// error of [`RandomPicker::pick_into`](crate::RandomPicker::pick_into).
    pub fn widen(err: Error) -> Self {
        match err {
            Error::InvalidInput => Self::InvalidInput,
            Error::Sink(never) => match never {},
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(fmt, "cannot pick from an empty item list"),
            Self::Sink(e) => write!(fmt, "display sink failed: {e:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
