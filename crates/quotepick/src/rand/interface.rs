/// A source of uniformly distributed draws in the half-open interval `[0, 1)`.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Implementations take `&self`, so any state they
/// keep must live behind interior mutability.
///
/// Draws outside `[0, 1)` are tolerated by the picker: values at or above
/// `1.0` land on the last item and values below zero land on the first.
///
/// # Example
/// ```
/// use quotepick::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn rand(&self) -> f64 {
///         0.25
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 0.25);
/// ```
pub trait RandSource {
    /// Returns the next draw.
    fn rand(&self) -> f64;
}

impl<R> RandSource for &R
where
    R: RandSource + ?Sized,
{
    fn rand(&self) -> f64 {
        (**self).rand()
    }
}

#[cfg(feature = "std")]
impl<R> RandSource for std::boxed::Box<R>
where
    R: RandSource + ?Sized,
{
    fn rand(&self) -> f64 {
        (**self).rand()
    }
}

#[cfg(feature = "std")]
impl<R> RandSource for std::sync::Arc<R>
where
    R: RandSource + ?Sized,
{
    fn rand(&self) -> f64 {
        (**self).rand()
    }
}
