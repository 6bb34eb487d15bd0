use core::convert::Infallible;

/// A collaborator that receives picked items, typically to display them.
///
/// The picker never depends on a concrete rendering technology; anything
/// implementing `show` will do. Any `FnMut(&T)` closure is a sink that cannot
/// fail.
///
/// # Example
/// ```
/// use quotepick::{DisplaySink, RandomPicker, SequenceRandom};
///
/// let items: [&'static str; 3] = ["a", "b", "c"];
/// let picker = RandomPicker::new(&items, SequenceRandom::constant(0.0));
///
/// let mut shown = None;
/// let mut sink = |item: &&'static str| shown = Some(*item);
/// picker.pick_into(&mut sink).unwrap();
/// assert_eq!(shown, Some("a"));
/// ```
pub trait DisplaySink<T: ?Sized> {
    /// Error returned when the item cannot be shown.
    type Error;

    /// Shows `item`.
    fn show(&mut self, item: &T) -> Result<(), Self::Error>;
}

impl<T, F> DisplaySink<T> for F
where
    T: ?Sized,
    F: FnMut(&T),
{
    type Error = Infallible;

    fn show(&mut self, item: &T) -> Result<(), Self::Error> {
        self(item);
        Ok(())
    }
}
