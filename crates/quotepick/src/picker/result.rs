/// The outcome of a single pick: the chosen item and where it sits in the
/// list.
///
/// A `PickResult` borrows from the item list it was picked from and is built
/// fresh on every pick. Pickers never keep it around.
///
/// With the `serde` feature enabled this serializes as
/// `{"item": ..., "index": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PickResult<'a, T> {
    /// The picked item.
    pub item: &'a T,
    /// Position of `item` in the list, always `< list.len()`.
    pub index: usize,
}

impl<'a, T> PickResult<'a, T> {
    /// Returns the picked item.
    pub const fn item(&self) -> &'a T {
        self.item
    }

    /// Returns the index of the picked item.
    pub const fn index(&self) -> usize {
        self.index
    }
}
