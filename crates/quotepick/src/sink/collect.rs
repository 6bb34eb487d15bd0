use crate::DisplaySink;
use core::convert::Infallible;
use std::vec::Vec;

/// A sink that records every item it is shown, in order.
///
/// Handy in tests and for callers that want to buffer picks before rendering
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectSink<T> {
    items: Vec<T>,
}

impl<T> CollectSink<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Items shown so far.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for CollectSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> DisplaySink<T> for CollectSink<T> {
    type Error = Infallible;

    fn show(&mut self, item: &T) -> Result<(), Self::Error> {
        self.items.push(item.clone());
        Ok(())
    }
}
