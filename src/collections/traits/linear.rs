use std::error::Error;

use super::Container;

/// A collection which can push and pop values at both of its ends.
///
/// Not every implementor can do so cheaply, a [`Vector`](crate::collections::contiguous::Vector)
/// moves every element to push to the front for example. The adapters in
/// [`adapters`](crate::collections::adapters) are generic over this trait, and use whichever ends
/// they need.
pub trait Linear<T>: Container {
    /// The error produced when a value can't be pushed. Collections that grow use
    /// [`Infallible`](std::convert::Infallible).
    type Error: Error;

    /// Adds a value to the front of the collection.
    ///
    /// # Errors
    /// Returns [`Self::Error`] if the collection can't hold another value.
    fn push_front(&mut self, value: T) -> Result<(), Self::Error>;

    /// Adds a value to the back of the collection.
    ///
    /// # Errors
    /// Returns [`Self::Error`] if the collection can't hold another value.
    fn push_back(&mut self, value: T) -> Result<(), Self::Error>;

    fn pop_front(&mut self) -> Option<T>;

    fn pop_back(&mut self) -> Option<T>;

    fn front(&self) -> Option<&T>;

    fn back(&self) -> Option<&T>;
}
