use super::Container;
use crate::util::error::IndexOutOfBounds;

/// A collection which can access an element by index in constant time.
pub trait RandomAccess<T>: Container {
    fn get(&self, index: usize) -> Option<&T>;

    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Replaces the element at `index`, returning the old value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` doesn't refer to an element.
    fn replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds>;
}
