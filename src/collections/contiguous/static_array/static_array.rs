use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

use derive_more::{Display, Error, From, IsVariant};

use crate::collections::contiguous::Vector;
use crate::collections::contiguous::vector::IntoIter;
use crate::util::error::{CapacityExceeded, IndexOutOfBounds};

/// A contiguous collection with a capacity fixed at creation. This is the static array backend for
/// [`Cursor`](crate::cursor::Cursor)s.
///
/// Unlike [`Vector`], a StaticArray never reallocates, so operations which would exceed the
/// capacity fail with [`CapacityExceeded`] rather than growing.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the StaticArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
pub struct StaticArray<T> {
    pub(crate) inner: Vector<T>,
}

/// An error produced by inserting into a [`StaticArray`].
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum InsertError {
    /// The index was greater than the length of the StaticArray.
    IndexOutOfBounds(IndexOutOfBounds),
    /// The StaticArray was already full.
    CapacityExceeded(CapacityExceeded),
}

impl<T> StaticArray<T> {
    /// Creates a new, empty StaticArray which can hold exactly `cap` elements.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::StaticArray;
    /// let mut arr = StaticArray::with_cap(2);
    /// assert!(arr.push(1).is_ok());
    /// assert!(arr.push(2).is_ok());
    /// assert!(arr.push(3).is_err());
    /// assert_eq!(&*arr, &[1, 2]);
    /// ```
    pub fn with_cap(cap: usize) -> StaticArray<T> {
        StaticArray {
            inner: Vector::with_cap(cap),
        }
    }

    /// Creates a StaticArray holding every value from `iter`, with a capacity equal to the number
    /// of values.
    pub fn from_exact<I>(iter: I) -> StaticArray<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let mut arr = StaticArray::with_cap(iter.len());
        // An ExactSizeIterator could still lie about its length, so extra values are ignored
        // rather than trusted.
        for value in iter {
            if arr.push(value).is_err() {
                break;
            }
        }
        arr
    }

    /// Returns the number of values in the StaticArray.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the StaticArray contains no values.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns true if no more values can be added.
    pub const fn is_full(&self) -> bool {
        self.inner.len() == self.inner.cap()
    }

    /// Returns the fixed capacity of the StaticArray.
    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Pushes `value` onto the end of the StaticArray, or returns an error if it is full.
    pub fn push(&mut self, value: T) -> Result<(), CapacityExceeded> {
        self.check_space()?;
        // SAFETY: check_space guarantees there is room for one more value.
        unsafe {
            self.inner.push_unchecked(value);
        }
        Ok(())
    }

    /// Removes and returns the last value, if any.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Inserts `value` at `index`, shifting later values along.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), InsertError> {
        self.inner.check_insert_index(index)?;
        self.check_space()?;
        // Vector won't grow here, because there is spare capacity.
        self.inner.try_insert(index, value)?;
        Ok(())
    }

    /// Removes and returns the value at `index`, shifting later values back.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.inner.try_remove(index)
    }

    /// Replaces the value at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        self.inner.try_replace(index, new_value)
    }

    /// Drops every value, keeping the capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    const fn check_space(&self) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            Err(CapacityExceeded { cap: self.cap() })
        } else {
            Ok(())
        }
    }
}

impl<T> Deref for StaticArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for StaticArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> IntoIterator for StaticArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<T> FromIterator<T> for StaticArray<T> {
    /// Collects into a StaticArray whose capacity is exactly the number of values collected.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut inner: Vector<T> = iter.into_iter().collect();
        inner.shrink_to_fit();
        StaticArray { inner }
    }
}

impl<T: Clone> Clone for StaticArray<T> {
    fn clone(&self) -> Self {
        StaticArray {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for StaticArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for StaticArray<T> {}

impl<T: Debug> Debug for StaticArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticArray")
            .field("contents", &&**self)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}
