use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::{ForwardChain, ForwardIter, ForwardIterMut};
use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugEntries;

/// A list with links in the forward direction only. The list starts with a ghost node acting as
/// the head sentinel, and the last node links to nothing.
///
/// A [`Cursor`](crate::cursor::Cursor) over a SinglyLinkedList can only move forward; attempting
/// to move backward reports [`Unsupported`](crate::cursor::CursorError::Unsupported).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `reverse` | `O(n)` |
pub struct SinglyLinkedList<T> {
    pub(crate) chain: ForwardChain<T, false>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty list. This allocates the ghost node.
    pub fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            chain: ForwardChain::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.chain.len
    }

    pub const fn is_empty(&self) -> bool {
        self.chain.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.chain.front()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.chain.front_mut()
    }

    pub fn back(&self) -> Option<&T> {
        self.chain.back()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.chain.back_mut()
    }

    pub fn push_front(&mut self, value: T) {
        self.chain.push_front(value)
    }

    pub fn push_back(&mut self, value: T) {
        self.chain.push_back(value)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    /// Removes the last value. This has to walk the whole list to find the new last node.
    pub fn pop_back(&mut self) -> Option<T> {
        self.chain.pop_back()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.chain.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.chain.get_mut(index)
    }

    /// Inserts `value` so that it ends up at `index`. An index equal to the length pushes to the
    /// back.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::SinglyLinkedList;
    /// let mut list: SinglyLinkedList<_> = [1, 3].into_iter().collect();
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 4).unwrap();
    /// assert!(list.insert(10, 5).is_err());
    /// assert!(list.iter().eq(&[1, 2, 3, 4]));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        self.chain.insert(index, value)
    }

    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.chain.remove(index)
    }

    pub fn replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        self.chain.replace(index, new_value)
    }

    pub fn clear(&mut self) {
        self.chain.clear()
    }

    /// Reverses the list in place by relinking its nodes.
    pub fn reverse(&mut self) {
        self.chain.reverse()
    }

    pub fn iter(&self) -> ForwardIter<'_, T> {
        self.chain.iter()
    }

    pub fn iter_mut(&mut self) -> ForwardIterMut<'_, T> {
        self.chain.iter_mut()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = ForwardIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = ForwardIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned iterator over a [`SinglyLinkedList`], popping values from the front.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}
