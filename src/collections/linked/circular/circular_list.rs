use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::{ForwardChain, ForwardIter, ForwardIterMut};
use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugEntries;

/// A singly linked list whose last node links back round to the start, forming a ring.
///
/// The ring always passes through a ghost node, which holds no value. Traversal (whether by
/// iterator or [`Cursor`](crate::cursor::Cursor)) starts after the ghost and stops when it comes
/// back to it, so a full lap visits exactly `len` values. Like [`SinglyLinkedList`], the ring can
/// only be traversed forwards.
///
/// [`SinglyLinkedList`]: super::super::SinglyLinkedList
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the CircularList.
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
/// | `rotate_left` | `O(1)` |
/// | `rotate_right` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
pub struct CircularList<T> {
    pub(crate) chain: ForwardChain<T, true>,
}

impl<T> CircularList<T> {
    /// Creates a new, empty ring. This allocates the ghost node, which links to itself.
    pub fn new() -> CircularList<T> {
        CircularList {
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

    pub fn pop_back(&mut self) -> Option<T> {
        self.chain.pop_back()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.chain.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.chain.get_mut(index)
    }

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

    /// Reverses the direction of the ring, so that the first value becomes the last.
    pub fn reverse(&mut self) {
        self.chain.reverse()
    }

    /// Moves the first value to the back of the ring, by moving the ghost one step forward.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::CircularList;
    /// let mut ring: CircularList<_> = [1, 2, 3].into_iter().collect();
    /// ring.rotate_left();
    /// assert!(ring.iter().eq(&[2, 3, 1]));
    /// ```
    pub fn rotate_left(&mut self) {
        let chain = &mut self.chain;
        if chain.len < 2 {
            return;
        }
        let first = chain.first();
        chain.ghost.set_next(first.next());
        first.set_next(Some(chain.ghost));
        chain.tail.set_next(Some(first));
        chain.tail = first;
    }

    /// Moves the last value to the front of the ring, by moving the ghost one step backward.
    pub fn rotate_right(&mut self) {
        let chain = &mut self.chain;
        if chain.len < 2 {
            return;
        }
        let last = chain.tail;
        let before = chain.seek_before(chain.len - 1);
        before.set_next(Some(chain.ghost));
        last.set_next(chain.ghost.next());
        chain.ghost.set_next(Some(last));
        chain.tail = before;
    }

    pub fn iter(&self) -> ForwardIter<'_, T> {
        self.chain.iter()
    }

    pub fn iter_mut(&mut self) -> ForwardIterMut<'_, T> {
        self.chain.iter_mut()
    }
}

impl<T: PartialEq> CircularList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T> IntoIterator for CircularList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;

    type IntoIter = ForwardIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularList<T> {
    type Item = &'a mut T;

    type IntoIter = ForwardIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned iterator over a [`CircularList`], popping values from the front. It yields each value
/// once, it doesn't cycle.
pub struct IntoIter<T> {
    list: CircularList<T>,
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

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: Debug> Debug for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}
