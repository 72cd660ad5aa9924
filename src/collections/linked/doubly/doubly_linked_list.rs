use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::collections::linked::NodePtr;
use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A list with links in both directions. A single ghost node closes the list into a ring: its
/// `next` is the first node and its `prev` is the last, so no link is ever null.
///
/// This is the only linked list whose [`Cursor`](crate::cursor::Cursor)s can move backwards.
///
/// Work at either end is `O(1)`, as is [`append`](DoublyLinkedList::append), which splices
/// rings together without visiting any nodes. Positional operations walk from whichever end is
/// closer to the index.
///
/// | Method | Complexity |
/// |-|-|
/// | `push_*`, `pop_*`, `front`, `back` | `O(1)` |
/// | `get`, `insert`, `remove`, `replace` | `O(min(i, len - i))` |
/// | `append` | `O(1)` |
/// | `contains` | `O(len)` |
pub struct DoublyLinkedList<T> {
    pub(crate) ghost: NodePtr<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new, empty list. This allocates the ghost node.
    pub fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            ghost: NodePtr::ghost(),
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// The number of values in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: The list isn't empty, so the node after the ghost holds a value.
            Some(unsafe { self.ghost.next().value() })
        }
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: As for front, and self is uniquely borrowed.
            Some(unsafe { self.ghost.next().value_mut() })
        }
    }

    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: The list isn't empty, so the node before the ghost holds a value.
            Some(unsafe { self.ghost.prev().value() })
        }
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: As for back, and self is uniquely borrowed.
            Some(unsafe { self.ghost.prev().value_mut() })
        }
    }

    pub fn push_front(&mut self, value: T) {
        self.link_between(self.ghost, self.ghost.next(), value);
    }

    pub fn push_back(&mut self, value: T) {
        self.link_between(self.ghost.prev(), self.ghost, value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            Some(self.unlink(self.ghost.next()))
        }
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            Some(self.unlink(self.ghost.prev()))
        }
    }

    /// Returns a reference to the value at `index`, or None if it is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        let node = self.checked_seek(index).ok()?;
        // SAFETY: checked_seek only returns nodes holding values.
        Some(unsafe { node.value() })
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let node = self.checked_seek(index).ok()?;
        // SAFETY: checked_seek only returns nodes holding values, and self is uniquely borrowed.
        Some(unsafe { node.value_mut() })
    }

    /// Inserts `value` so that it ends up at `index`. An index equal to the length pushes to the
    /// back.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let next = match index {
            i if i == self.len => self.ghost,
            i if i < self.len => self.seek(i),
            _ => return Err(IndexOutOfBounds { index, len: self.len }),
        };
        self.link_between(next.prev(), next, value);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(self.unlink(node))
    }

    pub fn replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        // SAFETY: checked_seek only returns nodes holding values, and self is uniquely borrowed.
        Ok(mem::replace(unsafe { node.value_mut() }, new_value))
    }

    /// Moves every value of `other` onto the end of this list, by splicing the two rings
    /// together.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList<_> = (0..3).collect();
    /// list.append((3..5).collect());
    /// assert!(list.iter().eq(&[0, 1, 2, 3, 4]));
    /// ```
    pub fn append(&mut self, mut other: DoublyLinkedList<T>) {
        if other.len == 0 {
            return;
        }

        let self_tail = self.ghost.prev();
        let other_head = other.ghost.next();
        let other_tail = other.ghost.prev();

        self_tail.set_next(other_head);
        other_head.set_prev(self_tail);
        other_tail.set_next(self.ghost);
        self.ghost.set_prev(other_tail);
        self.len += other.len;

        // Leave other as an empty ring, so that dropping it only frees its ghost.
        other.ghost.set_next(other.ghost);
        other.ghost.set_prev(other.ghost);
        other.len = 0;
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T> DoublyLinkedList<T> {
    /// Returns the node at `index`, which must be less than len. Walks from whichever end is
    /// closer.
    pub(crate) fn seek(&self, index: usize) -> NodePtr<T> {
        debug_assert!(index < self.len);
        if index < self.len / 2 {
            let mut curr = self.ghost.next();
            for _ in 0..index {
                curr = curr.next();
            }
            curr
        } else {
            let mut curr = self.ghost.prev();
            for _ in index..(self.len - 1) {
                curr = curr.prev();
            }
            curr
        }
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        if index < self.len {
            Ok(self.seek(index))
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    fn link_between(&mut self, prev: NodePtr<T>, next: NodePtr<T>, value: T) {
        debug_assert!(prev.next() == next);
        let node = NodePtr::from_value(value, prev, next);
        prev.set_next(node);
        next.set_prev(node);
        self.len += 1;
    }

    fn unlink(&mut self, node: NodePtr<T>) -> T {
        debug_assert!(node != self.ghost);
        node.prev().set_next(node.next());
        node.next().set_prev(node.prev());
        self.len -= 1;
        // SAFETY: node isn't the ghost, so it holds a value, and it has just been unlinked.
        unsafe { node.take_value() }
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut curr = self.ghost;
        for _ in 0..=self.len {
            let next = curr.next();
            assert!(next.prev() == curr, "Every node should be the prev of its next.");
            curr = next;
        }
        assert!(curr == self.ghost, "A full lap should return to the ghost.");
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let node = self.checked_seek(index).throw();
        // SAFETY: checked_seek only returns nodes holding values.
        unsafe { node.value() }
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let node = self.checked_seek(index).throw();
        // SAFETY: checked_seek only returns nodes holding values, and self is uniquely borrowed.
        unsafe { node.value_mut() }
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: The list is empty and the ghost is never used again.
        unsafe { self.ghost.free_ghost() }
    }
}

// SAFETY: The list owns its nodes uniquely, so sending it sends every value along with it.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: Shared access to the list only ever produces shared references to its values.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}
