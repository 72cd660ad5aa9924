use std::marker::PhantomData;

use super::ForwardPtr;
use crate::util::error::IndexOutOfBounds;
use crate::util::option::OptionExtension;

/// The shared implementation of [`SinglyLinkedList`](super::SinglyLinkedList) and
/// [`CircularList`](super::CircularList).
///
/// Both start with a ghost whose `next` is the first node, and keep a pointer to the last node (or
/// the ghost, when empty) so that pushing to the back is `O(1)`. The only difference is where the
/// last node links to: nowhere for an open chain, back to the ghost for a closed one.
pub(crate) struct ForwardChain<T, const CLOSED: bool> {
    pub ghost: ForwardPtr<T>,
    pub tail: ForwardPtr<T>,
    pub len: usize,
    pub _phantom: PhantomData<T>,
}

impl<T, const CLOSED: bool> ForwardChain<T, CLOSED> {
    pub fn new() -> ForwardChain<T, CLOSED> {
        let ghost = ForwardPtr::ghost();
        let chain = ForwardChain {
            ghost,
            tail: ghost,
            len: 0,
            _phantom: PhantomData,
        };
        ghost.set_next(chain.terminal());
        chain
    }

    /// The link held by the last node.
    pub fn terminal(&self) -> Option<ForwardPtr<T>> {
        if CLOSED {
            Some(self.ghost)
        } else {
            None
        }
    }

    /// The first node, or the ghost if the chain is empty.
    pub fn first(&self) -> ForwardPtr<T> {
        if self.len == 0 {
            self.ghost
        } else {
            // SAFETY: A non-empty chain has a node after the ghost.
            unsafe { self.ghost.next().unreachable() }
        }
    }

    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: The chain isn't empty, so first isn't the ghost.
            Some(unsafe { self.first().value() })
        }
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: The chain isn't empty, so first isn't the ghost. self is uniquely borrowed.
            Some(unsafe { self.first().value_mut() })
        }
    }

    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: The chain isn't empty, so tail isn't the ghost.
            Some(unsafe { self.tail.value() })
        }
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: The chain isn't empty, so tail isn't the ghost. self is uniquely borrowed.
            Some(unsafe { self.tail.value_mut() })
        }
    }

    pub fn push_front(&mut self, value: T) {
        let node = ForwardPtr::from_value(value, self.ghost.next());
        self.ghost.set_next(Some(node));
        if self.len == 0 {
            self.tail = node;
        }
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let node = ForwardPtr::from_value(value, self.terminal());
        self.tail.set_next(Some(node));
        self.tail = node;
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        Some(self.unlink_after(self.ghost))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let before = self.seek_before(self.len - 1);
        Some(self.unlink_after(before))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        let node = self.checked_seek(index).ok()?;
        // SAFETY: checked_seek only returns nodes holding values.
        Some(unsafe { node.value() })
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let node = self.checked_seek(index).ok()?;
        // SAFETY: checked_seek only returns nodes holding values. self is uniquely borrowed.
        Some(unsafe { node.value_mut() })
    }

    pub fn replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        // SAFETY: checked_seek only returns nodes holding values. self is uniquely borrowed.
        Ok(std::mem::replace(unsafe { node.value_mut() }, new_value))
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }
        if index == self.len {
            self.push_back(value);
        } else {
            let before = self.seek_before(index);
            let node = ForwardPtr::from_value(value, before.next());
            before.set_next(Some(node));
            self.len += 1;
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }
        let before = self.seek_before(index);
        Ok(self.unlink_after(before))
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Reverses the order of the nodes in place, without moving any values.
    pub fn reverse(&mut self) {
        let terminal = self.terminal();
        let mut prev = terminal;
        let mut curr = self.ghost.next();
        let first = self.first();

        for _ in 0..self.len {
            // SAFETY: There are len nodes after the ghost.
            let node = unsafe { curr.unreachable() };
            curr = node.next();
            node.set_next(prev);
            prev = Some(node);
        }

        if self.len > 0 {
            self.ghost.set_next(prev);
            self.tail = first;
        }
    }

    /// Returns the node at `index`, which must be less than len.
    pub fn seek(&self, index: usize) -> ForwardPtr<T> {
        debug_assert!(index < self.len);
        self.seek_before(index + 1)
    }

    /// Returns the node preceding `index`, which is the ghost for index 0. `index` must be less
    /// than or equal to len.
    pub fn seek_before(&self, index: usize) -> ForwardPtr<T> {
        debug_assert!(index <= self.len);
        if index == self.len {
            return self.tail;
        }
        let mut curr = self.ghost;
        for _ in 0..index {
            // SAFETY: index < len, so there are at least index nodes after the ghost.
            curr = unsafe { curr.next().unreachable() };
        }
        curr
    }

    pub fn checked_seek(&self, index: usize) -> Result<ForwardPtr<T>, IndexOutOfBounds> {
        if index < self.len {
            Ok(self.seek(index))
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Unlinks and frees the node after `before`, which must exist.
    fn unlink_after(&mut self, before: ForwardPtr<T>) -> T {
        // SAFETY: Callers only unlink after a node which has a value following it.
        let node = unsafe { before.next().unreachable() };
        before.set_next(node.next());
        if node == self.tail {
            self.tail = before;
        }
        self.len -= 1;
        // SAFETY: node holds a value and has just been unlinked.
        unsafe { node.take_value() }
    }

    #[cfg(test)]
    pub fn verify_links(&self) {
        let mut curr = self.ghost;
        for _ in 0..self.len {
            curr = curr.next().expect("A chain should have len nodes after the ghost.");
            assert!(curr != self.ghost, "The ghost shouldn't be reachable within len steps.");
        }
        assert!(curr == self.tail, "The last node should be the tail.");
        assert!(curr.next() == self.terminal(), "The tail should link to the terminal.");
    }
}

impl<T, const CLOSED: bool> Drop for ForwardChain<T, CLOSED> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: The chain is empty and the ghost is never used again.
        unsafe { self.ghost.free_ghost() }
    }
}

// SAFETY: A chain owns its nodes uniquely, so sending it sends every value along with it.
unsafe impl<T: Send, const CLOSED: bool> Send for ForwardChain<T, CLOSED> {}
// SAFETY: Shared access to a chain only ever produces shared references to its values.
unsafe impl<T: Sync, const CLOSED: bool> Sync for ForwardChain<T, CLOSED> {}
