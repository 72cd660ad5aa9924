use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{ForwardChain, ForwardPtr};

/// A borrowed iterator over a [`SinglyLinkedList`](super::SinglyLinkedList) or
/// [`CircularList`](super::CircularList).
pub struct ForwardIter<'a, T> {
    pub(crate) curr: Option<ForwardPtr<T>>,
    pub(crate) left: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

/// A mutably borrowed iterator over a [`SinglyLinkedList`](super::SinglyLinkedList) or
/// [`CircularList`](super::CircularList).
pub struct ForwardIterMut<'a, T> {
    pub(crate) curr: Option<ForwardPtr<T>>,
    pub(crate) left: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<T, const CLOSED: bool> ForwardChain<T, CLOSED> {
    // Counting down from len stops a closed chain before it wraps back round to the ghost.

    pub fn iter(&self) -> ForwardIter<'_, T> {
        ForwardIter {
            curr: self.ghost.next(),
            left: self.len,
            _phantom: PhantomData,
        }
    }

    pub fn iter_mut(&mut self) -> ForwardIterMut<'_, T> {
        ForwardIterMut {
            curr: self.ghost.next(),
            left: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for ForwardIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        let node = self.curr?;
        self.curr = node.next();
        self.left -= 1;
        // SAFETY: Only the first len nodes after the ghost are visited, and they all hold values.
        Some(unsafe { node.value() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<T> ExactSizeIterator for ForwardIter<'_, T> {}

impl<T> FusedIterator for ForwardIter<'_, T> {}

impl<T> Clone for ForwardIter<'_, T> {
    fn clone(&self) -> Self {
        ForwardIter {
            curr: self.curr,
            left: self.left,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for ForwardIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        let node = self.curr?;
        self.curr = node.next();
        self.left -= 1;
        // SAFETY: As for ForwardIter, and each node is only yielded once while the list is
        // uniquely borrowed.
        Some(unsafe { node.value_mut() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<T> ExactSizeIterator for ForwardIterMut<'_, T> {}

impl<T> FusedIterator for ForwardIterMut<'_, T> {}
