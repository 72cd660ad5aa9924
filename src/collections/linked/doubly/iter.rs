use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::DoublyLinkedList;
use crate::collections::linked::NodePtr;

impl<T> DoublyLinkedList<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.ghost.next(),
            back: self.ghost.prev(),
            left: self.len,
            _phantom: PhantomData,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            front: self.ghost.next(),
            back: self.ghost.prev(),
            left: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

pub struct IntoIter<T> {
    // The iterator just holds the list and pops from either end.
    pub(crate) list: DoublyLinkedList<T>,
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

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A borrowed iterator over a [`DoublyLinkedList`], which can be consumed from both ends.
pub struct Iter<'a, T> {
    // left tracks the number of items still to yield, so front and back never need to be
    // compared.
    pub(crate) front: NodePtr<T>,
    pub(crate) back: NodePtr<T>,
    pub(crate) left: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        let node = self.front;
        self.front = node.next();
        self.left -= 1;
        // SAFETY: Only nodes between the ghost's neighbours are visited, and they hold values.
        Some(unsafe { node.value() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        let node = self.back;
        self.back = node.prev();
        self.left -= 1;
        // SAFETY: As for next.
        Some(unsafe { node.value() })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            left: self.left,
            _phantom: PhantomData,
        }
    }
}

/// A mutably borrowed iterator over a [`DoublyLinkedList`].
pub struct IterMut<'a, T> {
    pub(crate) front: NodePtr<T>,
    pub(crate) back: NodePtr<T>,
    pub(crate) left: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        let node = self.front;
        self.front = node.next();
        self.left -= 1;
        // SAFETY: Each node is yielded at most once while the list is uniquely borrowed.
        Some(unsafe { node.value_mut() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        let node = self.back;
        self.back = node.prev();
        self.left -= 1;
        // SAFETY: As for next.
        Some(unsafe { node.value_mut() })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
