use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::linked::DoublyLinkedList;
use crate::collections::traits::{Container, Linear};

/// A double-ended queue, which can push and pop at both ends.
pub struct Deque<T, B: Linear<T> = DoublyLinkedList<T>> {
    pub(crate) backend: B,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, B: Linear<T> + Default> Deque<T, B> {
    pub fn new() -> Deque<T, B> {
        Deque::from_backend(B::default())
    }
}

impl<T, B: Linear<T>> Deque<T, B> {
    pub fn from_backend(backend: B) -> Deque<T, B> {
        Deque {
            backend,
            _phantom: PhantomData,
        }
    }

    /// # Errors
    /// Returns the backend's error if it can't hold another value.
    pub fn push_front(&mut self, value: T) -> Result<(), B::Error> {
        self.backend.push_front(value)
    }

    /// # Errors
    /// Returns the backend's error if it can't hold another value.
    pub fn push_back(&mut self, value: T) -> Result<(), B::Error> {
        self.backend.push_back(value)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.backend.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.backend.pop_back()
    }

    pub fn front(&self) -> Option<&T> {
        self.backend.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.backend.back()
    }

    pub fn len(&self) -> usize {
        self.backend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    pub fn clear(&mut self) {
        self.backend.clear()
    }

    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<T, B: Linear<T>> Container for Deque<T, B> {
    fn len(&self) -> usize {
        self.backend.len()
    }

    fn clear(&mut self) {
        self.backend.clear()
    }
}

impl<T, B: Linear<T> + Default> Default for Deque<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B: Linear<T> + Debug> Debug for Deque<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque").field("backend", &self.backend).finish()
    }
}
