use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::linked::DoublyLinkedList;
use crate::collections::traits::{Container, Linear};

/// A first in, first out collection. Values are pushed to the back of the backend and popped from
/// the front.
///
/// # Examples
/// ```
/// # use standard_collections::collections::adapters::Queue;
/// let mut queue: Queue<_> = Queue::new();
/// queue.enqueue('a').unwrap();
/// queue.enqueue('b').unwrap();
/// assert_eq!(queue.dequeue(), Some('a'));
/// assert_eq!(queue.peek(), Some(&'b'));
/// ```
pub struct Queue<T, B: Linear<T> = DoublyLinkedList<T>> {
    pub(crate) backend: B,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, B: Linear<T> + Default> Queue<T, B> {
    pub fn new() -> Queue<T, B> {
        Queue::from_backend(B::default())
    }
}

impl<T, B: Linear<T>> Queue<T, B> {
    /// Creates a Queue over an existing collection, whose front is the next value to be dequeued.
    pub fn from_backend(backend: B) -> Queue<T, B> {
        Queue {
            backend,
            _phantom: PhantomData,
        }
    }

    /// Adds a value to the back of the Queue.
    ///
    /// # Errors
    /// Returns the backend's error if it can't hold another value.
    pub fn enqueue(&mut self, value: T) -> Result<(), B::Error> {
        self.backend.push_back(value)
    }

    /// Removes the value at the front of the Queue.
    pub fn dequeue(&mut self) -> Option<T> {
        self.backend.pop_front()
    }

    /// Returns the value that would be dequeued next.
    pub fn peek(&self) -> Option<&T> {
        self.backend.front()
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

impl<T, B: Linear<T>> Container for Queue<T, B> {
    fn len(&self) -> usize {
        self.backend.len()
    }

    fn clear(&mut self) {
        self.backend.clear()
    }
}

impl<T, B: Linear<T> + Default> Default for Queue<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B: Linear<T> + Debug> Debug for Queue<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("backend", &self.backend).finish()
    }
}
