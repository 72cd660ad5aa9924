use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::contiguous::Vector;
use crate::collections::traits::{Container, Linear};

/// A last in, first out collection. Values are pushed to and popped from the back of the backend.
///
/// # Examples
/// ```
/// # use standard_collections::collections::adapters::Stack;
/// let mut stack: Stack<_> = Stack::new();
/// for i in 0..3 {
///     stack.push(i).unwrap();
/// }
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.len(), 2);
/// ```
pub struct Stack<T, B: Linear<T> = Vector<T>> {
    pub(crate) backend: B,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, B: Linear<T> + Default> Stack<T, B> {
    /// Creates an empty Stack over a default backend.
    pub fn new() -> Stack<T, B> {
        Stack::from_backend(B::default())
    }
}

impl<T, B: Linear<T>> Stack<T, B> {
    /// Creates a Stack over an existing collection, whose back becomes the top of the stack.
    pub fn from_backend(backend: B) -> Stack<T, B> {
        Stack {
            backend,
            _phantom: PhantomData,
        }
    }

    /// Pushes a value onto the top of the Stack.
    ///
    /// # Errors
    /// Returns the backend's error if it can't hold another value.
    pub fn push(&mut self, value: T) -> Result<(), B::Error> {
        self.backend.push_back(value)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.backend.pop_back()
    }

    /// Returns the value on top of the Stack without removing it.
    pub fn peek(&self) -> Option<&T> {
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

    /// Returns the backend, with the top of the Stack at its back.
    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<T, B: Linear<T>> Container for Stack<T, B> {
    fn len(&self) -> usize {
        self.backend.len()
    }

    fn clear(&mut self) {
        self.backend.clear()
    }
}

impl<T, B: Linear<T> + Default> Default for Stack<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B: Linear<T> + Debug> Debug for Stack<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("backend", &self.backend).finish()
    }
}
