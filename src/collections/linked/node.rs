use std::mem::MaybeUninit;
use std::ptr::NonNull;

// Nodes are allocated through Box, so that freeing one is just a matter of rebuilding the Box.
//
// Every list owns a ghost node, which is allocated with an uninitialized value and is never read
// from. The ghost is what cursors use as their end marker. All other nodes hold an initialized
// value for as long as they are linked into a list.
//
// A pointer is only ever held by a list, or by a cursor or iterator which borrows that list, so
// the node behind it is always alive when a pointer is followed.

/// A node for the forward-only lists, [`SinglyLinkedList`](super::SinglyLinkedList) and
/// [`CircularList`](super::CircularList).
pub(crate) struct ForwardNode<T> {
    pub value: MaybeUninit<T>,
    pub next: Option<ForwardPtr<T>>,
}

#[derive(Debug)]
pub(crate) struct ForwardPtr<T>(pub NonNull<ForwardNode<T>>);

impl<T> ForwardPtr<T> {
    pub fn ghost() -> ForwardPtr<T> {
        ForwardPtr::alloc(ForwardNode {
            value: MaybeUninit::uninit(),
            next: None,
        })
    }

    pub fn from_value(value: T, next: Option<ForwardPtr<T>>) -> ForwardPtr<T> {
        ForwardPtr::alloc(ForwardNode {
            value: MaybeUninit::new(value),
            next,
        })
    }

    fn alloc(node: ForwardNode<T>) -> ForwardPtr<T> {
        ForwardPtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn next(self) -> Option<ForwardPtr<T>> {
        // SAFETY: The node is alive while any pointer to it is held.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_next(self, next: Option<ForwardPtr<T>>) {
        // SAFETY: The node is alive while any pointer to it is held, and lists only relink nodes
        // while holding a unique borrow.
        unsafe { (*self.0.as_ptr()).next = next }
    }

    /// # Safety
    /// The node must not be a ghost, and the returned reference must not outlive the borrow of
    /// the list that owns the node.
    pub unsafe fn value<'a>(self) -> &'a T {
        // SAFETY: Non-ghost nodes always hold an initialized value.
        unsafe { (*self.0.as_ptr()).value.assume_init_ref() }
    }

    /// # Safety
    /// As for [`ForwardPtr::value`], and the list must be uniquely borrowed for `'a`.
    pub unsafe fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: Non-ghost nodes always hold an initialized value.
        unsafe { (*self.0.as_ptr()).value.assume_init_mut() }
    }

    /// Frees the node, moving its value out.
    ///
    /// # Safety
    /// The node must not be a ghost and must already be unlinked from its list.
    pub unsafe fn take_value(self) -> T {
        // SAFETY: The node was allocated by Box in alloc and is no longer reachable.
        let node = unsafe { Box::from_raw(self.0.as_ptr()) };
        // SAFETY: Non-ghost nodes always hold an initialized value.
        unsafe { node.value.assume_init_read() }
    }

    /// Frees a ghost node.
    ///
    /// # Safety
    /// The node must be a ghost that is no longer used by its list.
    pub unsafe fn free_ghost(self) {
        // SAFETY: The ghost was allocated by Box and its uninitialized value is never dropped.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) })
    }
}

impl<T> Clone for ForwardPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ForwardPtr<T> {}

impl<T> PartialEq for ForwardPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for ForwardPtr<T> {}

/// A node for [`DoublyLinkedList`](super::DoublyLinkedList). Links are never null, because the
/// ghost closes the ring in both directions.
pub(crate) struct Node<T> {
    pub value: MaybeUninit<T>,
    pub prev: NodePtr<T>,
    pub next: NodePtr<T>,
}

#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    /// Allocates a ghost which links to itself in both directions.
    pub fn ghost() -> NodePtr<T> {
        let ptr = NodePtr(NonNull::from(Box::leak(Box::new(Node {
            value: MaybeUninit::uninit(),
            prev: NodePtr(NonNull::dangling()),
            next: NodePtr(NonNull::dangling()),
        }))));
        ptr.set_prev(ptr);
        ptr.set_next(ptr);
        ptr
    }

    pub fn from_value(value: T, prev: NodePtr<T>, next: NodePtr<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(Node {
            value: MaybeUninit::new(value),
            prev,
            next,
        }))))
    }

    pub fn prev(self) -> NodePtr<T> {
        // SAFETY: The node is alive while any pointer to it is held.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn set_prev(self, prev: NodePtr<T>) {
        // SAFETY: The node is alive while any pointer to it is held, and lists only relink nodes
        // while holding a unique borrow.
        unsafe { (*self.0.as_ptr()).prev = prev }
    }

    pub fn next(self) -> NodePtr<T> {
        // SAFETY: The node is alive while any pointer to it is held.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_next(self, next: NodePtr<T>) {
        // SAFETY: As for set_prev.
        unsafe { (*self.0.as_ptr()).next = next }
    }

    /// # Safety
    /// The node must not be a ghost, and the returned reference must not outlive the borrow of
    /// the list that owns the node.
    pub unsafe fn value<'a>(self) -> &'a T {
        // SAFETY: Non-ghost nodes always hold an initialized value.
        unsafe { (*self.0.as_ptr()).value.assume_init_ref() }
    }

    /// # Safety
    /// As for [`NodePtr::value`], and the list must be uniquely borrowed for `'a`.
    pub unsafe fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: Non-ghost nodes always hold an initialized value.
        unsafe { (*self.0.as_ptr()).value.assume_init_mut() }
    }

    /// Frees the node, moving its value out.
    ///
    /// # Safety
    /// The node must not be a ghost and must already be unlinked from its list.
    pub unsafe fn take_value(self) -> T {
        // SAFETY: The node was allocated by Box and is no longer reachable.
        let node = unsafe { Box::from_raw(self.0.as_ptr()) };
        // SAFETY: Non-ghost nodes always hold an initialized value.
        unsafe { node.value.assume_init_read() }
    }

    /// Frees a ghost node.
    ///
    /// # Safety
    /// The node must be a ghost that is no longer used by its list.
    pub unsafe fn free_ghost(self) {
        // SAFETY: The ghost was allocated by Box and its uninitialized value is never dropped.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) })
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}
