use std::ptr::NonNull;

use tracing::debug;

use super::{CursorError, CursorKind, InvalidPosition, NoPredecessor, UnsupportedOperation};
use crate::collections::linked::{ForwardPtr, NodePtr};

// A RawCursor is the untyped half of Cursor and CursorMut: it knows where it is and how to move,
// but not whether it may hand out shared or unique references. Neither type ever dereferences a
// position without first checking that it isn't the end.

pub(crate) struct RawCursor<T> {
    pub kind: CursorKind,
    /// The address of the collection the cursor was created from, used only for identity.
    pub owner: NonNull<()>,
    pub pos: Position<T>,
}

pub(crate) enum Position<T> {
    /// An index into `[0, len]`, where `len` is the end position.
    Index {
        base: NonNull<T>,
        len: usize,
        index: usize,
    },
    /// A node of a forward-only list. `end` is the list's ghost.
    Forward {
        node: ForwardPtr<T>,
        end: ForwardPtr<T>,
    },
    /// A node of a doubly linked list. `end` is the list's ghost.
    Linked {
        node: NodePtr<T>,
        end: NodePtr<T>,
    },
}

use Position::*;

impl<T> RawCursor<T> {
    pub fn over_slice(
        kind: CursorKind,
        owner: NonNull<()>,
        base: NonNull<T>,
        len: usize,
        index: usize,
    ) -> RawCursor<T> {
        debug_assert!(index <= len);
        RawCursor {
            kind,
            owner,
            pos: Index { base, len, index },
        }
    }

    pub fn over_forward(
        kind: CursorKind,
        owner: NonNull<()>,
        node: ForwardPtr<T>,
        end: ForwardPtr<T>,
    ) -> RawCursor<T> {
        RawCursor {
            kind,
            owner,
            pos: Forward { node, end },
        }
    }

    pub fn over_linked(owner: NonNull<()>, node: NodePtr<T>, end: NodePtr<T>) -> RawCursor<T> {
        RawCursor {
            kind: CursorKind::DoublyLinked,
            owner,
            pos: Linked { node, end },
        }
    }

    pub fn is_end(&self) -> bool {
        match self.pos {
            Index { len, index, .. } => index == len,
            Forward { node, end } => node == end,
            Linked { node, end } => node == end,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self.pos {
            Index { index, .. } => Some(index),
            Forward { .. } | Linked { .. } => None,
        }
    }

    /// Returns a pointer to the current element, or None at the end position.
    pub fn element(&self) -> Option<NonNull<T>> {
        if self.is_end() {
            return None;
        }
        Some(match self.pos {
            // SAFETY: index < len, so the offset is within the collection's initialized values.
            Index { base, index, .. } => unsafe { base.add(index) },
            // SAFETY: The node isn't the ghost, so it holds a value.
            Forward { node, .. } => NonNull::from(unsafe { node.value() }),
            // SAFETY: The node isn't the ghost, so it holds a value.
            Linked { node, .. } => NonNull::from(unsafe { node.value() }),
        })
    }

    pub fn element_or_err(&self) -> Result<NonNull<T>, InvalidPosition> {
        self.element().ok_or(InvalidPosition)
    }

    /// Steps forward once, staying put at the end position.
    pub fn step_next(&mut self) {
        match &mut self.pos {
            Index { len, index, .. } => *index = (*index + 1).min(*len),
            Forward { node, end } => {
                if node != end {
                    // The last node of an open chain links to nothing, the last node of a ring
                    // links back to the ghost. Both mean the end.
                    *node = node.next().unwrap_or(*end);
                }
            },
            Linked { node, end } => {
                if node != end {
                    *node = node.next();
                }
            },
        }
    }

    /// Steps forward `n` times, clamped at the end position.
    pub fn step_forward(&mut self, n: usize) {
        if let Index { len, index, .. } = &mut self.pos {
            *index = index.saturating_add(n).min(*len);
            return;
        }
        for _ in 0..n {
            if self.is_end() {
                break;
            }
            self.step_next();
        }
    }

    /// Steps backward once. The cursor is left unchanged if this fails.
    pub fn step_prev(&mut self) -> Result<(), CursorError> {
        self.step_back(1)
    }

    /// Steps backward `n` times. If any single step would fail, nothing is moved and the error of
    /// that step is returned.
    pub fn step_back(&mut self, n: usize) -> Result<(), CursorError> {
        if n == 0 {
            return Ok(());
        }
        let kind = self.kind;
        match &mut self.pos {
            Index { index, .. } => *index = index.checked_sub(n).ok_or(NoPredecessor)?,
            Forward { .. } => return Err(unsupported(kind, "prev").into()),
            Linked { node, end } => {
                let mut curr = *node;
                for _ in 0..n {
                    curr = curr.prev();
                    if curr == *end {
                        return Err(NoPredecessor.into());
                    }
                }
                *node = curr;
            },
        }
        Ok(())
    }

    /// Counts the steps forward from self to `other`, or returns 0 if other can't be reached.
    pub fn distance_to(&self, other: &RawCursor<T>) -> usize {
        if self.owner != other.owner || self.kind != other.kind {
            return 0;
        }
        match (&self.pos, &other.pos) {
            (Index { index: from, .. }, Index { index: to, .. }) => to.saturating_sub(*from),
            (Forward { .. } | Linked { .. }, _) => {
                let mut curr = *self;
                let mut steps = 0;
                // Every walk ends at the end position, which the cursor can't move past, so this
                // terminates even on a ring.
                while !curr.same_position(other) {
                    if curr.is_end() {
                        return 0;
                    }
                    curr.step_next();
                    steps += 1;
                }
                steps
            },
            _ => 0,
        }
    }

    fn same_position(&self, other: &RawCursor<T>) -> bool {
        match (&self.pos, &other.pos) {
            (Index { index: a, .. }, Index { index: b, .. }) => a == b,
            (Forward { node: a, .. }, Forward { node: b, .. }) => a == b,
            (Linked { node: a, .. }, Linked { node: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> Clone for RawCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawCursor<T> {}

impl<T> PartialEq for RawCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.kind == other.kind && self.same_position(other)
    }
}

impl<T> Eq for RawCursor<T> {}

/// Builds the error for an operation that `kind` can't perform, logging the attempt.
pub(crate) fn unsupported(kind: CursorKind, op: &'static str) -> UnsupportedOperation {
    debug!(op, %kind, "unsupported cursor operation");
    UnsupportedOperation { op, kind }
}
