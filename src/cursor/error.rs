use derive_more::{Display, Error, From, IsVariant};

use super::CursorKind;

/// An error produced when an operation requires a capability the cursor's collection doesn't
/// have, like stepping backwards through a singly linked list.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("{op} is not supported by a {kind} cursor")]
pub struct UnsupportedOperation {
    /// The name of the operation that was attempted.
    pub op: &'static str,
    /// The kind of cursor it was attempted on.
    pub kind: CursorKind,
}

/// An error produced when stepping backwards from the first position of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cursor is already at the beginning of its collection")]
pub struct NoPredecessor;

/// An error produced when accessing the element of a cursor which doesn't point to one.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cursor doesn't point to an element")]
pub struct InvalidPosition;

/// Any error produced while moving or accessing a cursor.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    Unsupported(UnsupportedOperation),
    NoPredecessor(NoPredecessor),
    InvalidPosition(InvalidPosition),
}
