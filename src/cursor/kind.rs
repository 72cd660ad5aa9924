use derive_more::{Display, IsVariant};

/// The kind of collection a cursor was created from.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum CursorKind {
    /// A [`StaticArray`](crate::collections::contiguous::StaticArray).
    #[display("static array")]
    StaticArray,
    /// A [`Vector`](crate::collections::contiguous::Vector).
    #[display("dynamic array")]
    DynamicArray,
    /// A [`SinglyLinkedList`](crate::collections::linked::SinglyLinkedList).
    #[display("singly linked list")]
    SinglyLinked,
    /// A [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList).
    #[display("doubly linked list")]
    DoublyLinked,
    /// A [`CircularList`](crate::collections::linked::CircularList).
    #[display("circular list")]
    Circular,
}

impl CursorKind {
    /// Returns the strongest capability of cursors of this kind.
    pub const fn capability(self) -> Capability {
        match self {
            CursorKind::StaticArray | CursorKind::DynamicArray => Capability::RandomAccess,
            CursorKind::DoublyLinked => Capability::Bidirectional,
            CursorKind::SinglyLinked | CursorKind::Circular => Capability::Forward,
        }
    }
}

/// How a cursor can move. Each capability includes all of the ones before it, so they are
/// ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Capability {
    /// Only single steps forward.
    Forward,
    /// Single steps in both directions.
    Bidirectional,
    /// Steps of any size in both directions, in constant time.
    RandomAccess,
}

impl Capability {
    /// Returns true if a cursor with this capability can do everything `other` requires.
    pub fn includes(self, other: Capability) -> bool {
        self >= other
    }
}
