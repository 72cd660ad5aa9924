//! Linked collection types: [`SinglyLinkedList`], [`DoublyLinkedList`] and [`CircularList`].
//!
//! Each list owns a ghost node holding no value, which marks the boundary of the list and is the
//! position an end [`Cursor`](crate::cursor::Cursor) points at. Only [`DoublyLinkedList`] can be
//! traversed backwards.

mod chain;
pub mod circular;
pub mod doubly;
mod iter;
mod node;
pub mod singly;

pub(crate) use chain::*;
pub use iter::{ForwardIter, ForwardIterMut};
pub(crate) use node::*;

#[doc(inline)]
pub use circular::CircularList;
#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
