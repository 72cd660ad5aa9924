//! A single cursor type for every collection in this crate.
//!
//! A [`Cursor`] is a position within a specific container. Positions over contiguous collections
//! are indices, positions over linked lists are nodes, but both are stepped through the same
//! methods. The position one past the last element is the end position, which every collection
//! represents with something that isn't an element: the length for contiguous collections and the
//! ghost node for linked ones. An end cursor can be compared and copied, but never dereferenced.
//!
//! Cursors are created with [`Traverse`](crate::collections::traits::Traverse):
//! ```
//! # use standard_collections::collections::linked::DoublyLinkedList;
//! # use standard_collections::collections::traits::Traverse;
//! let list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
//! let mut cursor = list.end();
//! let mut seen: Vec<i32> = Vec::new();
//! while let Ok(prev) = cursor.prev() {
//!     cursor = prev;
//!     seen.extend(cursor.get().copied());
//! }
//! assert_eq!(seen, [3, 2, 1]);
//! ```
//!
//! # Capabilities
//! What a cursor can do depends on where it came from, see [`Capability`]. Moving forward is
//! always possible (and saturates at the end position). Moving backward over a
//! [`SinglyLinkedList`](crate::collections::linked::SinglyLinkedList) or a
//! [`CircularList`](crate::collections::linked::CircularList) fails with
//! [`CursorError::Unsupported`] rather than panicking.

mod cursor;
mod cursor_mut;
mod error;
mod kind;
mod range;
mod raw;
mod tests;

pub use cursor::*;
pub use cursor_mut::*;
pub use error::*;
pub use kind::*;
pub use range::*;
pub(crate) use raw::*;
