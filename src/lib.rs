//! Generic collections which can all be traversed with one cursor type.
//!
//! # Purpose
//! The collections here (arrays, vectors, linked lists of every flavour and the stack, queue and
//! deque adapters over them) share a small set of traits, but more importantly they can all hand
//! out a [`Cursor`](cursor::Cursor). A cursor is a position within a specific container, and the
//! same cursor type steps through a [`Vector`](collections::contiguous::Vector) by index and
//! through a [`DoublyLinkedList`](collections::linked::DoublyLinkedList) by following links. The
//! [`search`] module is written only against cursors, so every algorithm there works on every
//! collection that can provide the capability it needs.
//!
//! # Capabilities
//! Not every container can do everything a cursor could. Singly linked and circular lists can't
//! step backwards, and only the contiguous collections can jump to an arbitrary position in
//! constant time. Rather than hiding these differences, a cursor reports them: stepping backwards
//! over a singly linked list returns an error instead of panicking or silently walking the list
//! from the start. See [`Capability`](cursor::Capability).
//!
//! # Error Handling
//! Any condition an end user can trigger (an empty container, an out of range index, a missing
//! capability) is reported through an [`Option`] or a [`Result`]. Errors are strongly typed, using
//! enums for static dispatch and small structs that implement [`Error`](std::error::Error).
//!
//! A few convenience methods (like indexing with `[]`) still panic, and are documented as doing
//! so, next to a non-panicking counterpart.
//!
//! # Invalidation
//! Cursors borrow the collection they were created from. The borrow checker therefore prevents a
//! collection from being structurally modified while a cursor into it is alive, which is the
//! whole of the invalidation story.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod cursor;
#[cfg(feature = "search")]
pub mod search;

pub(crate) mod util;
