//! A module containing [`SinglyLinkedList`] and its owned iterator.

mod singly_linked_list;
mod tests;

pub use singly_linked_list::*;
