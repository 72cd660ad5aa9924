//! A module containing [`DoublyLinkedList`] and its iterators.

mod doubly_linked_list;
mod iter;
mod tests;

pub use doubly_linked_list::*;
pub use iter::*;
