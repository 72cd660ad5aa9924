//! Stack, queue and deque adapters, which restrict a [`Linear`](super::traits::Linear)
//! collection to the ends they need.
//!
//! Each adapter is generic over its backend, with a default chosen so that every operation it
//! offers is `O(1)`: a [`Stack`] uses the back of a [`Vector`](super::contiguous::Vector), while a
//! [`Queue`] and a [`Deque`] use a [`DoublyLinkedList`](super::linked::DoublyLinkedList).
//!
//! Pushing returns the backend's error type, so a stack over a
//! [`StaticArray`](super::contiguous::StaticArray) reports when it is full, while pushing onto an
//! unbounded backend can only produce [`Infallible`](std::convert::Infallible).

mod deque;
mod queue;
mod stack;
mod tests;

pub use deque::*;
pub use queue::*;
pub use stack::*;
