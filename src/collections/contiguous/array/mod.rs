//! A module containing [`Array`], the runtime-sized storage used by the other contiguous
//! collections.
//!
//! Borrowed iteration is provided through [`Deref<Target = [T]>`](std::ops::Deref), using
//! [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`].

mod array;
mod tests;

pub use array::*;
