//! Traits shared by the collections in this crate.
//!
//! [`Container`] is implemented by everything, [`Linear`] by everything that can push and pop at
//! its ends, [`RandomAccess`] only by the contiguous collections and [`Traverse`] by every backend
//! a [`Cursor`](crate::cursor::Cursor) can walk.

mod container;
mod impls;
mod linear;
mod random_access;
mod traverse;

pub use container::*;
pub use linear::*;
pub use random_access::*;
pub use traverse::*;
