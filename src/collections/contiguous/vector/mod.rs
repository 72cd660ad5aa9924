//! A module containing [`Vector`], the growable contiguous collection, and its owned iterator.

mod iter;
mod tests;
mod vector;

pub use iter::*;
pub use vector::*;
