//! A module containing [`StaticArray`], the fixed capacity contiguous collection.

mod static_array;
mod tests;

pub use static_array::*;
