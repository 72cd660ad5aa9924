//! Contiguous collection types. [`Vector`] for collections that grow as required,
//! [`StaticArray`] for collections with a capacity fixed at creation, and [`Array`], the raw
//! runtime-sized storage both are built upon.
#![warn(missing_docs)]

pub mod array;
pub mod static_array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use static_array::StaticArray;
#[doc(inline)]
pub use vector::Vector;
