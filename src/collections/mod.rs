//! The collection types themselves, and the traits they share.
//!
//! # Purpose
//! Every collection here can produce a [`Cursor`](crate::cursor::Cursor) through
//! [`Traverse`](traits::Traverse), which is what ties the otherwise very different storage
//! strategies together. The remaining traits describe what can be done cheaply with a collection:
//! [`Linear`](traits::Linear) for pushing and popping at the ends and
//! [`RandomAccess`](traits::RandomAccess) for constant time indexing.
//!
//! # Method
//! Contiguous types implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality.

#[cfg(feature = "adapters")]
pub mod adapters;
pub mod contiguous;
pub mod linked;
pub mod traits;

#[doc(inline)]
pub use crate::util::error::{CapacityExceeded, CapacityOverflow, IndexOutOfBounds};
