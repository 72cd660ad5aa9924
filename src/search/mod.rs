//! Search algorithms written only against [`Cursor`](crate::cursor::Cursor)s.
//!
//! Every algorithm takes a half-open range `[begin, end)` of cursors from the same collection.
//! Searches that find nothing return a cursor equal to `end`, which is distinct from a search
//! that can't be performed at all: binary searches over collections without random access return
//! an [`UnsupportedOperation`](crate::cursor::UnsupportedOperation) error instead.
//!
//! Comparisons are three-way, through a function returning an [`Ordering`](std::cmp::Ordering)
//! for an element of the range and the value being searched for. Searches can optionally count
//! their comparisons into a [`SearchStats`], and emit a `trace` level [`tracing`] event with the
//! same counts when they finish.
//!
//! # Examples
//! ```
//! # use standard_collections::collections::contiguous::Vector;
//! # use standard_collections::collections::traits::Traverse;
//! # use standard_collections::search::{self, SearchStats};
//! let vec: Vector<_> = [10, 20, 30].into_iter().collect();
//! let mut stats = SearchStats::default();
//! let found = search::linear_search(vec.begin(), vec.end(), &20, Ord::cmp, Some(&mut stats));
//! assert_eq!(found.index(), Some(1));
//! assert_eq!(stats.comparisons, 2);
//! ```

mod binary;
mod linear;
mod stats;
mod strategy;
mod tests;

pub use binary::*;
pub use linear::*;
pub use stats::*;
pub use strategy::*;
