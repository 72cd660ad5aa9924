//! A module containing [`CircularList`] and its owned iterator.

mod circular_list;

pub use circular_list::*;
