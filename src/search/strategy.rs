use std::cmp::Ordering;

use derive_more::IsVariant;

use super::{
    SearchStats, binary_search, binary_search_insert_position, linear_search,
    linear_search_insert_position,
};
use crate::cursor::{Cursor, UnsupportedOperation};

/// The algorithm used by [`search`] and [`search_insert_position`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum SearchStrategy {
    /// Visits elements one at a time. Works on every range, sorted or not.
    #[default]
    Linear,
    /// Halves a sorted range each step. Requires random access.
    Binary,
}

/// Searches `[begin, end)` for `value` using the given strategy.
///
/// # Errors
/// Only a binary search can fail, as for [`binary_search`].
pub fn search<'a, T, F>(
    begin: Cursor<'a, T>,
    end: Cursor<'a, T>,
    value: &T,
    compare: F,
    strategy: SearchStrategy,
    stats: Option<&mut SearchStats>,
) -> Result<Cursor<'a, T>, UnsupportedOperation>
where
    F: FnMut(&T, &T) -> Ordering,
{
    match strategy {
        SearchStrategy::Linear => Ok(linear_search(begin, end, value, compare, stats)),
        SearchStrategy::Binary => binary_search(begin, end, value, compare, stats),
    }
}

/// Finds the first position in sorted `[begin, end)` where `value` could be inserted while
/// keeping the range sorted, using the given strategy. Both strategies return the same position.
///
/// # Errors
/// Only a binary search can fail, as for [`binary_search`].
pub fn search_insert_position<'a, T, F>(
    begin: Cursor<'a, T>,
    end: Cursor<'a, T>,
    value: &T,
    compare: F,
    strategy: SearchStrategy,
    stats: Option<&mut SearchStats>,
) -> Result<Cursor<'a, T>, UnsupportedOperation>
where
    F: FnMut(&T, &T) -> Ordering,
{
    match strategy {
        SearchStrategy::Linear => {
            Ok(linear_search_insert_position(begin, end, value, compare, stats))
        },
        SearchStrategy::Binary => {
            binary_search_insert_position(begin, end, value, compare, stats)
        },
    }
}
