use std::cmp::Ordering;

use super::SearchStats;
use super::stats::finish;
use crate::cursor::Cursor;

/// Returns a cursor to the first element of `[begin, end)` which compares equal to `value`, or a
/// cursor equal to `end` if there is none. The range doesn't need to be sorted.
pub fn linear_search<'a, T, F>(
    begin: Cursor<'a, T>,
    end: Cursor<'a, T>,
    value: &T,
    mut compare: F,
    stats: Option<&mut SearchStats>,
) -> Cursor<'a, T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut comparisons = 0;
    let found = begin.find_if(end, |element| {
        comparisons += 1;
        compare(element, value).is_eq()
    });
    finish("linear_search", stats, comparisons, || begin.distance_to(&end));
    found
}

/// Returns a cursor to the first element of sorted `[begin, end)` which isn't less than `value`,
/// which is where `value` would be inserted to keep the range sorted. Returns a cursor equal to
/// `end` if every element is less than `value`.
///
/// This is the lower bound, so a value equal to existing elements is inserted before all of
/// them. It agrees with [`binary_search_insert_position`](super::binary_search_insert_position).
pub fn linear_search_insert_position<'a, T, F>(
    begin: Cursor<'a, T>,
    end: Cursor<'a, T>,
    value: &T,
    mut compare: F,
    stats: Option<&mut SearchStats>,
) -> Cursor<'a, T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut comparisons = 0;
    let found = begin.find_if(end, |element| {
        comparisons += 1;
        compare(element, value).is_ge()
    });
    finish("linear_search_insert_position", stats, comparisons, || begin.distance_to(&end));
    found
}

/// Returns a cursor to the first smallest element of `[begin, end)`, or None if the range is
/// empty.
pub fn linear_search_min<'a, T, F>(
    begin: Cursor<'a, T>,
    end: Cursor<'a, T>,
    mut compare: F,
    stats: Option<&mut SearchStats>,
) -> Option<Cursor<'a, T>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    extreme("linear_search_min", begin, end, stats, |candidate, best| {
        compare(candidate, best).is_lt()
    })
}

/// Returns a cursor to the first largest element of `[begin, end)`, or None if the range is
/// empty.
pub fn linear_search_max<'a, T, F>(
    begin: Cursor<'a, T>,
    end: Cursor<'a, T>,
    mut compare: F,
    stats: Option<&mut SearchStats>,
) -> Option<Cursor<'a, T>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    extreme("linear_search_max", begin, end, stats, |candidate, best| {
        compare(candidate, best).is_gt()
    })
}

fn extreme<'a, T, F>(
    algorithm: &'static str,
    begin: Cursor<'a, T>,
    end: Cursor<'a, T>,
    stats: Option<&mut SearchStats>,
    mut replaces: F,
) -> Option<Cursor<'a, T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut comparisons = 0;
    let mut range_size = 0;
    let mut best: Option<(Cursor<'a, T>, &'a T)> = None;

    for (curr, value) in positions(begin, end) {
        range_size += 1;
        let replace = match best {
            None => true,
            Some((_, best_value)) => {
                comparisons += 1;
                replaces(value, best_value)
            },
        };
        if replace {
            best = Some((curr, value));
        }
    }

    finish(algorithm, stats, comparisons, || range_size);
    best.map(|(cursor, _)| cursor)
}

/// Returns a cursor to the first element of `[begin, end)` matching the predicate, or a cursor
/// equal to `end`.
pub fn find_if<'a, T, P>(begin: Cursor<'a, T>, end: Cursor<'a, T>, predicate: P) -> Cursor<'a, T>
where
    P: FnMut(&T) -> bool,
{
    begin.find_if(end, predicate)
}

/// Returns true if no element of `[begin, end)` compares greater than the element after it.
///
/// # Examples
/// ```
/// # use standard_collections::collections::linked::SinglyLinkedList;
/// # use standard_collections::collections::traits::Traverse;
/// # use standard_collections::search;
/// let list: SinglyLinkedList<_> = [1, 2, 2, 5].into_iter().collect();
/// assert!(search::is_sorted(list.begin(), list.end(), Ord::cmp));
/// ```
pub fn is_sorted<'a, T, F>(begin: Cursor<'a, T>, end: Cursor<'a, T>, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut values = begin.until(end);
    let Some(mut prev) = values.next() else {
        return true;
    };
    for value in values {
        if compare(prev, value).is_gt() {
            return false;
        }
        prev = value;
    }
    true
}

/// Pairs every cursor of `[begin, end)` with its element.
fn positions<'a, T>(
    begin: Cursor<'a, T>,
    end: Cursor<'a, T>,
) -> impl Iterator<Item = (Cursor<'a, T>, &'a T)> {
    let mut curr = begin;
    std::iter::from_fn(move || {
        if curr == end {
            return None;
        }
        let pair = (curr, curr.get()?);
        curr.move_next();
        Some(pair)
    })
}
