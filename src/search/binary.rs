use std::cmp::Ordering;

use super::SearchStats;
use super::stats::finish;
use crate::cursor::{self, Capability, Cursor, UnsupportedOperation};

/// Returns a cursor to an element of sorted `[begin, end)` which compares equal to `value`, or a
/// cursor equal to `end` if there is none. If several elements are equal to `value`, any one of
/// them may be returned.
///
/// # Errors
/// Returns [`UnsupportedOperation`] if the cursors can't jump in constant time, which is the case
/// for every linked list. Use [`linear_search`](super::linear_search) for those.
///
/// # Examples
/// ```
/// # use standard_collections::collections::contiguous::Vector;
/// # use standard_collections::collections::linked::DoublyLinkedList;
/// # use standard_collections::collections::traits::Traverse;
/// # use standard_collections::search;
/// let vec: Vector<_> = (0..100).map(|i| i * 2).collect();
/// let found = search::binary_search(vec.begin(), vec.end(), &42, Ord::cmp, None).unwrap();
/// assert_eq!(found.index(), Some(21));
///
/// let list: DoublyLinkedList<_> = (0..100).collect();
/// assert!(search::binary_search(list.begin(), list.end(), &42, Ord::cmp, None).is_err());
/// ```
pub fn binary_search<'a, T, F>(
    begin: Cursor<'a, T>,
    end: Cursor<'a, T>,
    value: &T,
    mut compare: F,
    stats: Option<&mut SearchStats>,
) -> Result<Cursor<'a, T>, UnsupportedOperation>
where
    F: FnMut(&T, &T) -> Ordering,
{
    require_random_access("binary_search", &begin)?;

    let len = begin.distance_to(&end);
    let mut comparisons = 0;
    let mut low = begin;
    let mut count = len;
    let mut found = end;

    while count > 0 {
        let half = count / 2;
        let mid = low.advance(half);
        let Some(element) = mid.get() else {
            break;
        };
        comparisons += 1;
        match compare(element, value) {
            Ordering::Less => {
                low = mid.next();
                count -= half + 1;
            },
            Ordering::Greater => count = half,
            Ordering::Equal => {
                found = mid;
                break;
            },
        }
    }

    finish("binary_search", stats, comparisons, || len);
    Ok(found)
}

/// Returns a cursor to the first element of sorted `[begin, end)` which isn't less than `value`,
/// or a cursor equal to `end` if every element is less. This is the same position
/// [`linear_search_insert_position`](super::linear_search_insert_position) finds.
///
/// # Errors
/// As for [`binary_search`].
pub fn binary_search_insert_position<'a, T, F>(
    begin: Cursor<'a, T>,
    end: Cursor<'a, T>,
    value: &T,
    mut compare: F,
    stats: Option<&mut SearchStats>,
) -> Result<Cursor<'a, T>, UnsupportedOperation>
where
    F: FnMut(&T, &T) -> Ordering,
{
    require_random_access("binary_search_insert_position", &begin)?;

    let len = begin.distance_to(&end);
    let mut comparisons = 0;
    let mut low = begin;
    let mut count = len;

    while count > 0 {
        let half = count / 2;
        let mid = low.advance(half);
        let Some(element) = mid.get() else {
            break;
        };
        comparisons += 1;
        if compare(element, value).is_lt() {
            low = mid.next();
            count -= half + 1;
        } else {
            count = half;
        }
    }

    finish("binary_search_insert_position", stats, comparisons, || len);
    Ok(low)
}

fn require_random_access<T>(
    algorithm: &'static str,
    begin: &Cursor<'_, T>,
) -> Result<(), UnsupportedOperation> {
    if begin.capability().includes(Capability::RandomAccess) {
        Ok(())
    } else {
        Err(cursor::unsupported(begin.kind(), algorithm))
    }
}
