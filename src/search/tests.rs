#![cfg(test)]

use std::cmp::Ordering;

use proptest::prelude::*;
use test_case::test_case;

use super::*;
use crate::collections::contiguous::{StaticArray, Vector};
use crate::collections::linked::{CircularList, DoublyLinkedList, SinglyLinkedList};
use crate::collections::traits::Traverse;
use crate::cursor::{Cursor, CursorKind, UnsupportedOperation};

#[test]
fn test_linear_search_counts_comparisons() {
    let vec: Vector<_> = [10, 20, 30].into_iter().collect();
    let mut stats = SearchStats::default();
    let found = linear_search(vec.begin(), vec.end(), &20, Ord::cmp, Some(&mut stats));
    assert_eq!(found.index(), Some(1));
    assert_eq!(
        stats,
        SearchStats {
            comparisons: 2,
            range_size: 3,
        },
        "The search should stop at the first match."
    );

    let missing = linear_search(vec.begin(), vec.end(), &25, Ord::cmp, Some(&mut stats));
    assert_eq!(missing, vec.end());
    assert_eq!(stats.comparisons, 3);
}

#[test_case(&[], 5 => 0; "empty")]
#[test_case(&[1, 3, 5, 7], 0 => 0; "before every element")]
#[test_case(&[1, 3, 5, 7], 4 => 2; "between elements")]
#[test_case(&[1, 3, 5, 7], 5 => 2; "equal element")]
#[test_case(&[1, 3, 5, 7], 9 => 4; "after every element")]
#[test_case(&[2, 2, 2], 2 => 0; "first of duplicates")]
#[test_case(&[1, 2, 2, 3], 2 => 1; "before equal elements")]
fn test_insert_position(values: &[i32], value: i32) -> usize {
    let vec: Vector<_> = values.iter().copied().collect();
    let linear = linear_search_insert_position(vec.begin(), vec.end(), &value, Ord::cmp, None);
    let binary = binary_search_insert_position(vec.begin(), vec.end(), &value, Ord::cmp, None)
        .expect("Vectors support random access.");
    assert_eq!(linear, binary, "Both strategies should pick the same position.");

    let list: SinglyLinkedList<_> = values.iter().copied().collect();
    let in_list = linear_search_insert_position(list.begin(), list.end(), &value, Ord::cmp, None);
    assert_eq!(list.begin().distance_to(&in_list), vec.begin().distance_to(&linear));

    vec.begin().distance_to(&linear)
}

#[test_case(&[4, 2, 9, 2, 9] => (Some(1), Some(2)); "first extremes win")]
#[test_case(&[7] => (Some(0), Some(0)); "single element")]
#[test_case(&[] => (None, None); "empty")]
fn test_min_max(values: &[i32]) -> (Option<usize>, Option<usize>) {
    let list: DoublyLinkedList<_> = values.iter().copied().collect();
    let position = |found: Option<Cursor<'_, i32>>| {
        found.map(|cursor| list.begin().distance_to(&cursor))
    };
    let mut stats = SearchStats::default();
    let min = linear_search_min(list.begin(), list.end(), Ord::cmp, Some(&mut stats));
    assert_eq!(stats.range_size, values.len());
    assert_eq!(stats.comparisons, values.len().saturating_sub(1));
    let max = linear_search_max(list.begin(), list.end(), Ord::cmp, None);
    (position(min), position(max))
}

#[test]
fn test_binary_search_requires_random_access() {
    let list: DoublyLinkedList<_> = (0..10).collect();
    assert_eq!(
        binary_search(list.begin(), list.end(), &3, Ord::cmp, None),
        Err(UnsupportedOperation {
            op: "binary_search",
            kind: CursorKind::DoublyLinked,
        }),
        "Binary search over a linked list should be refused, not slow."
    );

    let ring: CircularList<_> = (0..10).collect();
    assert!(search(ring.begin(), ring.end(), &3, Ord::cmp, SearchStrategy::Binary, None).is_err());
    let found = search(ring.begin(), ring.end(), &3, Ord::cmp, SearchStrategy::Linear, None);
    assert_eq!(found.ok().and_then(|cursor| cursor.get()), Some(&3));
}

#[test]
fn test_binary_search_stats() {
    let arr: StaticArray<_> = (0..1024).collect();
    let mut stats = SearchStats::default();
    let found = binary_search(arr.begin(), arr.end(), &700, Ord::cmp, Some(&mut stats))
        .expect("StaticArrays support random access.");
    assert_eq!(found.get(), Some(&700));
    assert_eq!(stats.range_size, 1024);
    assert!(stats.comparisons <= 11, "Halving 1024 elements takes at most 11 comparisons.");
}

#[test]
fn test_sub_range() {
    let vec: Vector<_> = (0..10).collect();
    let from = vec.begin().advance(2);
    let to = vec.begin().advance(6);

    let inside = binary_search(from, to, &5, Ord::cmp, None).expect("Random access.");
    assert_eq!(inside.index(), Some(5));
    let outside = binary_search(from, to, &8, Ord::cmp, None).expect("Random access.");
    assert_eq!(outside, to, "Values outside the range shouldn't be found.");
    assert_eq!(linear_search(from, to, &1, Ord::cmp, None), to);
}

#[test]
fn test_custom_comparison() {
    let vec: Vector<_> = ["pear", "fig", "banana"].into_iter().collect();
    let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    let found = linear_search(vec.begin(), vec.end(), &"kiwi", by_len, None);
    assert_eq!(found.get(), Some(&"pear"), "Equality is decided by the comparison function.");

    let longest = linear_search_max(vec.begin(), vec.end(), by_len, None);
    assert_eq!(longest.and_then(|cursor| cursor.get()), Some(&"banana"));
    assert!(!is_sorted(vec.begin(), vec.end(), by_len));
}

#[test]
fn test_is_sorted_and_find_if() {
    let list: SinglyLinkedList<_> = [1, 2, 2, 8].into_iter().collect();
    assert!(is_sorted(list.begin(), list.end(), Ord::cmp));
    assert!(!is_sorted(list.begin(), list.end(), |a: &i32, b: &i32| b.cmp(a)));
    assert!(is_sorted(list.end(), list.end(), |_: &i32, _: &i32| Ordering::Greater));

    let found = find_if(list.begin(), list.end(), |value| *value > 1);
    assert_eq!(list.begin().distance_to(&found), 1);
}

fn sorted_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50..50i32, 0..64).prop_map(|mut values| {
        values.sort_unstable();
        values
    })
}

proptest! {
    #[test]
    fn prop_binary_search_finds_present_values(values in sorted_values(), probe in -60..60i32) {
        let vec: Vector<_> = values.iter().copied().collect();
        let found = binary_search(vec.begin(), vec.end(), &probe, Ord::cmp, None)
            .expect("Vectors support random access.");
        if values.contains(&probe) {
            prop_assert_eq!(found.get(), Some(&probe));
        } else {
            prop_assert_eq!(found, vec.end());
        }
    }

    #[test]
    fn prop_strategies_agree_on_insert_position(values in sorted_values(), probe in -60..60i32) {
        let vec: Vector<_> = values.iter().copied().collect();
        let linear = search_insert_position(
            vec.begin(), vec.end(), &probe, Ord::cmp, SearchStrategy::Linear, None,
        );
        let binary = search_insert_position(
            vec.begin(), vec.end(), &probe, Ord::cmp, SearchStrategy::Binary, None,
        );
        prop_assert_eq!(linear, binary);

        let index = linear.ok().and_then(|cursor| cursor.index()).unwrap_or_default();
        let mut inserted = vec.clone();
        inserted.insert(index, probe);
        prop_assert!(inserted.is_sorted(), "Inserting at the position should keep order.");
    }

    #[test]
    fn prop_linear_search_finds_first(values in prop::collection::vec(0..8i32, 0..32), probe in 0..8i32) {
        let list: CircularList<_> = values.iter().copied().collect();
        let found = linear_search(list.begin(), list.end(), &probe, Ord::cmp, None);
        let expected = values.iter().position(|value| *value == probe).unwrap_or(values.len());
        prop_assert_eq!(list.begin().distance_to(&found), expected);
    }
}
