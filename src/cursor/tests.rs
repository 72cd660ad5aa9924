#![cfg(test)]

use proptest::prelude::*;
use test_case::test_case;

use super::*;
use crate::collections::contiguous::{StaticArray, Vector};
use crate::collections::linked::{CircularList, DoublyLinkedList, SinglyLinkedList};
use crate::collections::traits::Traverse;

/// Generates the properties every backend's cursors must have. `$bidirectional` selects whether
/// stepping backwards should undo stepping forwards, or always be unsupported.
macro_rules! conformance {
    ($name:ident, $collection:ident, $bidirectional:literal) => {
        mod $name {
            use super::*;

            fn build(values: &[i32]) -> $collection<i32> {
                values.iter().copied().collect()
            }

            #[test]
            fn empty_begin_is_end() {
                let empty = build(&[]);
                assert_eq!(empty.begin(), empty.end(), "An empty collection should begin at its end.");
                assert!(!empty.begin().is_valid());
                assert_eq!(empty.begin().get(), None);
                assert_eq!(empty.begin().next(), empty.end(), "Moving forward from end should saturate.");
                assert!(empty.begin().prev().is_err());
            }

            #[test]
            fn retreat_by_zero_succeeds() {
                let collection = build(&[1, 2]);
                assert_eq!(collection.begin().retreat(0), Ok(collection.begin()));
                assert_eq!(collection.end().retreat(0), Ok(collection.end()));
            }

            proptest! {
                #[test]
                fn distance_is_len(values in prop::collection::vec(any::<i32>(), 0..24)) {
                    let collection = build(&values);
                    prop_assert_eq!(collection.begin().distance_to(&collection.end()), values.len());
                    prop_assert!(collection.begin().until(collection.end()).eq(values.iter()));
                }

                #[test]
                fn end_is_never_valid(values in prop::collection::vec(any::<i32>(), 0..24)) {
                    let collection = build(&values);
                    let end = collection.end();
                    prop_assert!(!end.is_valid());
                    prop_assert!(end.is_end());
                    prop_assert_eq!(end.next(), end);
                    prop_assert_eq!(collection.begin().advance(values.len() + 3), end);
                }

                #[test]
                fn set_then_get(
                    values in prop::collection::vec(any::<i32>(), 1..24),
                    index in any::<prop::sample::Index>(),
                    new in any::<i32>(),
                ) {
                    let mut collection = build(&values);
                    let i = index.index(values.len());

                    let mut cursor = collection.begin_mut();
                    cursor.advance_by(i);
                    prop_assert_eq!(cursor.set(new), Ok(values[i]));
                    prop_assert_eq!(cursor.get(), Some(&new));

                    let mut end = collection.end_mut();
                    prop_assert_eq!(end.set(new), Err(InvalidPosition));
                    prop_assert_eq!(end.get_mut(), None);
                    prop_assert_eq!(collection.begin().advance(i).get(), Some(&new));
                }

                #[test]
                fn copies_move_independently(values in prop::collection::vec(any::<i32>(), 1..24)) {
                    let collection = build(&values);
                    let original = collection.begin();
                    let mut copy = original;
                    prop_assert_eq!(copy, original);

                    copy.move_next();
                    prop_assert_eq!(original, collection.begin());
                    prop_assert_eq!(original.get(), Some(&values[0]));
                    prop_assert_eq!(original.distance_to(&copy), 1);
                    prop_assert_eq!(copy.distance_to(&original), 0);
                }

                #[test]
                fn stepping_backwards(values in prop::collection::vec(any::<i32>(), 0..24)) {
                    let collection = build(&values);
                    let mut cursor = collection.begin();
                    while cursor.is_valid() {
                        if $bidirectional {
                            prop_assert_eq!(cursor.next().prev(), Ok(cursor));
                        } else {
                            prop_assert!(cursor.next().prev().is_err_and(|e| e.is_unsupported()));
                        }
                        cursor.move_next();
                    }
                    if $bidirectional {
                        prop_assert!(collection.begin().prev().is_err_and(|e| e.is_no_predecessor()));
                    } else {
                        prop_assert!(collection.begin().prev().is_err_and(|e| e.is_unsupported()));
                    }
                }
            }
        }
    };
}

conformance!(static_array, StaticArray, true);
conformance!(vector, Vector, true);
conformance!(singly_linked, SinglyLinkedList, false);
conformance!(doubly_linked, DoublyLinkedList, true);
conformance!(circular, CircularList, false);

#[test_case(CursorKind::StaticArray => Capability::RandomAccess)]
#[test_case(CursorKind::DynamicArray => Capability::RandomAccess)]
#[test_case(CursorKind::SinglyLinked => Capability::Forward)]
#[test_case(CursorKind::DoublyLinked => Capability::Bidirectional)]
#[test_case(CursorKind::Circular => Capability::Forward)]
fn test_capability(kind: CursorKind) -> Capability {
    kind.capability()
}

#[test]
fn test_capability_order() {
    assert!(Capability::RandomAccess.includes(Capability::Bidirectional));
    assert!(Capability::Bidirectional.includes(Capability::Forward));
    assert!(!Capability::Forward.includes(Capability::Bidirectional));
}

#[test]
fn test_doubly_backwards_traversal() {
    let list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let mut cursor = list.end();
    let mut seen = Vector::new();
    while cursor.move_prev().is_ok() {
        seen.extend(cursor.get().copied());
    }
    assert_eq!(&*seen, &[3, 2, 1], "Stepping back from the end should visit every element.");
    assert_eq!(cursor, list.begin(), "A failed step shouldn't move the cursor.");
}

#[test]
fn test_doubly_backwards_by_copy() {
    let list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let mut cursor = list.end();
    let mut seen: Vector<i32> = Vector::new();
    while let Ok(prev) = cursor.prev() {
        cursor = prev;
        seen.extend(cursor.get().copied());
    }
    assert_eq!(&*seen, &[3, 2, 1]);
    assert!(list.end().prev().is_ok(), "prev shouldn't move the cursor it was called on.");
}

#[test]
fn test_circular_stops_at_end() {
    let ring: CircularList<_> = [100, 200, 300].into_iter().collect();
    let mut cursor = ring.begin();
    for expected in [100, 200, 300] {
        assert_eq!(cursor.get(), Some(&expected));
        cursor.move_next();
    }
    assert_eq!(cursor, ring.end(), "Three steps should reach the end rather than wrap.");
    cursor.move_next();
    assert_eq!(cursor, ring.end(), "Moving forward from the end should stay there.");
}

#[test]
fn test_forward_only_errors() {
    let list: SinglyLinkedList<u8> = SinglyLinkedList::new();
    let error = list.begin().prev().expect_err("Singly linked cursors can't move back.");
    assert_eq!(
        error,
        CursorError::Unsupported(UnsupportedOperation {
            op: "prev",
            kind: CursorKind::SinglyLinked,
        })
    );
    assert_eq!(error.to_string(), "prev is not supported by a singly linked list cursor");

    let ring: CircularList<_> = (0..3).collect();
    assert!(ring.end().retreat(1).is_err_and(|e| e.is_unsupported()));
}

#[test]
fn test_retreat_is_all_or_nothing() {
    let vec: Vector<_> = (0..5).collect();
    let cursor = vec.begin().advance(2);
    assert_eq!(cursor.retreat(3), Err(CursorError::NoPredecessor(NoPredecessor)));
    assert_eq!(cursor.retreat(2), Ok(vec.begin()));
    assert_eq!(vec.end().retreat(5), Ok(vec.begin()));

    let mut list: DoublyLinkedList<_> = (0..5).collect();
    let mut cursor = list.begin_mut();
    cursor.advance_by(2);
    assert!(cursor.retreat_by(3).is_err_and(|e| e.is_no_predecessor()));
    assert_eq!(cursor.get(), Some(&2), "A failed retreat should leave the cursor in place.");
    assert_eq!(cursor.retreat_by(2), Ok(()));
    assert_eq!(cursor.get(), Some(&0));
}

#[test]
fn test_index() {
    let arr = StaticArray::from_exact([1, 2, 3]);
    assert_eq!(arr.begin().index(), Some(0));
    assert_eq!(arr.end().index(), Some(3), "The end of a random access range is its length.");

    let list: DoublyLinkedList<_> = (0..3).collect();
    assert_eq!(list.begin().index(), None);
}

#[test]
fn test_cursors_of_different_collections() {
    let a: Vector<_> = (0..3).collect();
    let b = a.clone();
    assert_ne!(a.begin(), b.begin(), "Cursors from different collections should never be equal.");
    assert_eq!(a.begin().distance_to(&b.end()), 0);

    let list: SinglyLinkedList<_> = (0..3).collect();
    let other: SinglyLinkedList<_> = (0..3).collect();
    assert_eq!(list.begin().distance_to(&other.end()), 0, "Walking another list should stop.");
}

#[test]
fn test_find_if_and_until() {
    let list: SinglyLinkedList<_> = [3, 8, 5, 10].into_iter().collect();
    let even = list.begin().find_if(list.end(), |value| value % 2 == 0);
    assert_eq!(even.get(), Some(&8));

    let none = list.begin().find_if(list.end(), |value| *value > 100);
    assert_eq!(none, list.end());

    let stop = list.begin().advance(2);
    assert_eq!(list.begin().find_if(stop, |value| *value == 10), stop, "Search shouldn't pass end.");
    assert!(even.until(list.end()).eq(&[8, 5, 10]));
    assert_eq!(list.end().until(list.begin()).count(), 0, "An unreachable end stops at the end.");
}

#[test]
fn test_cursor_mut_walk() {
    let mut list: DoublyLinkedList<_> = (1..=4).collect();
    let mut cursor = list.begin_mut();
    while let Some(value) = cursor.get_mut() {
        *value *= 10;
        cursor.move_next();
    }
    assert!(cursor.is_end());
    assert_eq!(cursor.as_cursor().distance_to(&cursor.as_cursor()), 0);
    cursor.move_prev().expect("The list isn't empty.");
    assert_eq!(cursor.into_cursor().get(), Some(&40));
    assert!(list.iter().eq(&[10, 20, 30, 40]));

    let mut ring: CircularList<_> = (0..3).collect();
    let mut cursor = ring.begin_mut();
    assert_eq!(cursor.set(7), Ok(0));
    assert_eq!(cursor.move_prev(), Err(CursorError::Unsupported(UnsupportedOperation {
        op: "prev",
        kind: CursorKind::Circular,
    })));
    assert_eq!(ring.front(), Some(&7));
}
