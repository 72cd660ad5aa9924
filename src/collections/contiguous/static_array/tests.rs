#![cfg(test)]

use super::*;
use crate::util::error::{CapacityExceeded, IndexOutOfBounds};

#[test]
fn test_capacity_is_fixed() {
    let mut arr = StaticArray::with_cap(3);
    for i in 0..3 {
        arr.push(i).expect("There should be room for 3 values.");
    }
    assert!(arr.is_full());
    assert_eq!(
        arr.push(3),
        Err(CapacityExceeded { cap: 3 }),
        "Pushing onto a full StaticArray should fail instead of growing."
    );
    assert_eq!(arr.cap(), 3);

    assert!(
        arr.insert(0, 10).is_err_and(|e| e.is_capacity_exceeded()),
        "Inserting into a full StaticArray should fail."
    );
    assert_eq!(arr.pop(), Some(2));
    arr.insert(0, 10).expect("A slot was just freed.");
    assert_eq!(&*arr, &[10, 0, 1]);
}

#[test]
fn test_index_errors() {
    let mut arr = StaticArray::with_cap(4);
    arr.push('a').expect("Capacity is 4.");

    assert!(
        arr.insert(2, 'b').is_err_and(|e| e.is_index_out_of_bounds()),
        "Insert index must be at most the length."
    );
    assert_eq!(arr.remove(1), Err(IndexOutOfBounds { index: 1, len: 1 }));
    assert_eq!(arr.replace(0, 'z'), Ok('a'));
    assert_eq!(arr.remove(0), Ok('z'));
    assert!(arr.is_empty());
}

#[test]
fn test_collect() {
    let arr: StaticArray<_> = (0..5).collect();
    assert_eq!(arr.cap(), 5, "Collecting should produce an exactly sized StaticArray.");

    let arr = StaticArray::from_exact([1, 2, 3]);
    assert!(arr.is_full());
    assert_eq!(arr.into_iter().sum::<i32>(), 6);
}
