#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_push_grows() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    vec.push(1);
    assert_eq!(vec.cap(), 2, "The first growth should use the minimum capacity.");
    vec.push(2);
    vec.push(3);
    assert_eq!(vec.cap(), 4, "Capacity should double when full.");
    assert_eq!(&*vec, &[1, 2, 3]);
}

#[test]
fn test_insert_and_remove() {
    let mut vec: Vector<_> = (0..3).collect();
    vec.insert(3, 3);
    vec.insert(0, -1);
    assert_eq!(&*vec, &[-1, 0, 1, 2, 3], "Inserting at both ends should work.");

    assert_eq!(vec.remove(2), 1);
    assert_eq!(vec.remove(3), 3);
    assert_eq!(&*vec, &[-1, 0, 2]);

    assert_eq!(
        vec.try_insert(4, 10),
        Err(IndexOutOfBounds { index: 4, len: 3 }),
        "Inserting past the end should fail."
    );
    assert_eq!(vec.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_panics!({
        let mut vec: Vector<u8> = Vector::new();
        vec.remove(0);
    });
}

#[test]
fn test_replace() {
    let mut vec: Vector<_> = "abc".chars().collect();
    assert_eq!(vec.replace(1, 'z'), 'b');
    assert_eq!(&*vec, &['a', 'z', 'c']);
    assert!(vec.try_replace(3, 'q').is_err());
}

#[test]
fn test_append() {
    let mut vec: Vector<_> = (0..3).collect();
    vec.append((3..6).collect());
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec.pop());
    drop(vec.remove(0));
    assert_eq!(counter.drops(), 2, "Popped and removed values should be dropped by the caller.");

    drop(vec);
    assert_eq!(counter.drops(), 10, "Every element should have been dropped exactly once.");
}

#[test]
fn test_into_iter() {
    let counter = CountedDrop::new();
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(6).collect();

    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(iter.len(), 4);
    drop(iter);
    assert_eq!(counter.drops(), 6, "Unyielded values should be dropped with the iterator.");

    let vec: Vector<_> = (1..=4).collect();
    assert_eq!(vec.into_iter().rev().collect::<Vector<_>>(), (1..=4).rev().collect());
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..100 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 100);
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.into_iter().count(), 99);
}
