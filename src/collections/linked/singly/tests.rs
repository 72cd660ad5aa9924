#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::IndexOutOfBounds;

#[test]
fn test_push_and_pop() {
    let mut list = SinglyLinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.pop_back(), None);

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.chain.verify_links();
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    assert_eq!(list.pop_back(), Some(3));
    list.chain.verify_links();
    assert_eq!(list.back(), Some(&2), "The tail should move back after pop_back.");
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert!(list.is_empty());
    list.chain.verify_links();

    list.push_back(4);
    assert_eq!(list.front(), list.back(), "A single value is both front and back.");
}

#[test]
fn test_insert_and_remove() {
    let mut list: SinglyLinkedList<_> = [1, 3].into_iter().collect();
    list.insert(1, 2).expect("Index 1 is within bounds.");
    list.insert(3, 4).expect("Inserting at len should push to the back.");
    list.insert(0, 0).expect("Index 0 is always valid.");
    list.chain.verify_links();
    assert!(list.iter().eq(&[0, 1, 2, 3, 4]));

    assert_eq!(list.insert(6, 6), Err(IndexOutOfBounds { index: 6, len: 5 }));
    assert_eq!(list.remove(4), Ok(4));
    list.chain.verify_links();
    assert_eq!(list.back(), Some(&3), "Removing the last value should update the tail.");
    assert_eq!(list.remove(0), Ok(0));
    assert_eq!(list.remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    assert_eq!(list.replace(1, 20), Ok(2));
    assert_eq!(list.get(1), Some(&20));
    assert_eq!(list.get(3), None);
    *list.get_mut(0).expect("Index 0 exists.") = 10;
    assert!(list.iter().eq(&[10, 20, 3]));
    assert!(list.contains(&3));
    assert!(!list.contains(&2));
}

#[test]
fn test_reverse() {
    let mut list: SinglyLinkedList<_> = (1..=5).collect();
    list.reverse();
    list.chain.verify_links();
    assert!(list.iter().eq(&[5, 4, 3, 2, 1]));
    list.push_back(0);
    assert_eq!(list.back(), Some(&0), "The tail should be the old head after reversing.");

    let mut empty: SinglyLinkedList<u8> = SinglyLinkedList::new();
    empty.reverse();
    empty.chain.verify_links();
}

#[test]
fn test_iter_mut_and_clone() {
    let mut list: SinglyLinkedList<_> = (0..4).collect();
    for value in list.iter_mut() {
        *value *= 10;
    }
    let copy = list.clone();
    assert_eq!(copy, list);
    assert_eq!(copy.iter().len(), 4);
    assert_eq!(format!("{:?}", copy), "SinglyLinkedList { contents: [0, 10, 20, 30], len: 4 }");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(8).collect();

    drop(list.pop_back());
    drop(list.remove(2));
    assert_eq!(counter.drops(), 2);

    let mut iter = list.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.drops(), 8, "Every value should be dropped exactly once.");
}
