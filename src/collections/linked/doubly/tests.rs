#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut list = DoublyLinkedList::new();
    list.verify_double_links();
    assert_eq!(list.pop_back(), None);

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_double_links();
    assert_eq!((list.front(), list.back()), (Some(&1), Some(&3)));

    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(2));
    list.verify_double_links();
    assert!(list.is_empty());
}

#[test]
fn test_seek_from_both_ends() {
    let list: DoublyLinkedList<_> = (0..9).collect();
    for i in 0..9 {
        assert_eq!(list.get(i), Some(&i), "Seeking should reach index {i} from either end.");
    }
    assert_eq!(list.get(9), None);
    assert_eq!(list[8], 8);
    assert_panics!({
        let list: DoublyLinkedList<u8> = DoublyLinkedList::new();
        let _ = list[0];
    });
}

#[test]
fn test_insert_and_remove() {
    let mut list: DoublyLinkedList<_> = [1, 4].into_iter().collect();
    list.insert(1, 3).expect("Index 1 is within bounds.");
    list.insert(1, 2).expect("Index 1 is within bounds.");
    list.insert(4, 5).expect("Inserting at len should push to the back.");
    list.verify_double_links();
    assert!(list.iter().eq(&[1, 2, 3, 4, 5]));

    assert_eq!(list.insert(7, 0), Err(IndexOutOfBounds { index: 7, len: 5 }));
    assert_eq!(list.remove(2), Ok(3));
    assert_eq!(list.remove(3), Ok(5));
    list.verify_double_links();
    assert_eq!(list.replace(0, 10), Ok(1));
    list[1] = 20;
    assert!(list.iter().eq(&[10, 20, 4]));
}

#[test]
fn test_append() {
    let mut list: DoublyLinkedList<_> = (0..2).collect();
    list.append(DoublyLinkedList::new());
    list.append((2..5).collect());
    list.verify_double_links();
    assert_eq!(list.len(), 5);
    assert!(list.iter().eq(&[0, 1, 2, 3, 4]));

    let mut empty = DoublyLinkedList::new();
    empty.append(list.clone());
    empty.verify_double_links();
    assert_eq!(empty, list);
}

#[test]
fn test_double_ended_iter() {
    let mut list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
    assert!(list.iter().rev().eq(&[3, 2, 1]));

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next_back(), Some(&2));
    assert_eq!(iter.next(), None, "The ends should meet without yielding twice.");

    for value in list.iter_mut().rev() {
        *value += 1;
    }
    assert_eq!(list.into_iter().rev().collect::<DoublyLinkedList<_>>(), [4, 3, 2].into_iter().collect());
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut list: DoublyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(6).collect();
    list.append(iter::repeat_with(|| counter.clone()).take(4).collect());
    assert_eq!(counter.drops(), 0, "Appending shouldn't drop any values.");

    drop(list.remove(5));
    let mut iter = list.into_iter();
    drop(iter.next_back());
    drop(iter);
    assert_eq!(counter.drops(), 10);
}
