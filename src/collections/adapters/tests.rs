#![cfg(test)]

use std::convert::Infallible;
use std::iter;

use super::*;
use crate::collections::contiguous::{StaticArray, Vector};
use crate::collections::linked::{CircularList, DoublyLinkedList, SinglyLinkedList};
use crate::collections::traits::Linear;
use crate::util::error::CapacityExceeded;

fn check_lifo<B: Linear<i32, Error = Infallible>>(backend: B) {
    let mut stack = Stack::from_backend(backend);
    for i in 0..5 {
        stack.push(i).unwrap_or_else(|never| match never {});
    }
    assert_eq!(stack.peek(), Some(&4));
    let popped: Vector<_> = iter::from_fn(|| stack.pop()).collect();
    assert_eq!(&*popped, &[4, 3, 2, 1, 0], "A Stack should pop in reverse push order.");
    assert!(stack.is_empty());
}

fn check_fifo<B: Linear<i32, Error = Infallible>>(backend: B) {
    let mut queue = Queue::from_backend(backend);
    for i in 0..5 {
        queue.enqueue(i).unwrap_or_else(|never| match never {});
    }
    assert_eq!(queue.peek(), Some(&0));
    assert_eq!(queue.dequeue(), Some(0));
    queue.enqueue(5).unwrap_or_else(|never| match never {});
    let drained: Vector<_> = iter::from_fn(|| queue.dequeue()).collect();
    assert_eq!(&*drained, &[1, 2, 3, 4, 5], "A Queue should dequeue in push order.");
}

#[test]
fn test_stack_over_every_backend() {
    check_lifo(Vector::new());
    check_lifo(SinglyLinkedList::new());
    check_lifo(DoublyLinkedList::new());
    check_lifo(CircularList::new());
}

#[test]
fn test_queue_over_every_backend() {
    check_fifo(DoublyLinkedList::new());
    check_fifo(SinglyLinkedList::new());
    check_fifo(CircularList::new());
    check_fifo(Vector::new());
}

#[test]
fn test_bounded_stack() {
    let mut stack = Stack::from_backend(StaticArray::with_cap(2));
    assert_eq!(stack.push('a'), Ok(()));
    assert_eq!(stack.push('b'), Ok(()));
    assert_eq!(stack.push('c'), Err(CapacityExceeded { cap: 2 }), "The backend is full.");
    assert_eq!(stack.pop(), Some('b'));
    assert_eq!(stack.push('c'), Ok(()));
    assert_eq!(&*stack.into_inner(), &['a', 'c']);
}

#[test]
fn test_bounded_deque() {
    let mut deque = Deque::from_backend(StaticArray::with_cap(3));
    assert_eq!(deque.push_back(2), Ok(()));
    assert_eq!(deque.push_front(1), Ok(()));
    assert_eq!(deque.push_back(3), Ok(()));
    assert!(deque.push_front(0).is_err());
    assert_eq!((deque.front(), deque.back()), (Some(&1), Some(&3)));
    assert_eq!(deque.pop_front(), Some(1));
    assert_eq!(deque.pop_back(), Some(3));
    assert_eq!(deque.len(), 1);
}

#[test]
fn test_default_deque() {
    let mut deque: Deque<_> = Deque::new();
    for i in 0..3 {
        deque.push_front(i).unwrap_or_else(|never| match never {});
        deque.push_back(i * 10).unwrap_or_else(|never| match never {});
    }
    assert!(deque.into_inner().iter().eq(&[2, 1, 0, 0, 10, 20]));

    let mut deque: Deque<u8> = Deque::default();
    assert_eq!(deque.pop_back(), None);
    assert_eq!(deque.pop_front(), None);
    deque.clear();
}
