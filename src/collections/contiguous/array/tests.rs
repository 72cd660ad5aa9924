#![cfg(test)]

use std::mem::MaybeUninit;
use std::ptr::NonNull;

use super::*;
use crate::util::alloc::ZeroSizedType;
use crate::util::panic::assert_panics;

fn filled(size: usize) -> Array<usize> {
    let mut arr = Array::<usize>::new_uninit(size);
    for (i, slot) in arr.iter_mut().enumerate() {
        *slot = MaybeUninit::new(i);
    }
    // SAFETY: Every slot has just been written.
    unsafe { arr.assume_init() }
}

#[test]
fn test_zst_support() {
    let mut arr = Array::<ZeroSizedType>::new_uninit(5);
    let old_ptr = arr.ptr;

    arr.realloc(30);
    assert_eq!(arr.size(), 30, "ZST arrays should still track their size.");
    assert_eq!(
        arr.ptr, old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );
}

#[test]
fn test_realloc() {
    let arr = filled(5);
    assert_eq!(&*arr, &[0, 1, 2, 3, 4]);

    let mut arr = arr.forget_init();
    let old_ptr = arr.ptr;
    arr.realloc(5);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.realloc(8);
    for i in 5..8 {
        arr[i] = MaybeUninit::new(i * 10);
    }
    // SAFETY: The first 5 values were kept by realloc and the last 3 were just written.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(
        &*arr,
        &[0, 1, 2, 3, 4, 50, 60, 70],
        "When growing, all elements should remain in the Array."
    );

    let mut arr = arr.forget_init();
    arr.realloc(0);
    assert_eq!(arr.size(), 0);
    assert_eq!(
        arr.ptr,
        NonNull::dangling(),
        "Pointer should be replaced with a dangling one for 0 size."
    );

    assert_panics!({
        let mut arr = Array::<u64>::new_uninit(1);
        arr.realloc(isize::MAX as usize);
    });
}

#[test]
fn test_empty() {
    let arr: Array<u8> = Array::new();
    assert_eq!(arr.size(), 0);
    assert_eq!(&*arr, &[] as &[u8]);
}
