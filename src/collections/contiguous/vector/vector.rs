use std::fmt::{self, Debug, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The capacity a Vector jumps to the first time it has to grow.
const FIRST_CAP: usize = 2;

/// A growable array, storing its elements at the front of an [`Array`] of slots. This is the
/// dynamic array backend for [`Cursor`](crate::cursor::Cursor)s, which address it by index.
///
/// When a push finds every slot in use, the capacity doubles, so pushing to the back is amortized
/// `O(1)`. Inserting or removing at index `i` shifts the `len - i` elements after it.
///
/// | Method | Complexity |
/// |-|-|
/// | `get`, `replace`, `pop` | `O(1)` |
/// | `push` | `O(1)` amortized |
/// | `insert`, `remove` | `O(len - i)` |
/// | `reserve`, `shrink_to_fit` | `O(len)` when reallocating |
/// | `append` | `O(len + other.len)` |
pub struct Vector<T> {
    pub(crate) buf: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty Vector. Nothing is allocated until the first element arrives.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!((vec.len(), vec.cap()), (0, 0));
    /// ```
    pub fn new() -> Vector<T> {
        Vector::with_buf(Array::new())
    }

    /// Creates an empty Vector with room for exactly `cap` elements.
    ///
    /// # Panics
    /// Panics if `cap` elements would take more than [`isize::MAX`] bytes.
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::with_buf(Array::new_uninit(cap))
    }

    fn with_buf(buf: Array<MaybeUninit<T>>) -> Vector<T> {
        Vector { buf, len: 0 }
    }

    /// The number of elements in the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of elements the Vector can hold before it has to reallocate. This only changes
    /// when growing or when asked to through [`reserve`](Vector::reserve) and
    /// [`shrink_to_fit`](Vector::shrink_to_fit).
    pub const fn cap(&self) -> usize {
        self.buf.size()
    }

    /// Appends `value`, doubling the capacity first if the Vector is full.
    ///
    /// # Panics
    /// Panics if the doubled capacity would take more than [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// vec.push('a');
    /// vec.push('b');
    /// assert_eq!(&*vec, &['a', 'b']);
    /// ```
    pub fn push(&mut self, value: T) {
        self.make_room();
        // SAFETY: make_room leaves at least one free slot.
        unsafe { self.push_unchecked(value) }
    }

    /// Appends `value` without checking the capacity.
    ///
    /// # Safety
    /// `len` must be less than `cap`.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees that the slot at len exists, and it is unused.
        unsafe { self.slot(self.len).write(MaybeUninit::new(value)) };
        self.len += 1;
    }

    /// Removes and returns the last element, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.len = last;
        // SAFETY: The slot at last was initialized, and is now outside len so it won't be read
        // again.
        Some(unsafe { self.slot(last).read().assume_init() })
    }

    /// Inserts `value` at `index`, shifting every later element one place towards the back.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = [1, 3].into_iter().collect();
    /// vec.insert(1, 2);
    /// vec.insert(3, 4);
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, or returns an error if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        self.check_insert_index(index)?;
        self.make_room();

        let hole = self.slot(index);
        // SAFETY: There is a free slot at len, so shifting index..len up by one stays inside the
        // allocation. ptr::copy allows the ranges to overlap.
        unsafe {
            ptr::copy(hole.as_ptr(), hole.add(1).as_ptr(), self.len - index);
            hole.write(MaybeUninit::new(value));
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, closing the gap it leaves.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, or returns an error if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let hole = self.slot(index);
        let tail = self.len - index - 1;
        self.len -= 1;
        // SAFETY: The value at index is initialized. It is moved out before the tail is shifted
        // over its slot, so nothing is dropped twice.
        unsafe {
            let value = hole.read().assume_init();
            ptr::copy(hole.add(1).as_ptr(), hole.as_ptr(), tail);
            Ok(value)
        }
    }

    /// Swaps `new_value` into `index`, returning the element it displaced.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Swaps `new_value` into `index`, or returns an error if `index >= len`.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(mem::replace(&mut self[index], new_value))
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        let elements: *mut [T] = &mut **self;
        // A panicking drop leaks the remaining elements instead of dropping them twice.
        self.len = 0;
        // SAFETY: The elements were initialized and len no longer covers them.
        unsafe { ptr::drop_in_place(elements) };
    }

    /// Makes sure `extra` more elements fit without reallocating. The capacity grows to exactly
    /// `len + extra` if it is too small.
    ///
    /// # Panics
    /// Panics if the capacity would take more than [`isize::MAX`] bytes.
    pub fn reserve(&mut self, extra: usize) {
        let needed = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();
        if needed > self.cap() {
            self.buf.realloc(needed);
        }
    }

    /// Releases any unused capacity.
    pub fn shrink_to_fit(&mut self) {
        self.buf.realloc(self.len);
    }

    /// Moves every element of `other` onto the back, in order.
    pub fn append(&mut self, mut other: Vector<T>) {
        self.reserve(other.len);
        // SAFETY: reserve made room for other.len elements after len. The two buffers are
        // distinct allocations.
        unsafe {
            ptr::copy_nonoverlapping(other.slot(0).as_ptr(), self.slot(self.len).as_ptr(), other.len);
        }
        self.len += mem::take(&mut other.len);
    }

    /// Doubles the capacity if every slot is in use.
    pub(crate) fn make_room(&mut self) {
        if self.len < self.cap() {
            return;
        }
        let doubled = self.cap().checked_mul(2).ok_or(CapacityOverflow).throw();
        self.buf.realloc(doubled.max(FIRST_CAP));
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(self.out_of_bounds(index))
        }
    }

    /// Like [`check_index`](Vector::check_index), but also accepts `len` itself.
    pub(crate) const fn check_insert_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index <= self.len {
            Ok(())
        } else {
            Err(self.out_of_bounds(index))
        }
    }

    const fn out_of_bounds(&self, index: usize) -> IndexOutOfBounds {
        IndexOutOfBounds { index, len: self.len }
    }

    /// A pointer to slot `index`, which may be one past the last slot.
    fn slot(&self, index: usize) -> NonNull<MaybeUninit<T>> {
        // SAFETY: Callers only ask for index <= cap, which stays within or one past the
        // allocation.
        unsafe { self.buf.ptr.add(index) }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        iter.for_each(|value| self.push(value));
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Vector::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // The buffer frees its memory afterwards, but never drops slots itself.
        self.clear();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        // SAFETY: The first len slots are initialized and the pointer is aligned and non-null.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: As for deref, with exclusive access through &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut copy = Vector::with_cap(self.cap());
        copy.extend(self.iter().cloned());
        copy
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self[..] == other[..]
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&self[..])
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
