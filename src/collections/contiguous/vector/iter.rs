use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::ptr;

use super::Vector;
use crate::collections::contiguous::Array;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let iter = IntoIter {
            buf: mem::take(&mut self.buf),
            front: 0,
            back: self.len,
        };
        // The values now belong to the iterator.
        self.len = 0;
        iter
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`] or [`StaticArray`](super::super::StaticArray).
/// Values in `front..back` haven't been yielded yet and are dropped with the iterator.
pub struct IntoIter<T> {
    pub(crate) buf: Array<MaybeUninit<T>>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            // SAFETY: All values in front..back are initialized, and incrementing front forgets
            // this one.
            let value = unsafe { self.buf.ptr.add(self.front).read().assume_init() };
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: back has just been decremented and is still within front..old_back.
            Some(unsafe { self.buf.ptr.add(self.back).read().assume_init() })
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Values in front..back are initialized and haven't been yielded.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr.add(self.front).as_ptr().cast::<T>(),
                self.back - self.front,
            ));
        }
    }
}
