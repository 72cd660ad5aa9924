use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A heap buffer of exactly `size` elements, fixed when created but resizable through
/// [`realloc`](Array::realloc).
///
/// Arrays are mostly used as `Array<MaybeUninit<T>>`, a block of slots that
/// [`Vector`](super::super::Vector) and [`StaticArray`](super::super::StaticArray) fill from the
/// front. An `Array<T>` with initialized contents derefs to `[T]` and drops its values.
///
/// Zero-sized element types and zero-sized arrays never touch the allocator, they hold a dangling
/// pointer instead.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates an empty Array, without allocating.
    pub fn new() -> Array<T> {
        Array::from_parts(NonNull::dangling(), 0)
    }

    /// Allocates an Array of `size` uninitialized slots.
    ///
    /// # Panics
    /// Panics if `size` elements of `T` would take more than [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use std::mem::MaybeUninit;
    /// # use standard_collections::collections::contiguous::Array;
    /// let slots: Array<MaybeUninit<u8>> = Array::new_uninit(5);
    /// assert_eq!(slots.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Array::from_parts(allocate(layout_of::<MaybeUninit<T>>(size)), size)
    }

    /// The number of elements the Array holds.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Gives up the knowledge that every element is initialized, so that the contents are no
    /// longer dropped with the Array.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        Array::from_parts(ptr.cast(), size)
    }

    fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    fn into_parts(self) -> (NonNull<T>, usize) {
        let this = ManuallyDrop::new(self);
        (this.ptr, this.size)
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Treats every slot as initialized.
    ///
    /// # Safety
    /// All `size` slots must hold a valid `T`.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        Array::from_parts(ptr.cast(), size)
    }

    /// Resizes the allocation to `new_size` slots. Slots below both sizes keep their contents,
    /// any new slots are uninitialized and anything past `new_size` is discarded without being
    /// dropped.
    ///
    /// # Panics
    /// Panics if `new_size` elements of `T` would take more than [`isize::MAX`] bytes.
    pub fn realloc(&mut self, new_size: usize) {
        if new_size == self.size {
            return;
        }

        let old_layout = layout_of::<MaybeUninit<T>>(self.size);
        let new_layout = layout_of::<MaybeUninit<T>>(new_size);

        self.ptr = match (old_layout.size(), new_layout.size()) {
            (0, 0) => self.ptr,
            (0, _) => allocate(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated with old_layout, which isn't zero-sized.
                unsafe { release(self.ptr, old_layout) };
                NonNull::dangling()
            },
            (_, new_bytes) => {
                // SAFETY: ptr was allocated with old_layout and new_bytes is non-zero and has
                // passed Layout::array's isize::MAX check.
                let raw = unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_bytes) };
                NonNull::new(raw.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };
        self.size = new_size;
    }
}

/// The layout of `size` contiguous `T`s, panicking with [`CapacityOverflow`] if it is too large.
pub(crate) fn layout_of<T>(size: usize) -> Layout {
    Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
}

fn allocate<T>(layout: Layout) -> NonNull<T> {
    if layout.size() == 0 {
        return NonNull::dangling();
    }
    // SAFETY: The layout isn't zero-sized.
    let raw = unsafe { alloc::alloc(layout) };
    NonNull::new(raw.cast()).unwrap_or_else(|| alloc::handle_alloc_error(layout))
}

/// # Safety
/// `ptr` must have been returned by [`allocate`] for this same, non-zero-sized, layout.
unsafe fn release<T>(ptr: NonNull<T>, layout: Layout) {
    // SAFETY: Upheld by the caller.
    unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: The contents of an Array<T> are initialized. When T is MaybeUninit this drops
        // nothing.
        unsafe { ptr::drop_in_place(&mut **self) };

        let layout = layout_of::<T>(self.size);
        if layout.size() != 0 {
            // SAFETY: A non-zero-sized layout means ptr came from allocate with this layout.
            unsafe { release(self.ptr, layout) };
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        // SAFETY: ptr is aligned and valid for size elements, which are initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: As for deref, with exclusive access through &mut self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: The allocation is owned by exactly one Array.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Shared access only ever hands out shared references to the contents.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
