use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;

use super::{Capability, Cursor, CursorError, CursorKind, InvalidPosition, RawCursor};

/// A cursor which uniquely borrows its collection, and can therefore modify the elements it
/// points at. It can't change the structure of the collection: elements are overwritten, never
/// added or removed.
///
/// A CursorMut isn't [`Copy`], but a shared [`Cursor`] at the same position can be borrowed from
/// it with [`as_cursor`](CursorMut::as_cursor).
pub struct CursorMut<'a, T> {
    pub(crate) raw: RawCursor<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn from_raw(raw: RawCursor<T>) -> CursorMut<'a, T> {
        CursorMut {
            raw,
            _phantom: PhantomData,
        }
    }

    pub fn kind(&self) -> CursorKind {
        self.raw.kind
    }

    pub fn capability(&self) -> Capability {
        self.raw.kind.capability()
    }

    pub fn is_valid(&self) -> bool {
        !self.raw.is_end()
    }

    pub fn is_end(&self) -> bool {
        self.raw.is_end()
    }

    pub fn index(&self) -> Option<usize> {
        self.raw.index()
    }

    /// Returns a reference to the current element, or None at the end position.
    pub fn get(&self) -> Option<&T> {
        // SAFETY: element only returns pointers to initialized values, and the returned borrow is
        // tied to self, which uniquely borrows the collection.
        self.raw.element().map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Returns a mutable reference to the current element, or None at the end position.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: As for get, and self is uniquely borrowed so no other reference to the element
        // can exist.
        self.raw.element().map(|mut ptr| unsafe { ptr.as_mut() })
    }

    /// Overwrites the current element with `value`, returning the previous one.
    ///
    /// # Errors
    /// Returns [`InvalidPosition`] at the end position, in which case `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::StaticArray;
    /// # use standard_collections::collections::traits::Traverse;
    /// let mut arr = StaticArray::from_exact([1, 2, 3]);
    /// let mut cursor = arr.begin_mut();
    /// cursor.move_next();
    /// assert_eq!(cursor.set(20), Ok(2));
    /// assert_eq!(cursor.get(), Some(&20));
    /// assert!(arr.end_mut().set(4).is_err());
    /// ```
    pub fn set(&mut self, value: T) -> Result<T, InvalidPosition> {
        let mut ptr = self.raw.element_or_err()?;
        // SAFETY: As for get_mut.
        Ok(mem::replace(unsafe { ptr.as_mut() }, value))
    }

    /// Moves the cursor one step forward, staying put at the end position.
    pub fn move_next(&mut self) {
        self.raw.step_next();
    }

    /// Moves the cursor one step backward. The cursor doesn't move if this fails.
    ///
    /// # Errors
    /// As for [`Cursor::prev`].
    pub fn move_prev(&mut self) -> Result<(), CursorError> {
        self.raw.step_prev()
    }

    /// Moves the cursor `n` steps forward, stopping at the end position.
    pub fn advance_by(&mut self, n: usize) {
        self.raw.step_forward(n);
    }

    /// Moves the cursor `n` steps backward, or not at all if any step would fail.
    ///
    /// # Errors
    /// As for [`Cursor::retreat`].
    pub fn retreat_by(&mut self, n: usize) -> Result<(), CursorError> {
        self.raw.step_back(n)
    }

    /// Borrows a shared cursor at the same position. The shared cursor can be copied and moved
    /// freely, but only for as long as this CursorMut is borrowed.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::from_raw(self.raw)
    }

    /// Converts this cursor into a shared one, keeping the collection borrowed for `'a`.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::from_raw(self.raw)
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<T: Debug> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("kind", &self.raw.kind)
            .field("index", &self.raw.index())
            .field("element", &self.get())
            .finish()
    }
}
