use crate::cursor::{Cursor, CursorMut};

/// A collection which can produce [`Cursor`]s over its elements.
pub trait Traverse<T> {
    /// Returns a cursor at the first element, or the end position if the collection is empty.
    fn begin(&self) -> Cursor<'_, T>;

    /// Returns a cursor at the end position, one past the last element.
    fn end(&self) -> Cursor<'_, T>;

    /// As for [`Traverse::begin`], but the cursor can modify elements.
    fn begin_mut(&mut self) -> CursorMut<'_, T>;

    /// As for [`Traverse::end`], but the cursor can modify elements.
    fn end_mut(&mut self) -> CursorMut<'_, T>;
}
