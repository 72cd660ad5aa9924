use std::iter::FusedIterator;

use super::Cursor;

/// An iterator over the elements between two cursors, created by [`Cursor::until`].
///
/// Iteration stops when the start cursor reaches the end cursor, or the end of the collection if
/// the end cursor is never met.
pub struct Range<'a, T> {
    pub(crate) curr: Cursor<'a, T>,
    pub(crate) end: Cursor<'a, T>,
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr == self.end {
            return None;
        }
        let value = self.curr.get()?;
        self.curr.move_next();
        Some(value)
    }
}

impl<T> FusedIterator for Range<'_, T> {}

impl<T> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        Range {
            curr: self.curr,
            end: self.end,
        }
    }
}
