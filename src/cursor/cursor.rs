use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{Capability, CursorError, CursorKind, Range, RawCursor};

/// A shared position within a collection, see the [module documentation](super) for an
/// overview.
///
/// Cursors are [`Copy`]: copying one gives a second cursor at the same position which moves
/// independently. Two cursors are equal if they come from the same collection and point at the
/// same position, so an empty collection's begin cursor is equal to its end cursor.
///
/// Moving methods come in two forms: [`next`](Cursor::next) and friends return the moved cursor,
/// [`move_next`](Cursor::move_next) and friends move it in place.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of steps taken.
/// - `d`: The number of elements between the cursor and the end position.
///
/// | Method | Random access | Linked |
/// |-|-|-|
/// | `next` | `O(1)` | `O(1)` |
/// | `prev` | `O(1)` | `O(1)` / unsupported |
/// | `advance` | `O(1)` | `O(n)` |
/// | `retreat` | `O(1)` | `O(n)` / unsupported |
/// | `get` | `O(1)` | `O(1)` |
/// | `distance_to` | `O(1)` | `O(d)` |
pub struct Cursor<'a, T> {
    pub(crate) raw: RawCursor<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn from_raw(raw: RawCursor<T>) -> Cursor<'a, T> {
        Cursor {
            raw,
            _phantom: PhantomData,
        }
    }

    /// Returns the kind of collection this cursor was created from.
    pub fn kind(&self) -> CursorKind {
        self.raw.kind
    }

    /// Returns what this cursor is able to do, which depends only on its kind.
    pub fn capability(&self) -> Capability {
        self.raw.kind.capability()
    }

    /// Returns true if the cursor points at an element, which is whenever it isn't at the end.
    pub fn is_valid(&self) -> bool {
        !self.raw.is_end()
    }

    pub fn is_end(&self) -> bool {
        self.raw.is_end()
    }

    /// Returns the index of a random access cursor, which is the length of the collection at the
    /// end position. Cursors over linked lists don't track their index and return None.
    pub fn index(&self) -> Option<usize> {
        self.raw.index()
    }

    /// Returns a reference to the element the cursor points at, or None at the end position.
    /// The reference lives as long as the borrow of the collection, not just the cursor.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::Vector;
    /// # use standard_collections::collections::traits::Traverse;
    /// let vec: Vector<_> = (1..=2).collect();
    /// let first = vec.begin();
    /// assert_eq!(first.get(), Some(&1));
    /// assert_eq!(first.next().get(), Some(&2));
    /// assert_eq!(vec.end().get(), None);
    /// ```
    pub fn get(&self) -> Option<&'a T> {
        // SAFETY: element only returns pointers to initialized values, which live for 'a because
        // the collection is borrowed for 'a.
        self.raw.element().map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Returns the cursor one step forward. At the end position, the end position is returned.
    #[must_use]
    pub fn next(mut self) -> Cursor<'a, T> {
        self.raw.step_next();
        self
    }

    /// Moves the cursor one step forward in place, staying put at the end position.
    pub fn move_next(&mut self) {
        self.raw.step_next();
    }

    /// Returns the cursor one step backward.
    ///
    /// # Errors
    /// Returns [`CursorError::NoPredecessor`] if the cursor is at the first position (which is
    /// also the end position of an empty collection) and [`CursorError::Unsupported`] if the
    /// collection can't be traversed backwards at all.
    pub fn prev(mut self) -> Result<Cursor<'a, T>, CursorError> {
        self.raw.step_prev()?;
        Ok(self)
    }

    /// Moves the cursor one step backward in place. The cursor doesn't move if this fails.
    ///
    /// # Errors
    /// As for [`Cursor::prev`].
    pub fn move_prev(&mut self) -> Result<(), CursorError> {
        self.raw.step_prev()
    }

    /// Returns the cursor `n` steps forward, stopping at the end position.
    #[must_use]
    pub fn advance(mut self, n: usize) -> Cursor<'a, T> {
        self.raw.step_forward(n);
        self
    }

    /// Returns the cursor `n` steps backward. Retreating by 0 always succeeds.
    ///
    /// # Errors
    /// If any one of the `n` steps would fail, the error of that step is returned, as for
    /// [`Cursor::prev`].
    pub fn retreat(mut self, n: usize) -> Result<Cursor<'a, T>, CursorError> {
        self.raw.step_back(n)?;
        Ok(self)
    }

    /// Returns the number of steps forward from this cursor to `end`. If `end` can't be reached
    /// by moving forward, or belongs to a different collection, 0 is returned.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::CircularList;
    /// # use standard_collections::collections::traits::Traverse;
    /// let ring: CircularList<_> = [100, 200, 300].into_iter().collect();
    /// assert_eq!(ring.begin().distance_to(&ring.end()), 3);
    /// assert_eq!(ring.end().distance_to(&ring.begin()), 0);
    /// ```
    pub fn distance_to(&self, end: &Cursor<'a, T>) -> usize {
        self.raw.distance_to(&end.raw)
    }

    /// Returns a cursor to the first element in `[self, end)` that matches the predicate, or a
    /// cursor equal to `end` if none do.
    pub fn find_if<P>(self, end: Cursor<'a, T>, mut predicate: P) -> Cursor<'a, T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut curr = self;
        while curr != end {
            match curr.get() {
                Some(value) if predicate(value) => return curr,
                Some(_) => curr.move_next(),
                // The end of the collection was reached without meeting `end`.
                None => break,
            }
        }
        end
    }

    /// Returns an iterator over the elements in `[self, end)`.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::SinglyLinkedList;
    /// # use standard_collections::collections::traits::Traverse;
    /// let list: SinglyLinkedList<_> = (0..5).collect();
    /// let from = list.begin().advance(1);
    /// let to = from.advance(3);
    /// assert!(from.until(to).eq(&[1, 2, 3]));
    /// ```
    pub fn until(self, end: Cursor<'a, T>) -> Range<'a, T> {
        Range { curr: self, end }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: Debug> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("kind", &self.raw.kind)
            .field("index", &self.raw.index())
            .field("element", &self.get())
            .finish()
    }
}
