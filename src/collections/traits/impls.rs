use std::convert::Infallible;
use std::ptr::NonNull;

use super::{Container, Linear, RandomAccess, Traverse};
use crate::collections::contiguous::{StaticArray, Vector};
use crate::collections::linked::{CircularList, DoublyLinkedList, SinglyLinkedList};
use crate::cursor::{Cursor, CursorKind, CursorMut, RawCursor};
use crate::util::error::{CapacityExceeded, IndexOutOfBounds};

// Method calls are written with explicit paths throughout, because the traits share names with
// the inherent methods and slice methods they forward to.

fn owner<C>(collection: &C) -> NonNull<()> {
    NonNull::from(collection).cast()
}

macro_rules! impl_container {
    ($($collection:ident),*) => {
        $(
            impl<T> Container for $collection<T> {
                fn len(&self) -> usize {
                    $collection::len(self)
                }

                fn clear(&mut self) {
                    $collection::clear(self)
                }
            }
        )*
    };
}

impl_container!(StaticArray, Vector, SinglyLinkedList, DoublyLinkedList, CircularList);

macro_rules! impl_contiguous {
    ($collection:ident, $kind:expr) => {
        impl<T> RandomAccess<T> for $collection<T> {
            fn get(&self, index: usize) -> Option<&T> {
                <[T]>::get(self, index)
            }

            fn get_mut(&mut self, index: usize) -> Option<&mut T> {
                <[T]>::get_mut(self, index)
            }

            fn replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
                let len = $collection::len(self);
                let slot = <[T]>::get_mut(self, index).ok_or(IndexOutOfBounds { index, len })?;
                Ok(std::mem::replace(slot, value))
            }
        }

        impl<T> Traverse<T> for $collection<T> {
            fn begin(&self) -> Cursor<'_, T> {
                let len = $collection::len(self);
                let base = NonNull::from(&**self).cast();
                Cursor::from_raw(RawCursor::over_slice($kind, owner(self), base, len, 0))
            }

            fn end(&self) -> Cursor<'_, T> {
                let len = $collection::len(self);
                let base = NonNull::from(&**self).cast();
                Cursor::from_raw(RawCursor::over_slice($kind, owner(self), base, len, len))
            }

            fn begin_mut(&mut self) -> CursorMut<'_, T> {
                let owner = owner(&*self);
                let len = $collection::len(self);
                let base = NonNull::from(&mut **self).cast();
                CursorMut::from_raw(RawCursor::over_slice($kind, owner, base, len, 0))
            }

            fn end_mut(&mut self) -> CursorMut<'_, T> {
                let owner = owner(&*self);
                let len = $collection::len(self);
                let base = NonNull::from(&mut **self).cast();
                CursorMut::from_raw(RawCursor::over_slice($kind, owner, base, len, len))
            }
        }
    };
}

impl_contiguous!(StaticArray, CursorKind::StaticArray);
impl_contiguous!(Vector, CursorKind::DynamicArray);

macro_rules! impl_forward {
    ($collection:ident, $kind:expr) => {
        impl<T> Linear<T> for $collection<T> {
            type Error = Infallible;

            fn push_front(&mut self, value: T) -> Result<(), Self::Error> {
                $collection::push_front(self, value);
                Ok(())
            }

            fn push_back(&mut self, value: T) -> Result<(), Self::Error> {
                $collection::push_back(self, value);
                Ok(())
            }

            fn pop_front(&mut self) -> Option<T> {
                $collection::pop_front(self)
            }

            fn pop_back(&mut self) -> Option<T> {
                $collection::pop_back(self)
            }

            fn front(&self) -> Option<&T> {
                $collection::front(self)
            }

            fn back(&self) -> Option<&T> {
                $collection::back(self)
            }
        }

        impl<T> Traverse<T> for $collection<T> {
            fn begin(&self) -> Cursor<'_, T> {
                let (first, ghost) = (self.chain.first(), self.chain.ghost);
                Cursor::from_raw(RawCursor::over_forward($kind, owner(self), first, ghost))
            }

            fn end(&self) -> Cursor<'_, T> {
                let ghost = self.chain.ghost;
                Cursor::from_raw(RawCursor::over_forward($kind, owner(self), ghost, ghost))
            }

            fn begin_mut(&mut self) -> CursorMut<'_, T> {
                let (first, ghost) = (self.chain.first(), self.chain.ghost);
                CursorMut::from_raw(RawCursor::over_forward($kind, owner(&*self), first, ghost))
            }

            fn end_mut(&mut self) -> CursorMut<'_, T> {
                let ghost = self.chain.ghost;
                CursorMut::from_raw(RawCursor::over_forward($kind, owner(&*self), ghost, ghost))
            }
        }
    };
}

impl_forward!(SinglyLinkedList, CursorKind::SinglyLinked);
impl_forward!(CircularList, CursorKind::Circular);

impl<T> Linear<T> for DoublyLinkedList<T> {
    type Error = Infallible;

    fn push_front(&mut self, value: T) -> Result<(), Self::Error> {
        DoublyLinkedList::push_front(self, value);
        Ok(())
    }

    fn push_back(&mut self, value: T) -> Result<(), Self::Error> {
        DoublyLinkedList::push_back(self, value);
        Ok(())
    }

    fn pop_front(&mut self) -> Option<T> {
        DoublyLinkedList::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        DoublyLinkedList::pop_back(self)
    }

    fn front(&self) -> Option<&T> {
        DoublyLinkedList::front(self)
    }

    fn back(&self) -> Option<&T> {
        DoublyLinkedList::back(self)
    }
}

impl<T> Traverse<T> for DoublyLinkedList<T> {
    fn begin(&self) -> Cursor<'_, T> {
        Cursor::from_raw(RawCursor::over_linked(owner(self), self.ghost.next(), self.ghost))
    }

    fn end(&self) -> Cursor<'_, T> {
        Cursor::from_raw(RawCursor::over_linked(owner(self), self.ghost, self.ghost))
    }

    fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::from_raw(RawCursor::over_linked(owner(&*self), self.ghost.next(), self.ghost))
    }

    fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::from_raw(RawCursor::over_linked(owner(&*self), self.ghost, self.ghost))
    }
}

/// Pushing to the front of a Vector moves every element, so this is `O(n)` at the front and
/// amortized `O(1)` at the back.
impl<T> Linear<T> for Vector<T> {
    type Error = Infallible;

    fn push_front(&mut self, value: T) -> Result<(), Self::Error> {
        Vector::insert(self, 0, value);
        Ok(())
    }

    fn push_back(&mut self, value: T) -> Result<(), Self::Error> {
        Vector::push(self, value);
        Ok(())
    }

    fn pop_front(&mut self) -> Option<T> {
        Vector::try_remove(self, 0).ok()
    }

    fn pop_back(&mut self) -> Option<T> {
        Vector::pop(self)
    }

    fn front(&self) -> Option<&T> {
        <[T]>::first(self)
    }

    fn back(&self) -> Option<&T> {
        <[T]>::last(self)
    }
}

impl<T> Linear<T> for StaticArray<T> {
    type Error = CapacityExceeded;

    fn push_front(&mut self, value: T) -> Result<(), Self::Error> {
        if StaticArray::is_full(self) {
            return Err(CapacityExceeded { cap: self.cap() });
        }
        self.inner.insert(0, value);
        Ok(())
    }

    fn push_back(&mut self, value: T) -> Result<(), Self::Error> {
        StaticArray::push(self, value)
    }

    fn pop_front(&mut self) -> Option<T> {
        StaticArray::remove(self, 0).ok()
    }

    fn pop_back(&mut self) -> Option<T> {
        StaticArray::pop(self)
    }

    fn front(&self) -> Option<&T> {
        <[T]>::first(self)
    }

    fn back(&self) -> Option<&T> {
        <[T]>::last(self)
    }
}
