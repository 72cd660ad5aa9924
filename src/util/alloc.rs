#![cfg_attr(not(test), allow(dead_code))]

use std::cell::Cell;
use std::rc::Rc;

/// A value which counts how many times it (or any of its clones) has been dropped. Used to check
/// that collections drop every element exactly once.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;
