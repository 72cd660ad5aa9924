use derive_more::{Display, Error};

/// An error produced when an index doesn't refer to an element of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    /// The index that was provided.
    pub index: usize,
    /// The length of the collection at the time of the access.
    pub len: usize,
}

/// An error produced when a collection would need more than [`isize::MAX`] bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

/// An error produced when adding an element to a collection which is already full and isn't
/// allowed to grow.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("collection is full, with a fixed capacity of {cap}")]
pub struct CapacityExceeded {
    /// The fixed capacity of the collection.
    pub cap: usize,
}
