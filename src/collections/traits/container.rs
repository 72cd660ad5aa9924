/// The operations every collection supports.
pub trait Container {
    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every element in the collection.
    fn clear(&mut self);
}
