/// The operations shared by every ordered collection in this crate.
///
/// Queries take `&mut self` because self-adjusting collections such as the splay tree restructure
/// themselves on access. Collections that do not restructure also expose `&self` variants of these
/// queries as inherent methods.
pub trait Tree<T> {
    /// Adds an element to the collection. Duplicates are allowed.
    fn add(&mut self, elem: T);

    /// Returns `true` if an element equal to `elem` is in the collection.
    fn contains(&mut self, elem: &T) -> bool;

    /// Returns the minimum element, or `None` if the collection is empty.
    fn find_min(&mut self) -> Option<&T>;

    /// Returns the maximum element, or `None` if the collection is empty.
    fn find_max(&mut self) -> Option<&T>;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
