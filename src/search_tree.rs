//! Binary search tree without any self-balancing.

use crate::bst::BinaryTree;
use crate::tree::Tree;
use std::fmt;

/// An ordered multiset implemented using an unbalanced binary search tree.
///
/// Elements are inserted as leaves and never moved, so the shape of the tree depends entirely on
/// insertion order. Inserting sorted elements degrades every operation to linear time.
///
/// # Examples
///
/// ```
/// use balanced_trees::search_tree::SearchTree;
///
/// let mut tree = SearchTree::new();
/// tree.add(2);
/// tree.add(1);
///
/// assert!(tree.contains(&1));
/// assert_eq!(tree.min(), Some(&1));
/// assert_eq!(tree.max(), Some(&2));
/// ```
pub struct SearchTree<T> {
    tree: BinaryTree<T, ()>,
}

impl<T> SearchTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `SearchTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::search_tree::SearchTree;
    ///
    /// let tree: SearchTree<u32> = SearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        SearchTree {
            tree: BinaryTree::new(),
        }
    }

    /// Adds an element to the tree as a leaf. Equal elements are kept side by side.
    pub fn add(&mut self, elem: T) {
        self.tree.insert(elem);
    }

    /// Checks if an element exists in the tree.
    pub fn contains(&self, elem: &T) -> bool {
        self.tree.find(elem).is_some()
    }

    /// Returns the minimum element of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree.min_node().map(|node| self.tree.elem(node))
    }

    /// Returns the maximum element of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree.max_node().map(|node| self.tree.elem(node))
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl<T> Tree<T> for SearchTree<T>
where
    T: Ord,
{
    fn add(&mut self, elem: T) {
        SearchTree::add(self, elem);
    }

    fn contains(&mut self, elem: &T) -> bool {
        SearchTree::contains(self, elem)
    }

    fn find_min(&mut self) -> Option<&T> {
        self.min()
    }

    fn find_max(&mut self) -> Option<&T> {
        self.max()
    }

    fn len(&self) -> usize {
        SearchTree::len(self)
    }
}

impl<T> Default for SearchTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.tree)
    }
}
