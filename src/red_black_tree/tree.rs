use crate::bst::BinaryTree;
use crate::red_black_tree::node::Color;
use crate::tree::Tree;
use std::fmt;

/// An ordered multiset implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black.
/// The root is black, a red node never has a red parent, and every path from a node to an absent
/// child passes through the same number of black nodes. New elements are inserted as red leaves
/// and violations are repaired by recoloring and at most two rotations.
///
/// # Examples
///
/// ```
/// use balanced_trees::red_black_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// tree.add(0);
/// tree.add(3);
///
/// assert_eq!(tree.len(), 2);
/// assert!(tree.contains(&0));
/// assert_eq!(tree.min(), Some(&0));
/// assert_eq!(tree.max(), Some(&3));
/// ```
pub struct RedBlackTree<T> {
    tree: BinaryTree<T, Color>,
}

impl<T> RedBlackTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        RedBlackTree {
            tree: BinaryTree::new(),
        }
    }

    /// Adds an element to the tree. Equal elements are kept side by side.
    pub fn add(&mut self, elem: T) {
        self.tree.insert(elem);
    }

    /// Checks if an element exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
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

impl<T> Tree<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn add(&mut self, elem: T) {
        RedBlackTree::add(self, elem);
    }

    fn contains(&mut self, elem: &T) -> bool {
        RedBlackTree::contains(self, elem)
    }

    fn find_min(&mut self) -> Option<&T> {
        self.min()
    }

    fn find_max(&mut self) -> Option<&T> {
        self.max()
    }

    fn len(&self) -> usize {
        RedBlackTree::len(self)
    }
}

impl<T> Default for RedBlackTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RedBlackTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.tree)
    }
}
