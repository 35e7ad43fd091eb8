use crate::bst::BinaryTree;
use crate::splay_tree::node::{splay, Splay};
use crate::tree::Tree;
use std::fmt;

/// An ordered multiset implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed elements are quick to access again. Every insertion and every successful query moves
/// the accessed node to the root, so queries take `&mut self`.
///
/// # Examples
///
/// ```
/// use balanced_trees::splay_tree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.add(0);
/// tree.add(3);
/// assert_eq!(tree.root(), Some(&3));
///
/// assert!(tree.contains(&0));
/// assert_eq!(tree.root(), Some(&0));
///
/// assert_eq!(tree.max(), Some(&3));
/// assert_eq!(tree.root(), Some(&3));
/// ```
pub struct SplayTree<T> {
    tree: BinaryTree<T, Splay>,
}

impl<T> SplayTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `SplayTree<T>`.
    pub fn new() -> Self {
        SplayTree {
            tree: BinaryTree::new(),
        }
    }

    /// Adds an element to the tree and moves it to the root.
    pub fn add(&mut self, elem: T) {
        self.tree.insert(elem);
    }

    /// Checks if an element exists in the tree. If it does, its node is moved to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.add(1);
    /// tree.add(2);
    /// assert!(!tree.contains(&0));
    /// assert_eq!(tree.root(), Some(&2));
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.root(), Some(&1));
    /// ```
    pub fn contains(&mut self, elem: &T) -> bool {
        match self.tree.find(elem) {
            Some(node) => {
                splay(&mut self.tree, node);
                true
            },
            None => false,
        }
    }

    /// Returns the minimum element of the tree and moves it to the root. Returns `None` if the
    /// tree is empty.
    pub fn min(&mut self) -> Option<&T> {
        let node = self.tree.min_node()?;
        splay(&mut self.tree, node);
        Some(self.tree.elem(node))
    }

    /// Returns the maximum element of the tree and moves it to the root. Returns `None` if the
    /// tree is empty.
    pub fn max(&mut self) -> Option<&T> {
        let node = self.tree.max_node()?;
        splay(&mut self.tree, node);
        Some(self.tree.elem(node))
    }

    /// Returns the element at the root of the tree, which is the most recently accessed element.
    /// Returns `None` if the tree is empty.
    pub fn root(&self) -> Option<&T> {
        self.tree.root().map(|node| self.tree.elem(node))
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

impl<T> Tree<T> for SplayTree<T>
where
    T: Ord,
{
    fn add(&mut self, elem: T) {
        SplayTree::add(self, elem);
    }

    fn contains(&mut self, elem: &T) -> bool {
        SplayTree::contains(self, elem)
    }

    fn find_min(&mut self) -> Option<&T> {
        self.min()
    }

    fn find_max(&mut self) -> Option<&T> {
        self.max()
    }

    fn len(&self) -> usize {
        SplayTree::len(self)
    }
}

impl<T> Default for SplayTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SplayTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.tree)
    }
}
