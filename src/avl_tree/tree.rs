use crate::avl_tree::node::Height;
use crate::bst::BinaryTree;
use crate::tree::Tree;
use std::fmt;

/// An ordered multiset implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. After every insertion the
/// heights along the path to the root are recomputed and at most one single or double rotation
/// restores the invariant.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.add(0);
/// tree.add(3);
/// tree.add(3);
///
/// assert_eq!(tree.len(), 3);
/// assert!(tree.contains(&3));
/// assert_eq!(tree.min(), Some(&0));
/// assert_eq!(tree.max(), Some(&3));
/// ```
pub struct AvlTree<T> {
    tree: BinaryTree<T, Height>,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlTree {
            tree: BinaryTree::new(),
        }
    }

    /// Adds an element to the tree. Equal elements are kept side by side.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(1);
    /// tree.add(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, elem: T) {
        self.tree.insert(elem);
    }

    /// Checks if an element exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
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

impl<T> Tree<T> for AvlTree<T>
where
    T: Ord,
{
    fn add(&mut self, elem: T) {
        AvlTree::add(self, elem);
    }

    fn contains(&mut self, elem: &T) -> bool {
        AvlTree::contains(self, elem)
    }

    fn find_min(&mut self) -> Option<&T> {
        self.min()
    }

    fn find_max(&mut self) -> Option<&T> {
        self.max()
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for AvlTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.tree)
    }
}

#[cfg(test)]
mod tests {
    use super::AvlTree;
    use crate::arena::Handle;
    use crate::avl_tree::node::{balance_factor, Height};
    use crate::bst::BinaryTree;
    use crate::tree::Tree;
    use rand::Rng;

    fn checked_height<T>(tree: &BinaryTree<T, Height>, node: Option<Handle>) -> i32 {
        match node {
            None => -1,
            Some(node) => {
                let left_height = checked_height(tree, tree.left(node));
                let right_height = checked_height(tree, tree.right(node));
                let expected = left_height.max(right_height) + 1;
                assert_eq!(tree[node].payload, Height(expected));
                assert!(balance_factor(tree, node).abs() <= 1);
                expected
            },
        }
    }

    fn assert_avl<T: Ord>(tree: &AvlTree<T>) {
        tree.tree.assert_well_formed();
        checked_height(&tree.tree, tree.tree.root());
    }

    #[test]
    fn test_len_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert!(!tree.contains(&0));
    }

    #[test]
    fn test_leaf_height() {
        let mut tree = AvlTree::new();
        tree.add(1);
        let root = tree.tree.root().unwrap();
        assert_eq!(tree.tree[root].payload, Height(0));
    }

    #[test]
    fn test_balanced_after_each_insert() {
        let mut tree = AvlTree::new();
        for elem in &[5, 3, 8, 1, 4, 7, 9, 2, 6, 0] {
            tree.add(*elem);
            assert_avl(&tree);
        }
        assert_eq!(
            tree.tree.in_order(),
            vec![&0, &1, &2, &3, &4, &5, &6, &7, &8, &9],
        );
        assert_eq!(tree.min(), Some(&0));
        assert_eq!(tree.max(), Some(&9));
    }

    #[test]
    fn test_right_right() {
        let mut tree = AvlTree::new();
        tree.add(1);
        tree.add(2);
        tree.add(3);
        let root = tree.tree.root().unwrap();
        assert_eq!(tree.tree.elem(root), &2);
        assert_eq!(tree.tree[root].payload, Height(1));
        assert_avl(&tree);
    }

    #[test]
    fn test_right_left() {
        let mut tree = AvlTree::new();
        tree.add(1);
        tree.add(3);
        tree.add(2);
        let root = tree.tree.root().unwrap();
        assert_eq!(tree.tree.elem(root), &2);
        assert_avl(&tree);
    }

    #[test]
    fn test_left_right() {
        let mut tree = AvlTree::new();
        tree.add(3);
        tree.add(1);
        tree.add(2);
        let root = tree.tree.root().unwrap();
        assert_eq!(tree.tree.elem(root), &2);
        assert_avl(&tree);
    }

    #[test]
    fn test_ascending_height() {
        let mut tree = AvlTree::new();
        for elem in 0..1023 {
            tree.add(elem);
        }
        assert_avl(&tree);
        let root = tree.tree.root().unwrap();
        assert_eq!(tree.tree[root].payload, Height(9));
    }

    #[test]
    fn test_duplicates() {
        let mut tree = AvlTree::new();
        for _ in 0..100 {
            tree.add(7);
        }
        tree.add(3);
        assert_avl(&tree);
        assert_eq!(tree.len(), 101);
        assert!(tree.contains(&7));
        assert_eq!(tree.min(), Some(&3));
    }

    #[test]
    fn test_random() {
        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
        let mut tree = AvlTree::new();
        let mut expected = Vec::new();
        for _ in 0..2000 {
            let elem = rng.gen_range(0, 500);
            tree.add(elem);
            expected.push(elem);
            assert_avl(&tree);
        }
        expected.sort();
        assert_eq!(tree.tree.in_order(), expected.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_tree_trait() {
        let mut tree = AvlTree::new();
        Tree::add(&mut tree, 2);
        Tree::add(&mut tree, 1);
        assert!(Tree::contains(&mut tree, &1));
        assert_eq!(tree.find_min(), Some(&1));
        assert_eq!(tree.find_max(), Some(&2));
        assert_eq!(Tree::len(&tree), 2);
        assert!(!Tree::is_empty(&tree));
    }

    #[test]
    fn test_debug() {
        let mut tree = AvlTree::new();
        tree.add(2);
        tree.add(1);
        assert_eq!(
            format!("{:?}", tree),
            "2 Height(1)\n|-1 Height(0)\n| |-nil\n| |-nil\n|-nil",
        );
    }
}
