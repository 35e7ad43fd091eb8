use crate::arena::{Handle, TypedArena, DEFAULT_CHUNK_SIZE};
use crate::bst::node::{Node, Side};
use crate::bst::Balance;
use log::trace;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A binary search tree whose nodes are stored in a typed arena.
///
/// Elements equal to an existing element are inserted to its right. The tree only grows; nodes
/// are restructured in place by `rotate` and dropped together with the tree.
pub struct BinaryTree<T, P> {
    arena: TypedArena<Node<T, P>>,
    root: Option<Handle>,
    len: usize,
}

impl<T, P> BinaryTree<T, P> {
    /// Constructs a new, empty `BinaryTree<T, P>`.
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `BinaryTree<T, P>` whose arena allocates `chunk_size` nodes at a
    /// time.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        BinaryTree {
            arena: TypedArena::new(chunk_size),
            root: None,
            len: 0,
        }
    }

    pub fn root(&self) -> Option<Handle> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn elem(&self, node: Handle) -> &T {
        &self.arena[node].elem
    }

    pub fn parent(&self, node: Handle) -> Option<Handle> {
        self.arena[node].parent
    }

    pub fn left(&self, node: Handle) -> Option<Handle> {
        self.arena[node].left
    }

    pub fn right(&self, node: Handle) -> Option<Handle> {
        self.arena[node].right
    }

    /// Returns which slot of its parent `node` occupies, or `None` for the root.
    pub fn side_of(&self, node: Handle) -> Option<Side> {
        self.parent(node).map(|parent| {
            self.arena[parent]
                .side_of(node)
                .expect("Expected node to be a child of its parent.")
        })
    }

    /// Returns the other child of `node`'s parent.
    pub fn sibling(&self, node: Handle) -> Option<Handle> {
        let side = self.side_of(node)?;
        let parent = self.parent(node)?;
        self.arena[parent].child(side.opposite())
    }

    /// Returns `true` if `node`, its parent and its grandparent form a straight line.
    pub fn is_zig_zig(&self, node: Handle) -> bool {
        let parent = match self.parent(node) {
            Some(parent) => parent,
            None => return false,
        };
        match (self.side_of(node), self.side_of(parent)) {
            (Some(node_side), Some(parent_side)) => node_side == parent_side,
            _ => false,
        }
    }

    /// Returns the leftmost node of the tree.
    pub fn min_node(&self) -> Option<Handle> {
        let mut curr = self.root?;
        while let Some(left) = self.left(curr) {
            curr = left;
        }
        Some(curr)
    }

    /// Returns the rightmost node of the tree.
    pub fn max_node(&self) -> Option<Handle> {
        let mut curr = self.root?;
        while let Some(right) = self.right(curr) {
            curr = right;
        }
        Some(curr)
    }

    fn fmt_subtree(
        &self,
        f: &mut fmt::Formatter,
        node: Option<Handle>,
        indent: usize,
    ) -> fmt::Result
    where
        T: fmt::Debug,
        P: fmt::Debug,
    {
        for _ in 1..indent {
            write!(f, "| ")?;
        }
        if indent > 0 {
            write!(f, "|-")?;
        }

        match node {
            None => write!(f, "nil"),
            Some(node) => {
                let Node { elem, payload, left, right, .. } = &self.arena[node];
                writeln!(f, "{:?} {:?}", elem, payload)?;
                self.fmt_subtree(f, *left, indent + 1)?;
                writeln!(f)?;
                self.fmt_subtree(f, *right, indent + 1)
            },
        }
    }
}

impl<T, P> BinaryTree<T, P>
where
    T: Ord,
{
    /// Returns a node holding an element equal to `elem`.
    pub fn find(&self, elem: &T) -> Option<Handle> {
        let mut curr = self.root;
        while let Some(node) = curr {
            let node_ref = &self.arena[node];
            curr = match elem.cmp(&node_ref.elem) {
                Ordering::Less => node_ref.left,
                Ordering::Greater => node_ref.right,
                Ordering::Equal => return Some(node),
            };
        }
        None
    }
}

impl<T, P> BinaryTree<T, P>
where
    T: Ord,
    P: Balance<T>,
{
    /// Links `elem` into the tree as a new leaf without rebalancing and returns its node.
    pub fn insert_leaf(&mut self, elem: T) -> Handle {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(node) = curr {
            side = if elem < self.arena[node].elem {
                Side::Left
            } else {
                Side::Right
            };
            parent = Some(node);
            curr = self.arena[node].child(side);
        }

        let mut new_node = Node::new(elem);
        new_node.parent = parent;
        let handle = self.arena.allocate(new_node);
        match parent {
            Some(parent) => *self.arena[parent].child_mut(side) = Some(handle),
            None => self.root = Some(handle),
        }
        self.len += 1;
        handle
    }

    /// Inserts `elem` as a new leaf and lets the balancing strategy restore its invariants.
    /// Returns the node holding `elem`.
    pub fn insert(&mut self, elem: T) -> Handle {
        let node = self.insert_leaf(elem);
        P::rebalance(self, node);
        node
    }
}

impl<T, P> BinaryTree<T, P>
where
    P: Balance<T>,
{
    /// Rotates `child` up over its parent, keeping the in-order sequence of elements intact.
    ///
    /// Returns `child`, now the root of the rotated subtree, or `None` if `child` has no parent
    /// and nothing was done.
    pub fn rotate(&mut self, child: Handle) -> Option<Handle> {
        let parent = self.parent(child)?;
        let side = self.arena[parent]
            .side_of(child)
            .expect("Expected node to be a child of its parent.");
        let grandparent = self.parent(parent);

        match grandparent {
            Some(grandparent) => {
                let parent_side = self.arena[grandparent]
                    .side_of(parent)
                    .expect("Expected node to be a child of its parent.");
                *self.arena[grandparent].child_mut(parent_side) = Some(child);
            },
            None => self.root = Some(child),
        }
        self.arena[child].parent = grandparent;
        self.arena[parent].parent = Some(child);

        let inner = self.arena[child].child(side.opposite());
        *self.arena[parent].child_mut(side) = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(parent);
        }
        *self.arena[child].child_mut(side.opposite()) = Some(parent);

        trace!("rotated {:?} child up over its parent", side);
        P::rotated(self, parent, child);
        Some(child)
    }
}

impl<T, P> Default for BinaryTree<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Index<Handle> for BinaryTree<T, P> {
    type Output = Node<T, P>;

    fn index(&self, node: Handle) -> &Self::Output {
        &self.arena[node]
    }
}

impl<T, P> IndexMut<Handle> for BinaryTree<T, P> {
    fn index_mut(&mut self, node: Handle) -> &mut Self::Output {
        &mut self.arena[node]
    }
}

impl<T, P> fmt::Debug for BinaryTree<T, P>
where
    T: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_subtree(f, self.root, 0)
    }
}

#[cfg(test)]
impl<T, P> BinaryTree<T, P>
where
    T: Ord,
{
    /// Returns the elements of the tree in in-order sequence.
    pub(crate) fn in_order(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut curr = self.root;
        while curr.is_some() || !stack.is_empty() {
            while let Some(node) = curr {
                stack.push(node);
                curr = self.left(node);
            }
            if let Some(node) = stack.pop() {
                ret.push(self.elem(node));
                curr = self.right(node);
            }
        }
        ret
    }

    /// Asserts that every link is mirrored by a parent link, that the element count matches and
    /// that every node lies between the bounds imposed by its ancestors.
    pub(crate) fn assert_well_formed(&self) {
        let mut count = 0;
        if let Some(root) = self.root {
            assert_eq!(self.parent(root), None);
            let mut stack = vec![(root, None, None)];
            while let Some((node, lower, upper)) = stack.pop() {
                count += 1;
                let elem = self.elem(node);
                if let Some(lower) = lower {
                    assert!(elem >= lower);
                }
                if let Some(upper) = upper {
                    assert!(elem <= upper);
                }
                if let Some(left) = self.left(node) {
                    assert_eq!(self.parent(left), Some(node));
                    stack.push((left, lower, Some(elem)));
                }
                if let Some(right) = self.right(node) {
                    assert_eq!(self.parent(right), Some(node));
                    stack.push((right, Some(elem), upper));
                }
            }
        }
        assert_eq!(count, self.len);
    }
}
