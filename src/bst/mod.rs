//! Binary search tree skeleton shared by every tree in this crate.
//!
//! Nodes live in a `TypedArena` and link to each other through `Handle`s, so the parent
//! back-references never take part in ownership. The skeleton provides leaf insertion and the
//! single rotation primitive. How the tree is kept balanced is decided by the node payload type,
//! which implements `Balance`.

mod node;
mod tree;

pub use self::node::{Node, Side};
pub use self::tree::BinaryTree;

use crate::arena::Handle;

/// A balancing strategy for a `BinaryTree`.
///
/// The strategy is implemented by the per-node payload type: whatever a balancer needs to store on
/// each node (a height, a color, or nothing at all) is the type that carries its fix-up logic.
/// Newly inserted leaves start with `Self::default()`.
pub trait Balance<T>: Default + Sized {
    /// Restores the strategy's invariants after `node` was linked into the tree as a new leaf.
    fn rebalance(tree: &mut BinaryTree<T, Self>, node: Handle);

    /// Called after `node` was rotated up over `old_parent`, which is now its child.
    fn rotated(_tree: &mut BinaryTree<T, Self>, _old_parent: Handle, _node: Handle) {}
}

/// The unbalanced strategy: leaves are left where they were inserted.
impl<T> Balance<T> for () {
    fn rebalance(_tree: &mut BinaryTree<T, Self>, _node: Handle) {}
}
