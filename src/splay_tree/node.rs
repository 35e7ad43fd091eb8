use crate::arena::Handle;
use crate::bst::{Balance, BinaryTree};
use log::trace;

/// The payload of a splay tree node. Splay trees keep no per-node balancing state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Splay;

/// Moves `node` to the root of the tree.
///
/// While `node` has a parent, the parent is rotated up if `node`, its parent and its grandparent
/// form a straight line, and `node` itself is rotated up otherwise. The final rotation is a no-op
/// once `node` is the root.
pub fn splay<T>(tree: &mut BinaryTree<T, Splay>, node: Handle) {
    while let Some(parent) = tree.parent(node) {
        if tree.is_zig_zig(node) {
            trace!("splay zig-zig, rotating parent");
            tree.rotate(parent);
        } else {
            trace!("splay zig, rotating node");
            tree.rotate(node);
        }
    }

    tree.rotate(node);
}

impl<T> Balance<T> for Splay {
    fn rebalance(tree: &mut BinaryTree<T, Self>, node: Handle) {
        splay(tree, node);
    }
}
