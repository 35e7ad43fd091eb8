use crate::arena::Handle;
use crate::bst::{Balance, BinaryTree, Side};
use log::debug;
use std::cmp;

/// The height of an avl tree node. A leaf has height 0 and an absent child has height -1.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Height(pub i32);

pub fn height<T>(tree: &BinaryTree<T, Height>, node: Option<Handle>) -> i32 {
    match node {
        None => -1,
        Some(node) => tree[node].payload.0,
    }
}

pub fn update<T>(tree: &mut BinaryTree<T, Height>, node: Handle) {
    let left_height = height(tree, tree.left(node));
    let right_height = height(tree, tree.right(node));
    tree[node].payload = Height(cmp::max(left_height, right_height) + 1);
}

pub fn balance_factor<T>(tree: &BinaryTree<T, Height>, node: Handle) -> i32 {
    height(tree, tree.right(node)) - height(tree, tree.left(node))
}

// Rotates the heavy subtree of `node` up and returns the new local root.
fn rotate_heavy<T>(tree: &mut BinaryTree<T, Height>, node: Handle, heavy: Side) -> Handle {
    let child = tree[node]
        .child(heavy)
        .expect("Expected heavy child node to be `Some`.");
    let child_balance = balance_factor(tree, child);
    let is_bent = match heavy {
        Side::Left => child_balance > 0,
        Side::Right => child_balance < 0,
    };

    let pivot = if is_bent {
        let grandchild = tree[child]
            .child(heavy.opposite())
            .expect("Expected inner grandchild node to be `Some`.");
        debug!("avl double rotation towards {:?}", heavy.opposite());
        tree.rotate(grandchild);
        grandchild
    } else {
        debug!("avl single rotation towards {:?}", heavy.opposite());
        child
    };

    tree.rotate(pivot)
        .expect("Expected pivot node to have a parent.")
}

impl<T> Balance<T> for Height {
    fn rebalance(tree: &mut BinaryTree<T, Self>, node: Handle) {
        let mut curr = tree.parent(node);
        while let Some(mut ancestor) = curr {
            update(tree, ancestor);

            let balance = balance_factor(tree, ancestor);
            if balance > 1 {
                ancestor = rotate_heavy(tree, ancestor, Side::Right);
            } else if balance < -1 {
                ancestor = rotate_heavy(tree, ancestor, Side::Left);
            }

            curr = tree.parent(ancestor);
        }
    }

    fn rotated(tree: &mut BinaryTree<T, Self>, old_parent: Handle, node: Handle) {
        update(tree, old_parent);
        update(tree, node);
    }
}
