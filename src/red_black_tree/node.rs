use crate::arena::Handle;
use crate::bst::{Balance, BinaryTree};
use log::trace;

/// An enum representing the color of a node in a red black tree. New nodes are red.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Default for Color {
    fn default() -> Self {
        Color::Red
    }
}

pub fn is_black<T>(tree: &BinaryTree<T, Color>, node: Option<Handle>) -> bool {
    match node {
        None => true,
        Some(node) => tree[node].payload == Color::Black,
    }
}

impl<T> Balance<T> for Color {
    fn rebalance(tree: &mut BinaryTree<T, Self>, node: Handle) {
        let mut node = node;
        loop {
            let parent = match tree.parent(node) {
                Some(parent) => parent,
                None => {
                    tree[node].payload = Color::Black;
                    return;
                },
            };

            if tree[parent].payload == Color::Black {
                return;
            }

            // a red parent is never the root
            let grandparent = tree
                .parent(parent)
                .expect("Expected red node to have a parent.");
            let uncle = tree.sibling(parent);

            if is_black(tree, uncle) {
                let pivot = if tree.is_zig_zig(node) {
                    parent
                } else {
                    trace!("black uncle, straightening zig-zag");
                    tree.rotate(node)
                        .expect("Expected node to have a parent.")
                };
                trace!("black uncle, rotating over grandparent");
                tree.rotate(pivot);
                tree[pivot].payload = Color::Black;
                tree[grandparent].payload = Color::Red;
                return;
            }

            trace!("red uncle, pushing black down from grandparent");
            let uncle = uncle.expect("Expected red uncle node to be `Some`.");
            tree[grandparent].payload = Color::Red;
            tree[uncle].payload = Color::Black;
            tree[parent].payload = Color::Black;
            node = grandparent;
        }
    }
}
