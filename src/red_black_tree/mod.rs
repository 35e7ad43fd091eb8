//! Self-balancing binary search tree that keeps the root black, never lets a red node have a red
//! parent, and gives every path to an absent child the same number of black nodes.

mod node;
mod tree;

pub use self::node::Color;
pub use self::tree::RedBlackTree;
