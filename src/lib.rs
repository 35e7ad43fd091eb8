//! Self-balancing binary search trees built on one shared rotation primitive.
//!
//! `AvlTree`, `RedBlackTree` and `SplayTree` are thin wrappers around `bst::BinaryTree`, a binary
//! search tree stored in a typed arena and parameterized by a balancing strategy. The strategy is
//! the node payload type and runs its fix-up pass after every insertion. An unbalanced
//! `SearchTree`, an array-backed `BinaryHeap` and the `DynamicArray` it is built on round out the
//! collections, all sharing the `Tree` interface.

pub mod arena;
pub mod avl_tree;
pub mod bst;
pub mod dynamic_array;
mod error;
pub mod heap;
pub mod red_black_tree;
pub mod search_tree;
pub mod splay_tree;
mod tree;

pub use crate::error::{Error, Result};
pub use crate::tree::Tree;
