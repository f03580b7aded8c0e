//! A Binary Search Tree (BST) that is built balanced and rebalanced on
//! request rather than on every mutation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! owns up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` where `height` is the longest path
//! from the root `Node` to a leaf `Node`. A [`Tree`][tree::Tree] built from a
//! collection of values has a height of `O(lg N)`. Inserting values one by one
//! never restructures the tree, so an ascending run of inserts grows a single
//! path and the height drifts towards `N`. [`Tree::rebalance`][tree::Tree::rebalance]
//! rebuilds the tree balanced again when the root's subtrees differ in height
//! by two or more.
//!
//! Walking the tree left subtree, subtree root, right subtree visits the
//! values in sorted order.
//!
//! Nothing here is thread-safe beyond what `&`/`&mut` already guarantee, and
//! the tree never stores the same value twice.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod traverse;
pub mod tree;

mod util;

#[cfg(test)]
mod test;

pub use error::{DuplicateValueError, TreeError, ValueNotFoundError};
pub use node::Node;
pub use tree::Tree;
