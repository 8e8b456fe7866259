//! This crate exposes an AVL tree: a Binary Search Tree that keeps itself balanced.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! BSTs naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! ## AVL
//!
//! Searching, inserting and deleting all take `O(height)`. An AVL tree bounds the height
//! at `O(lg N)` by caching the height of every subtree and, after every insert or delete,
//! rotating any `Node` whose subtrees' heights differ by more than one.
//!
//! ```
//! use avltree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert_all(1..=7);
//!
//! assert_eq!(tree.to_string(), "[[1, 2, 3], 4, [5, 6, 7]]");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
pub mod node;
pub mod tree;
mod util;


pub use crate::node::Node;
pub use crate::tree::Tree;
