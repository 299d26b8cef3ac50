//! This crate is the engine of a binary tree visualizer: a mutable
//! Binary Search Tree (BST) together with a deterministic layout
//! algorithm that assigns every node a 2D canvas position.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Equal values route
//!    right on insertion, so duplicates are kept rather than overwritten.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is defined as
//! the longest path from the root `Node` to a leaf `Node`). The tree in
//! [`tree`] performs no rebalancing, so adversarial insertion orders
//! degenerate into a chain and `height` becomes `O(n)`. Degenerate shapes
//! are part of what a visualizer exists to show, so this is accepted.
//!
//! ## Layout
//!
//! The [`layout`] module assigns coordinates purely as a function of tree
//! shape: a fixed root position, one row per depth level, and horizontal
//! offsets that halve with each level. Rendering, input validation, and
//! animation pacing belong to the embedding application; the engine only
//! hands out node ids, values, child links, and positions.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod layout;
pub mod tree;

#[cfg(test)]
pub(crate) mod test;
