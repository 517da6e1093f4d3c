//! Structure engines
//!
//! Each engine exclusively owns one structure and everything needed to draw
//! it: node values, links, and per-node [`Motion`](crate::animation::Motion).
//! Engines never share nodes and never see each other; the session picks
//! which one receives a command.
//!
//! # Engines
//!
//! - [`ListEngine`] - Singly linked list with head/tail insert and tail removal
//! - [`BstEngine`] - Unbalanced binary search tree, duplicates go right
//! - [`ArrayEngine`] - Fixed-capacity array with a cyclic cursor

pub mod array;
pub mod bst;
pub mod list;

pub use array::ArrayEngine;
pub use bst::{BstEngine, TreeNode};
pub use list::{ListEngine, ListNode};
