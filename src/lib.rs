//! # Hornbeam
//!
//! A binary tree algorithms library for Rust.
//!
//! ## Overview
//!
//! Hornbeam builds binary trees from flattened level-order token sequences
//! (`"#"` marks a missing node) and runs the classic algorithms over them:
//! iterative traversals, structural equality, root-to-leaf path sums, cycle
//! injection and detection, and conversion to the first-child/next-sibling
//! ("down-right") representation.
//!
//! All nodes of a tree live in a single arena ([`NodeStore`]) and link to each
//! other by [`NodeIndex`], so a tree with injected cycles is still released by
//! dropping the arena.
//!
//! ```
//! use hornbeam::LeftRightTree;
//!
//! let tree = LeftRightTree::from_level_order(&["6", "3", "8", "1", "7", "#", "9"]).unwrap();
//! assert_eq!(tree.preorder(), vec![6, 3, 1, 7, 8, 9]);
//! ```

mod builder;
mod compare;
mod cycle;
mod display;
mod error;
mod hash;
mod iterator;
mod node;
mod path;
mod sibling;
mod store;
mod tree;

#[cfg(test)]
mod test;

pub use builder::{TokenFormat, TreeBuilder};
pub use cycle::{CyclicTree, LinkInstruction, LinkReport};
pub use display::{format_layers, format_values};
pub use error::{ParseError, StructureError, TreeError};
pub use iterator::{Inorder, Postorder, Preorder};
pub use node::Node;
pub use sibling::{FirstChildNextSiblingTree, SiblingNode};
pub use store::NodeStore;
pub use tree::LeftRightTree;

pub type NodeIndex = usize;
pub type NodeValue = i32;

pub type Result<T, E = TreeError> = std::result::Result<T, E>;
