//! Conversion between parent-pointer node lists and nested trees.
//!
//! ```
//! use treeflat::domain::{build_tree, flatten_tree, structurally_equal, FlatNode};
//!
//! let nodes = vec![
//!     FlatNode::root(1),
//!     FlatNode::child(2, 1),
//!     FlatNode::child(3, 2),
//!     FlatNode::child(4, 2),
//!     FlatNode::child(5, 1),
//! ];
//! let tree = build_tree(&nodes);
//! let flat = flatten_tree(tree.as_ref());
//!
//! let labels: Vec<_> = flat.iter().map(|n| n.label).collect();
//! assert_eq!(labels, vec![1, 2, 5, 3, 4]);
//! assert!(structurally_equal(&nodes, &flat));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{build_tree, flatten_tree, structurally_equal, FlatNode, TreeNode};
