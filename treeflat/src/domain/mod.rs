//! Domain layer: tree/list conversion and comparison
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod compare;
pub mod entities;
pub mod error;
pub mod flatten;
pub mod intersect;
pub mod registry;
pub mod tree;
pub mod validate;

pub use arena::TreeArena;
pub use builder::{build_tree, build_tree_strict, TreeBuilder};
pub use compare::{compare, multiset_equal, structurally_equal, Comparison};
pub use entities::{FlatNode, Label, LabelValue};
pub use error::{DomainError, DomainResult, Malformation};
pub use flatten::flatten_tree;
pub use intersect::intersect;
pub use registry::NodeRegistry;
pub use tree::{BfsIter, TreeNode, TreeNodeConvert};
pub use validate::{find_malformations, validate};
