//! Tree builder: reconstructs a nested tree from a parent-pointer list.

use tracing::{debug, instrument, trace};

use crate::domain::entities::{FlatNode, Label};
use crate::domain::error::DomainResult;
use crate::domain::registry::NodeRegistry;
use crate::domain::tree::TreeNode;
use crate::domain::validate::validate;

/// Constructs a [`TreeNode`] from flat entries.
///
/// Lenient by default: malformed input degrades into a partial or empty tree.
/// With `strict` set, [`validate`] runs first and any defect is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    strict: bool,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn build<L: Label>(&self, nodes: &[FlatNode<L>]) -> DomainResult<Option<TreeNode<L>>> {
        if self.strict {
            validate(nodes)?;
        }
        Ok(build_tree(nodes))
    }
}

/// Builds the tree in one pass over `nodes`.
///
/// - empty input gives `None`
/// - an entry without parent becomes the root; the last one wins
/// - an entry whose parent label is unknown is dropped
/// - non-empty input without any root gives `None`
#[instrument(level = "debug", skip(nodes), fields(n = nodes.len()))]
pub fn build_tree<L: Label>(nodes: &[FlatNode<L>]) -> Option<TreeNode<L>> {
    if nodes.is_empty() {
        return None;
    }

    let mut registry = NodeRegistry::build(nodes);

    for node in nodes {
        let Some(current) = registry.get(&node.label) else {
            continue;
        };

        match &node.parent {
            None => {
                if registry.arena().root().is_some() {
                    debug!("root replaced by {}", node.label);
                }
                registry.arena_mut().set_root(current);
            }
            Some(parent_label) => match registry.get(parent_label) {
                Some(parent) => {
                    trace!("attach {} -> {}", node.label, parent_label);
                    registry.arena_mut().attach(parent, current);
                }
                None => debug!("orphan {} dropped, parent {} unknown", node.label, parent_label),
            },
        }
    }

    let tree = registry.into_arena().materialize();
    if tree.is_none() {
        debug!("no root among {} entries", nodes.len());
    }
    tree
}

/// Validates `nodes` and builds the tree, failing on any malformation.
pub fn build_tree_strict<L: Label>(nodes: &[FlatNode<L>]) -> DomainResult<Option<TreeNode<L>>> {
    TreeBuilder::new().strict(true).build(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{DomainError, Malformation};

    #[test]
    fn given_empty_input_when_building_then_none() {
        assert!(build_tree::<i32>(&[]).is_none());
    }

    #[test]
    fn given_no_root_when_building_then_none() {
        let nodes = vec![FlatNode::child(1, 2), FlatNode::child(2, 1)];
        assert!(build_tree(&nodes).is_none());
    }

    #[test]
    fn given_children_when_building_then_keeps_input_order() {
        let nodes = vec![
            FlatNode::root(1),
            FlatNode::child(2, 1),
            FlatNode::child(3, 2),
            FlatNode::child(4, 2),
            FlatNode::child(5, 1),
        ];

        let tree = build_tree(&nodes).unwrap();

        assert_eq!(
            tree,
            TreeNode::with_children(
                1,
                vec![
                    TreeNode::with_children(2, vec![TreeNode::new(3), TreeNode::new(4)]),
                    TreeNode::new(5),
                ]
            )
        );
    }

    #[test]
    fn given_child_before_parent_when_building_then_still_attached() {
        let nodes = vec![FlatNode::child(3, 2), FlatNode::child(2, 1), FlatNode::root(1)];

        let tree = build_tree(&nodes).unwrap();

        assert_eq!(tree.children[0].children[0].label, 3);
    }

    #[test]
    fn given_two_roots_when_building_then_last_root_wins() {
        let nodes = vec![FlatNode::root(1), FlatNode::child(3, 1), FlatNode::root(2)];

        let tree = build_tree(&nodes).unwrap();

        assert_eq!(tree, TreeNode::new(2));
    }

    #[test]
    fn given_dangling_parent_when_building_then_node_dropped() {
        let nodes = vec![FlatNode::root(1), FlatNode::child(2, 99)];
        assert_eq!(build_tree(&nodes).unwrap(), TreeNode::new(1));
    }

    #[test]
    fn given_duplicate_root_label_when_building_then_single_node() {
        let nodes = vec![FlatNode::root(1), FlatNode::root(1)];
        assert_eq!(build_tree(&nodes).unwrap(), TreeNode::new(1));
    }

    #[test]
    fn given_self_parent_duplicate_when_building_then_terminates() {
        let nodes = vec![FlatNode::root(1), FlatNode::child(1, 1)];
        assert_eq!(build_tree(&nodes).unwrap(), TreeNode::new(1));
    }

    #[test]
    fn given_strict_builder_when_input_malformed_then_errors() {
        let nodes = vec![FlatNode::root(1), FlatNode::child(2, 99)];

        let err = build_tree_strict(&nodes).unwrap_err();

        let DomainError::MalformedInput(found) = err;
        assert_eq!(
            found,
            vec![Malformation::OrphanedReference {
                label: "2".into(),
                parent: "99".into()
            }]
        );
    }

    #[test]
    fn given_strict_builder_when_input_well_formed_then_builds() {
        let nodes = vec![FlatNode::root("a"), FlatNode::child("b", "a")];
        let tree = TreeBuilder::new().strict(true).build(&nodes).unwrap();
        assert_eq!(tree.unwrap().len(), 2);
    }
}
