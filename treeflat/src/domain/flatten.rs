//! Tree flattener: nested tree back to parent-pointer entries.

use tracing::instrument;

use crate::domain::entities::{FlatNode, Label};
use crate::domain::tree::TreeNode;

/// Emits one entry per node in strict breadth-first order.
///
/// Root first, then its children left to right, then the grandchildren.
/// `None` gives an empty list.
#[instrument(level = "debug", skip(root))]
pub fn flatten_tree<L: Label>(root: Option<&TreeNode<L>>) -> Vec<FlatNode<L>> {
    let Some(root) = root else {
        return Vec::new();
    };

    root.iter_bfs()
        .map(|(node, parent)| FlatNode::new(node.label.clone(), parent.cloned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::build_tree;

    #[test]
    fn given_none_when_flattening_then_empty() {
        assert!(flatten_tree::<i32>(None).is_empty());
    }

    #[test]
    fn given_single_node_when_flattening_then_root_entry() {
        assert_eq!(flatten_tree(Some(&TreeNode::new("x"))), vec![FlatNode::root("x")]);
    }

    #[test]
    fn given_built_tree_when_flattening_then_bfs_order() {
        let nodes = vec![
            FlatNode::root(1),
            FlatNode::child(2, 1),
            FlatNode::child(3, 2),
            FlatNode::child(4, 2),
            FlatNode::child(5, 1),
        ];

        let flat = flatten_tree(build_tree(&nodes).as_ref());

        let labels: Vec<_> = flat.iter().map(|n| n.label).collect();
        assert_eq!(labels, vec![1, 2, 5, 3, 4]);
        assert_eq!(flat[3], FlatNode::child(3, 2));
    }
}
