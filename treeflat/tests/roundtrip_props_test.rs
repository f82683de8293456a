//! Property tests: well-formed lists survive build then flatten

use std::collections::HashMap;

use proptest::prelude::*;

use treeflat::domain::{build_tree, flatten_tree, multiset_equal, structurally_equal, FlatNode};

/// Random well-formed list: node 0 is the root, node `i` hangs below some
/// earlier node, then the entries are shuffled.
fn well_formed() -> impl Strategy<Value = Vec<FlatNode<u32>>> {
    prop::collection::vec(any::<prop::sample::Index>(), 0..40).prop_flat_map(|picks| {
        let mut nodes = vec![FlatNode::root(0u32)];
        for (i, pick) in picks.iter().enumerate() {
            nodes.push(FlatNode::child(i as u32 + 1, pick.index(i + 1) as u32));
        }
        Just(nodes).prop_shuffle()
    })
}

proptest! {
    #[test]
    fn round_trip_is_structurally_equal(nodes in well_formed()) {
        let flat = flatten_tree(build_tree(&nodes).as_ref());

        prop_assert!(structurally_equal(&nodes, &flat));
        prop_assert!(multiset_equal(&nodes, &flat));
    }

    #[test]
    fn round_trip_keeps_every_entry(nodes in well_formed()) {
        let tree = build_tree(&nodes);

        prop_assert!(tree.is_some());
        prop_assert_eq!(tree.as_ref().map(|t| t.len()), Some(nodes.len()));
        prop_assert_eq!(flatten_tree(tree.as_ref()).len(), nodes.len());
    }

    #[test]
    fn flattened_list_starts_at_root_and_never_goes_shallower(nodes in well_formed()) {
        let flat = flatten_tree(build_tree(&nodes).as_ref());

        prop_assert_eq!(&flat[0], &FlatNode::root(0));

        let mut depth_of: HashMap<u32, usize> = HashMap::new();
        let mut last = 0;
        for node in &flat {
            let depth = match node.parent {
                None => 0,
                Some(parent) => match depth_of.get(&parent) {
                    Some(d) => d + 1,
                    None => {
                        return Err(TestCaseError::fail(format!(
                            "{} listed before its parent",
                            node
                        )))
                    }
                },
            };
            prop_assert!(depth >= last);
            last = depth;
            depth_of.insert(node.label, depth);
        }
    }

    #[test]
    fn comparison_ignores_order(nodes in well_formed(), seed in any::<u64>()) {
        let mut rotated = nodes.clone();
        let mid = (seed as usize) % rotated.len();
        rotated.rotate_left(mid);

        prop_assert!(structurally_equal(&nodes, &rotated));
        prop_assert!(structurally_equal(&rotated, &nodes));
    }
}
