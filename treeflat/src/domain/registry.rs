//! Label lookup table used while assembling a tree.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::TreeArena;
use crate::domain::entities::{FlatNode, Label};

/// Maps each label to its childless node slot in a [`TreeArena`].
///
/// Built in one pass. When a label repeats, the later entry replaces the
/// earlier mapping; the replaced slot stays in the arena but is unreachable.
#[derive(Debug)]
pub struct NodeRegistry<L> {
    arena: TreeArena<L>,
    by_label: HashMap<L, Index>,
}

impl<L: Label> NodeRegistry<L> {
    #[instrument(level = "debug", skip(nodes), fields(n = nodes.len()))]
    pub fn build(nodes: &[FlatNode<L>]) -> Self {
        let mut arena = TreeArena::with_capacity(nodes.len());
        let mut by_label = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let idx = arena.insert_node(node.label.clone());
            if by_label.insert(node.label.clone(), idx).is_some() {
                debug!("duplicate label {}, later entry wins", node.label);
            }
        }

        Self { arena, by_label }
    }

    pub fn get(&self, label: &L) -> Option<Index> {
        self.by_label.get(label).copied()
    }

    pub fn contains(&self, label: &L) -> bool {
        self.by_label.contains_key(label)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    pub fn arena(&self) -> &TreeArena<L> {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut TreeArena<L> {
        &mut self.arena
    }

    pub fn into_arena(self) -> TreeArena<L> {
        self.arena
    }
}
