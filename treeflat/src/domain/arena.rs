use std::collections::HashSet;

use generational_arena::{Arena, Index};
use tracing::{instrument, trace, warn};

use crate::domain::entities::Label;
use crate::domain::tree::TreeNode;

/// Node slot in the arena, children referenced by index.
#[derive(Debug)]
pub struct ArenaNode<L> {
    pub label: L,
    /// Indices of child nodes in the arena, in attach order
    pub children: Vec<Index>,
}

/// Arena-based scratch tree used while assembling a [`TreeNode`].
///
/// Index links make the single-pass build independent of input order: a child
/// can be attached before its parent has been attached to anything.
#[derive(Debug)]
pub struct TreeArena<L> {
    arena: Arena<ArenaNode<L>>,
    root: Option<Index>,
}

impl<L> Default for TreeArena<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> TreeArena<L> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            arena: Arena::with_capacity(n),
            root: None,
        }
    }

    pub fn insert_node(&mut self, label: L) -> Index {
        self.arena.insert(ArenaNode {
            label,
            children: Vec::new(),
        })
    }

    /// Appends `child` to the children of `parent`; unknown parents are ignored.
    pub fn attach(&mut self, parent: Index, child: Index) {
        if let Some(parent) = self.arena.get_mut(parent) {
            parent.children.push(child);
        }
    }

    pub fn set_root(&mut self, idx: Index) {
        self.root = Some(idx);
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&ArenaNode<L>> {
        self.arena.get(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

impl<L: Label> TreeArena<L> {
    /// Copies the subtree reachable from the root into an owned [`TreeNode`].
    ///
    /// An edge pointing back to a node on the current root path is cut, so a
    /// self-reachable node never makes the result infinite.
    #[instrument(level = "debug", skip(self))]
    pub fn materialize(&self) -> Option<TreeNode<L>> {
        struct Frame<L> {
            idx: Index,
            next_child: usize,
            children: Vec<TreeNode<L>>,
        }

        let root = self.root?;
        let mut on_path = HashSet::new();
        on_path.insert(root);
        let mut stack = vec![Frame {
            idx: root,
            next_child: 0,
            children: Vec::new(),
        }];

        while let Some(frame) = stack.last_mut() {
            let node = self.arena.get(frame.idx)?;

            if let Some(&child) = node.children.get(frame.next_child) {
                frame.next_child += 1;
                if !on_path.insert(child) {
                    if let Some(back) = self.arena.get(child) {
                        warn!(
                            "cycle through label {}, edge from {} cut",
                            back.label, node.label
                        );
                    }
                    continue;
                }
                stack.push(Frame {
                    idx: child,
                    next_child: 0,
                    children: Vec::new(),
                });
                continue;
            }

            let done = stack.pop()?;
            on_path.remove(&done.idx);
            trace!("materialized {} with {} children", node.label, done.children.len());
            let built = TreeNode::with_children(node.label.clone(), done.children);
            match stack.last_mut() {
                Some(parent) => parent.children.push(built),
                None => return Some(built),
            }
        }

        None
    }
}
