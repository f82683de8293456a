//! Nested tree representation.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::domain::entities::Label;

/// Tree node owning its children exclusively.
///
/// Children keep insertion order; nothing here sorts them.
///
/// Dropping and comparing walk the tree with a heap stack, so parent chains of
/// any length are safe. The derived `Debug`, `Clone`, and `Serialize` still
/// recurse once per level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode<L> {
    pub label: L,
    #[serde(default = "Vec::new")]
    pub children: Vec<TreeNode<L>>,
}

impl<L> Drop for TreeNode<L> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Two trees are equal when their level-order sequences of
/// `(label, child count)` are equal.
impl<L: PartialEq> PartialEq for TreeNode<L> {
    fn eq(&self, other: &Self) -> bool {
        self.iter_bfs()
            .map(|(node, _)| (&node.label, node.children.len()))
            .eq(other
                .iter_bfs()
                .map(|(node, _)| (&node.label, node.children.len())))
    }
}

impl<L: Eq> Eq for TreeNode<L> {}

impl<L> TreeNode<L> {
    pub fn new(label: L) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }

    pub fn with_children(label: L, children: Vec<TreeNode<L>>) -> Self {
        Self { label, children }
    }

    pub fn push_child(&mut self, child: TreeNode<L>) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self.
    pub fn len(&self) -> usize {
        self.iter_bfs().count()
    }

    /// A tree always holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Breadth-first iterator yielding each node with its parent's label.
    pub fn iter_bfs(&self) -> BfsIter<'_, L> {
        BfsIter::new(self)
    }

    /// Number of levels, a single node has depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((self, 1));

        while let Some((node, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            for child in &node.children {
                queue.push_back((child, depth + 1));
            }
        }

        max_depth
    }

    /// Labels of all leaves, left to right.
    pub fn leaf_labels(&self) -> Vec<&L> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.children.is_empty() {
                leaves.push(&node.label);
            } else {
                // reverse so the leftmost child is popped first
                for child in node.children.iter().rev() {
                    stack.push(child);
                }
            }
        }

        leaves
    }
}

/// Level-order traversal over a borrowed tree.
pub struct BfsIter<'a, L> {
    queue: VecDeque<(&'a TreeNode<L>, Option<&'a L>)>,
}

impl<'a, L> BfsIter<'a, L> {
    fn new(root: &'a TreeNode<L>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((root, None));
        Self { queue }
    }
}

impl<'a, L> Iterator for BfsIter<'a, L> {
    type Item = (&'a TreeNode<L>, Option<&'a L>);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, parent) = self.queue.pop_front()?;
        for child in &node.children {
            self.queue.push_back((child, Some(&node.label)));
        }
        Some((node, parent))
    }
}

/// Conversion into a printable `termtree::Tree`.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<L: Label> TreeNodeConvert for TreeNode<L> {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        struct Frame<'a, L> {
            node: &'a TreeNode<L>,
            next_child: usize,
            leaves: Vec<Tree<String>>,
        }

        let mut stack = vec![Frame {
            node: self,
            next_child: 0,
            leaves: Vec::with_capacity(self.children.len()),
        }];

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            if let Some(child) = node.children.get(frame.next_child) {
                frame.next_child += 1;
                stack.push(Frame {
                    node: child,
                    next_child: 0,
                    leaves: Vec::with_capacity(child.children.len()),
                });
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let built = Tree::new(node.label.to_string()).with_leaves(done.leaves);
            match stack.last_mut() {
                Some(parent) => parent.leaves.push(built),
                None => return built,
            }
        }

        Tree::new(self.label.to_string())
    }
}

impl<L: Label> fmt::Display for TreeNode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}
