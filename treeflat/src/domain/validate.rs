//! Strict checks on a flat node list.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::entities::{FlatNode, Label};
use crate::domain::error::{DomainError, DomainResult, Malformation};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Collects every defect in `nodes`, in a stable order.
///
/// Empty input is well-formed: it simply describes no tree.
#[instrument(level = "debug", skip(nodes), fields(n = nodes.len()))]
pub fn find_malformations<L: Label>(nodes: &[FlatNode<L>]) -> Vec<Malformation> {
    let mut found = Vec::new();
    if nodes.is_empty() {
        return found;
    }

    let counts = nodes.iter().map(|n| &n.label).counts();
    for label in nodes.iter().map(|n| &n.label).unique() {
        if counts.get(&label).copied().unwrap_or(0) > 1 {
            found.push(Malformation::DuplicateLabel {
                label: label.to_string(),
            });
        }
    }

    let roots: Vec<String> = nodes
        .iter()
        .filter(|n| n.is_root())
        .map(|n| n.label.to_string())
        .collect();
    match roots.len() {
        0 => found.push(Malformation::MissingRoot),
        1 => {}
        _ => found.push(Malformation::MultipleRoots { labels: roots }),
    }

    let labels: HashSet<&L> = nodes.iter().map(|n| &n.label).collect();
    for node in nodes {
        if let Some(parent) = &node.parent {
            if !labels.contains(parent) {
                found.push(Malformation::OrphanedReference {
                    label: node.label.to_string(),
                    parent: parent.to_string(),
                });
            }
        }
    }

    found.extend(find_cycles(nodes));

    debug!("found {} malformations", found.len());
    found
}

/// Fails with [`DomainError::MalformedInput`] if any defect is present.
pub fn validate<L: Label>(nodes: &[FlatNode<L>]) -> DomainResult<()> {
    let found = find_malformations(nodes);
    if found.is_empty() {
        Ok(())
    } else {
        Err(DomainError::MalformedInput(found))
    }
}

/// Walks parent pointers from every label; reports the label closing each loop.
fn find_cycles<L: Label>(nodes: &[FlatNode<L>]) -> Vec<Malformation> {
    // last write wins, same as the registry
    let parent_of: HashMap<&L, Option<&L>> = nodes
        .iter()
        .map(|n| (&n.label, n.parent.as_ref()))
        .collect();

    let mut marks: HashMap<&L, Mark> = HashMap::new();
    let mut cycles = Vec::new();

    for start in nodes.iter().map(|n| &n.label) {
        let mut path = Vec::new();
        let mut current = Some(start);

        while let Some(label) = current {
            match marks.get(label) {
                Some(Mark::Done) => break,
                Some(Mark::InProgress) => {
                    cycles.push(Malformation::Cycle {
                        label: label.to_string(),
                    });
                    break;
                }
                None => {}
            }
            marks.insert(label, Mark::InProgress);
            path.push(label);
            current = parent_of.get(label).copied().flatten();
        }

        for label in path {
            marks.insert(label, Mark::Done);
        }
    }

    cycles
}
