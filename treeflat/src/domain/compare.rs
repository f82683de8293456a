//! Order-independent comparison of flat node lists.

use std::collections::HashSet;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::entities::{FlatNode, Label};

/// How duplicate entries are treated when comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Distinct `(label, parent)` pairs only; duplicates collapse
    #[default]
    Set,
    /// Pairs with their number of occurrences
    Multiset,
}

fn canonical<L>(node: &FlatNode<L>) -> (&L, Option<&L>) {
    (&node.label, node.parent.as_ref())
}

/// True iff both lists hold the same set of distinct `(label, parent)` pairs.
///
/// Order is ignored and so is the number of times a pair repeats.
#[instrument(level = "debug", skip_all, fields(a = a.len(), b = b.len()))]
pub fn structurally_equal<L: Label>(a: &[FlatNode<L>], b: &[FlatNode<L>]) -> bool {
    let left: HashSet<_> = a.iter().map(canonical).collect();
    let right: HashSet<_> = b.iter().map(canonical).collect();
    left == right
}

/// Like [`structurally_equal`], but a pair must occur equally often on both sides.
#[instrument(level = "debug", skip_all, fields(a = a.len(), b = b.len()))]
pub fn multiset_equal<L: Label>(a: &[FlatNode<L>], b: &[FlatNode<L>]) -> bool {
    a.len() == b.len() && a.iter().map(canonical).counts() == b.iter().map(canonical).counts()
}

pub fn compare<L: Label>(mode: Comparison, a: &[FlatNode<L>], b: &[FlatNode<L>]) -> bool {
    match mode {
        Comparison::Set => structurally_equal(a, b),
        Comparison::Multiset => multiset_equal(a, b),
    }
}
