//! Set intersection of two collections.

use std::collections::HashSet;
use std::hash::Hash;

use itertools::Itertools;

/// Elements present in both `a` and `b`, each reported once.
///
/// Runs in O(n + m). Result order follows first appearance in `b`, callers
/// should not rely on it.
pub fn intersect<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let set_a: HashSet<&T> = a.iter().collect();
    b.iter()
        .filter(|item| set_a.contains(item))
        .unique()
        .cloned()
        .collect()
}
