//! Domain-level errors (no external dependencies)

use itertools::Itertools;
use thiserror::Error;

/// One defect found in a flat node list.
///
/// Labels are stored rendered, so the error type stays independent of the
/// label type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    #[error("duplicate label: {label}")]
    DuplicateLabel { label: String },

    #[error("no root: every entry has a parent")]
    MissingRoot,

    #[error("multiple roots: {}", .labels.join(", "))]
    MultipleRoots { labels: Vec<String> },

    #[error("orphaned reference: {label} points to unknown parent {parent}")]
    OrphanedReference { label: String, parent: String },

    #[error("cycle through label: {label}")]
    Cycle { label: String },
}

/// Domain errors represent violations of the tree invariants.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("malformed input: {}", .0.iter().join("; "))]
    MalformedInput(Vec<Malformation>),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
