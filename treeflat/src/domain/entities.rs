//! Domain entities: flat parent-pointer records and labels

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Identifier of a node in both the flat and the nested representation.
///
/// Blanket-implemented for every type with the required bounds, so integers,
/// strings and [`LabelValue`] all work as labels.
pub trait Label: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> Label for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// One entry of the parent-pointer encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlatNode<L> {
    /// Label of this node
    pub label: L,
    /// Label of the parent, None for the root
    pub parent: Option<L>,
}

impl<L> FlatNode<L> {
    pub fn new(label: L, parent: Option<L>) -> Self {
        Self { label, parent }
    }

    /// Entry without a parent.
    pub fn root(label: L) -> Self {
        Self {
            label,
            parent: None,
        }
    }

    pub fn child(label: L, parent: L) -> Self {
        Self {
            label,
            parent: Some(parent),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<L: fmt::Display> fmt::Display for FlatNode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parent {
            Some(parent) => write!(f, "{} <- {}", self.label, parent),
            None => write!(f, "{} (root)", self.label),
        }
    }
}

/// Label as it appears in JSON input: either an integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::Int(i) => write!(f, "{}", i),
            LabelValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for LabelValue {
    fn from(value: i64) -> Self {
        LabelValue::Int(value)
    }
}

impl From<&str> for LabelValue {
    fn from(value: &str) -> Self {
        LabelValue::Text(value.to_string())
    }
}

impl From<String> for LabelValue {
    fn from(value: String) -> Self {
        LabelValue::Text(value)
    }
}
