//! Conversion service
//!
//! Loads flat lists and trees, converts between them, and checks round trips
//! according to the configured strictness and comparison mode.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::application::error_ext::{IoResultExt, JsonResultExt};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{
    compare, find_malformations, flatten_tree, intersect, FlatNode, Label, Malformation,
    TreeBuilder, TreeNode,
};
use crate::infrastructure::traits::FileSystem;

/// Output of building a tree and flattening it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundTrip<L> {
    /// Tree built from the input, None if no root was found
    pub tree: Option<TreeNode<L>>,
    /// The tree flattened back, in BFS order
    pub flattened: Vec<FlatNode<L>>,
    /// Whether `flattened` matches the input under the configured comparison
    pub equal: bool,
}

/// Service for tree/list conversions.
pub struct ConversionService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl ConversionService {
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn builder(&self) -> TreeBuilder {
        TreeBuilder::new().strict(self.settings.strict)
    }

    /// Read and decode a JSON document from `path` (`-` for stdin).
    #[instrument(level = "debug", skip(self))]
    pub fn load_json<T: DeserializeOwned>(&self, path: &Path) -> ApplicationResult<T> {
        let content = self.fs.read_input(path).with_path_context("read input", path)?;
        debug!("load_json: {} bytes from {}", content.len(), path.display());
        serde_json::from_str(&content).with_input_path(path)
    }

    /// Read a flat `[{"label", "parent"}]` list.
    pub fn load_flat<L: Label + DeserializeOwned>(
        &self,
        path: &Path,
    ) -> ApplicationResult<Vec<FlatNode<L>>> {
        self.load_json(path)
    }

    /// Read a nested tree; JSON `null` means no tree.
    pub fn load_tree<L: Label + DeserializeOwned>(
        &self,
        path: &Path,
    ) -> ApplicationResult<Option<TreeNode<L>>> {
        self.load_json(path)
    }

    /// Build a tree, validating first when strict mode is configured.
    #[instrument(level = "debug", skip_all, fields(n = nodes.len(), strict = self.settings.strict))]
    pub fn build<L: Label>(&self, nodes: &[FlatNode<L>]) -> ApplicationResult<Option<TreeNode<L>>> {
        Ok(self.builder().build(nodes)?)
    }

    pub fn flatten<L: Label>(&self, tree: Option<&TreeNode<L>>) -> Vec<FlatNode<L>> {
        flatten_tree(tree)
    }

    /// Compare two flat lists with the configured comparison mode.
    pub fn compare<L: Label>(&self, a: &[FlatNode<L>], b: &[FlatNode<L>]) -> bool {
        compare(self.settings.comparison, a, b)
    }

    /// Build, flatten, and compare the result against the input.
    #[instrument(level = "debug", skip_all, fields(n = nodes.len()))]
    pub fn round_trip<L: Label>(&self, nodes: &[FlatNode<L>]) -> ApplicationResult<RoundTrip<L>> {
        let tree = self.build(nodes)?;
        let flattened = self.flatten(tree.as_ref());
        let equal = self.compare(nodes, &flattened);
        info!(
            "round trip: {} entries in, {} out, equal={}",
            nodes.len(),
            flattened.len(),
            equal
        );
        Ok(RoundTrip {
            tree,
            flattened,
            equal,
        })
    }

    /// All defects of `nodes`, regardless of the strict setting.
    pub fn check<L: Label>(&self, nodes: &[FlatNode<L>]) -> Vec<Malformation> {
        find_malformations(nodes)
    }

    pub fn intersect<L: Label>(&self, a: &[L], b: &[L]) -> Vec<L> {
        intersect(a, b)
    }
}
