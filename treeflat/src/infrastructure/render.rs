//! Output encoding: JSON documents and ASCII trees.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::{OutputConfig, TreeFormat};
use crate::domain::{Label, TreeNode, TreeNodeConvert};
use crate::infrastructure::{InfraError, InfraResult};

/// Encode `value` as JSON, indented according to `output`.
pub fn to_json<T: Serialize + ?Sized>(value: &T, output: &OutputConfig) -> InfraResult<String> {
    if !output.pretty {
        return serde_json::to_string(value).map_err(|e| InfraError::json("encode compact", e));
    }

    let indent = " ".repeat(output.indent);
    let mut buf = Vec::new();
    let mut ser =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value
        .serialize(&mut ser)
        .map_err(|e| InfraError::json("encode pretty", e))?;
    String::from_utf8(buf).map_err(|e| {
        InfraError::io(
            "encode pretty",
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}

/// Deepest tree that is rendered.
///
/// Each level nests a JSON object and a `children` array, and serde_json stops
/// reading at 127 nested levels, so any tree written here loads again.
pub const MAX_RENDER_DEPTH: usize = 60;

/// Render an optional tree in the configured format.
///
/// Trees deeper than [`MAX_RENDER_DEPTH`] are refused, since both encoders
/// recurse once per level.
pub fn render_tree<L: Label + Serialize>(
    tree: Option<&TreeNode<L>>,
    output: &OutputConfig,
) -> InfraResult<String> {
    if let Some(depth) = tree.map(TreeNode::depth) {
        if depth > MAX_RENDER_DEPTH {
            return Err(InfraError::TooDeep {
                depth,
                limit: MAX_RENDER_DEPTH,
            });
        }
    }

    match output.format {
        TreeFormat::Json => to_json(&tree, output),
        TreeFormat::Tree => Ok(match tree {
            Some(tree) => tree.to_tree_string().to_string().trim_end().to_string(),
            None => "(empty tree)".to_string(),
        }),
    }
}
