//! Error conversion helpers for reading and decoding input
//!
//! Extension traits attach the input path to I/O and JSON errors.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Converts `io::Result` into `ApplicationResult` with path context.
pub trait IoResultExt<T> {
    /// # Example
    /// ```ignore
    /// fs.read_to_string(path).with_path_context("read input", path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }
}

/// Converts JSON decode failures into [`ApplicationError::InvalidInput`].
pub trait JsonResultExt<T> {
    fn with_input_path(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> JsonResultExt<T> for serde_json::Result<T> {
    fn with_input_path(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::InvalidInput {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
