//! In-memory filesystem for service and command tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use treeflat::infrastructure::traits::FileSystem;

#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: HashMap<PathBuf, String>,
    stdin: Option<String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_stdin(mut self, content: &str) -> Self {
        self.stdin = Some(content.to_string());
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn read_stdin(&self) -> io::Result<String> {
        self.stdin
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
    }
}

/// The nine node example as JSON.
pub const ORG_CHART: &str = r#"[
    {"label": 1, "parent": null},
    {"label": 2, "parent": 1},
    {"label": 3, "parent": 2},
    {"label": 4, "parent": 2},
    {"label": 5, "parent": 1},
    {"label": 6, "parent": 1},
    {"label": 7, "parent": 6},
    {"label": 8, "parent": 6},
    {"label": 9, "parent": 8}
]"#;
