//! Workspace file tree capability.
//!
//! All core logic (registry, resolver, matcher, applier) runs against this
//! trait rather than `std::fs`, so the merge pipeline is testable without a
//! filesystem. The CLI hands the commands an [`FsTree`] rooted at the
//! workspace directory; tests use [`MemTree`].

use crate::error::{TypeError, TypeResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Read/write access to workspace documents, keyed by `/`-separated
/// paths relative to the workspace root.
pub trait Tree {
    /// Read a file's content, or `None` if it does not exist.
    fn read(&self, path: &str) -> Option<String>;

    /// Write a file, creating parent directories as needed.
    fn write(&mut self, path: &str, content: &str) -> TypeResult<()>;

    /// Whether a file exists at the path.
    fn exists(&self, path: &str) -> bool;

    /// Names of the immediate children of a directory, in listing order.
    /// An absent directory yields an empty list.
    fn children(&self, dir: &str) -> Vec<String>;
}

/// Read and deserialize a JSON document.
///
/// Returns `Ok(None)` when the file is absent; a present-but-malformed
/// document is a [`TypeError::Parse`].
pub fn read_json<T: DeserializeOwned>(tree: &dyn Tree, path: &str) -> TypeResult<Option<T>> {
    let Some(content) = tree.read(path) else {
        return Ok(None);
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| TypeError::Parse {
            path: path.to_string(),
            source,
        })
}

/// Serialize and write a JSON document, pretty-printed with a trailing
/// newline. This is the single persisting step of every operation.
pub fn write_json<T: Serialize>(tree: &mut dyn Tree, path: &str, value: &T) -> TypeResult<()> {
    let mut content = serde_json::to_string_pretty(value).map_err(|source| TypeError::Parse {
        path: path.to_string(),
        source,
    })?;
    content.push('\n');
    tree.write(path, &content)
}

/// Tree backed by the real filesystem, rooted at a workspace directory.
#[derive(Debug, Clone)]
pub struct FsTree {
    root: PathBuf,
}

impl FsTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Tree for FsTree {
    fn read(&self, path: &str) -> Option<String> {
        std::fs::read_to_string(self.resolve(path)).ok()
    }

    fn write(&mut self, path: &str, content: &str) -> TypeResult<()> {
        let full = self.resolve(path);
        let io_err = |source| TypeError::Write {
            path: path.to_string(),
            source,
        };
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&full, content).map_err(io_err)
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn children(&self, dir: &str) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.resolve(dir)) else {
            return Vec::new();
        };
        entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect()
    }
}

/// In-memory tree for tests: a map of path -> content.
///
/// `children` is derived from stored paths, so directories exist exactly
/// when a file lives under them. Listing order is sorted (BTreeMap), which
/// keeps registry-order assertions deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemTree {
    files: BTreeMap<String, String>,
}

impl MemTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, builder-style.
    pub fn with_file(mut self, path: &str, content: impl Into<String>) -> Self {
        self.files.insert(path.to_string(), content.into());
        self
    }

    /// Insert a pretty-printed JSON document, builder-style.
    pub fn with_json(self, path: &str, value: &serde_json::Value) -> Self {
        let mut content = serde_json::to_string_pretty(value).unwrap_or_default();
        content.push('\n');
        self.with_file(path, content)
    }
}

impl Tree for MemTree {
    fn read(&self, path: &str) -> Option<String> {
        self.files.get(path).cloned()
    }

    fn write(&mut self, path: &str, content: &str) -> TypeResult<()> {
        self.files.insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn children(&self, dir: &str) -> Vec<String> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        let mut names: Vec<String> = Vec::new();
        for path in self.files.keys() {
            if let Some(rest) = path.strip_prefix(&prefix) {
                let name = rest.split('/').next().unwrap_or(rest);
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        names
    }
}
