//! Project type discovery.
//!
//! Type definitions live under a fixed configuration root: each immediate
//! subdirectory of `workspace/config/` that contains a `project-type.json`
//! document is a type. The registry is rebuilt by re-scanning the tree on
//! every invocation; nothing is cached across calls.

use super::types::ProjectType;
use crate::error::TypeResult;
use crate::tree::{Tree, read_json};
use tracing::warn;

/// Root directory scanned for type definitions.
pub const CONFIG_ROOT: &str = "workspace/config";

/// Definition document name inside each type directory.
pub const TYPE_DOCUMENT: &str = "project-type.json";

/// Path to a type's definition document.
pub fn type_document_path(name: &str) -> String {
    format!("{CONFIG_ROOT}/{name}/{TYPE_DOCUMENT}")
}

/// The set of discovered project types for one operation.
///
/// Iteration order is directory-listing order, not guaranteed sorted, and
/// callers must not depend on it except through [`TypeRegistry::get`].
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<ProjectType>,
}

impl TypeRegistry {
    /// Scan the configuration root and load every valid type definition.
    ///
    /// Malformed documents (invalid JSON, schema mismatch) are skipped with
    /// a warning; discovery always returns the remaining types.
    pub fn discover(tree: &dyn Tree) -> Self {
        let mut types = Vec::new();
        for entry in tree.children(CONFIG_ROOT) {
            let document = type_document_path(&entry);
            if !tree.exists(&document) {
                continue;
            }
            match read_json::<ProjectType>(tree, &document) {
                Ok(Some(project_type)) => types.push(project_type),
                Ok(None) => {}
                Err(err) => {
                    warn!("skipping project type '{}': {}", entry, err);
                }
            }
        }
        Self { types }
    }

    /// Look up a discovered type by name.
    pub fn get(&self, name: &str) -> Option<&ProjectType> {
        self.types.iter().find(|t| t.name == name)
    }

    /// All discovered types, in registry order.
    pub fn types(&self) -> &[ProjectType] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Load one type definition directly by name, without scanning.
///
/// Returns `Ok(None)` when the directory or document is absent. Unlike
/// discovery, a parse failure here is fatal: the caller asked for this
/// specific type.
pub fn load_type(tree: &dyn Tree, name: &str) -> TypeResult<Option<ProjectType>> {
    read_json(tree, &type_document_path(name))
}
