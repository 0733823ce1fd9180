//! Workspace index and project document access.
//!
//! The workspace root carries a `workspace.json` with a `projects` map of
//! project name to project root; each project's own document lives at
//! `<root>/project.json`. Documents are read at the start of an operation
//! and written back whole at the end.

use crate::config::ProjectConfiguration;
use crate::error::{TypeError, TypeResult};
use crate::tree::{Tree, read_json, write_json};
use serde_json::Value;
use std::collections::BTreeMap;

/// The workspace-wide index document.
pub const WORKSPACE_DOCUMENT: &str = "workspace.json";

/// Per-project configuration document name.
pub const PROJECT_DOCUMENT: &str = "project.json";

/// Path to a project's configuration document.
pub fn project_document_path(project_root: &str) -> String {
    format!("{}/{}", project_root.trim_end_matches('/'), PROJECT_DOCUMENT)
}

/// Read the project index from `workspace.json`.
///
/// A missing index or missing `projects` key is an empty workspace, not
/// an error; a malformed document is fatal.
pub fn get_projects(tree: &dyn Tree) -> TypeResult<BTreeMap<String, String>> {
    let Some(doc) = read_json::<Value>(tree, WORKSPACE_DOCUMENT)? else {
        return Ok(BTreeMap::new());
    };
    let mut projects = BTreeMap::new();
    if let Some(map) = doc.get("projects").and_then(Value::as_object) {
        for (name, root) in map {
            if let Some(root) = root.as_str() {
                projects.insert(name.clone(), root.to_string());
            }
        }
    }
    Ok(projects)
}

/// Look up a project's root directory in the index.
pub fn project_root(tree: &dyn Tree, name: &str) -> TypeResult<String> {
    get_projects(tree)?
        .remove(name)
        .ok_or_else(|| TypeError::ProjectNotFound(name.to_string()))
}

/// Load a project's configuration document.
///
/// Fails with [`TypeError::ProjectNotFound`] when the project is not
/// indexed or its document is absent; a malformed document is a fatal
/// [`TypeError::Parse`].
pub fn read_project(tree: &dyn Tree, name: &str) -> TypeResult<ProjectConfiguration> {
    let root = project_root(tree, name)?;
    read_json(tree, &project_document_path(&root))?
        .ok_or_else(|| TypeError::ProjectNotFound(name.to_string()))
}

/// Write a project's configuration document back, whole, in one step.
pub fn write_project(
    tree: &mut dyn Tree,
    name: &str,
    config: &ProjectConfiguration,
) -> TypeResult<()> {
    let root = project_root(tree, name)?;
    write_json(tree, &project_document_path(&root), config)
}
