//! Configuration types for project types and project documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Reserved type name that triggers the extra build-configuration hook
/// in the applier.
pub const AI_SAFE_TYPE: &str = "ai-safe";

/// A named unit of work (build, test, lint, serve) bound to an executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Executor identifier, e.g. `@workspace/esbuild:build`.
    pub executor: String,

    /// Executor options.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,

    /// Named configuration variants (e.g. `production`, `ai-safe`).
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub configurations: Map<String, Value>,

    /// Any other target fields, round-tripped unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TargetConfig {
    /// Minimal target with just an executor, mostly for tests.
    pub fn new(executor: impl Into<String>) -> Self {
        Self {
            executor: executor.into(),
            options: Map::new(),
            configurations: Map::new(),
            extra: Map::new(),
        }
    }
}

/// The configuration fragment a project type contributes to projects.
///
/// `targets` and `tags` get dedicated merge semantics during resolution;
/// everything else lands in `extra` and deep-merges generically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeConfig {
    /// Targets this type provides.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub targets: BTreeMap<String, TargetConfig>,

    /// Tags to union into any project this type is applied to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A project type definition, read from `project-type.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectType {
    /// Unique type name.
    pub name: String,

    /// Free text, informational only.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Definition version, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Parent type name. Single-parent inheritance; the chain must
    /// terminate (cycles are detected at resolve time, not load time).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Tags used to match projects that do not name this type directly.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// The configuration fragment applied to matching projects.
    #[serde(default)]
    pub config: TypeConfig,
}

/// A project's configuration document (`project.json`).
///
/// Unknown fields are preserved through `extra` so a rewrite never drops
/// host-specific configuration this tool does not understand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfiguration {
    pub name: String,

    /// Ordered tag set: insertion order preserved, duplicates suppressed
    /// by the mutation helpers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub targets: BTreeMap<String, TargetConfig>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectConfiguration {
    /// Append a tag unless it is already present.
    ///
    /// Returns `true` if the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }
}
