//! Structured error types for type-resolution and apply operations.

use thiserror::Error;

/// Errors raised by the registry, resolver, and applier.
///
/// Discovery-time parse failures are not represented here: the registry
/// skips malformed documents with a warning and keeps going. Everything
/// that reaches a caller through this type is fatal for the operation
/// that raised it.
#[derive(Debug, Error)]
pub enum TypeError {
    /// The named project is not listed in the workspace index, or its
    /// configuration document is missing.
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    /// The named project type has no definition document in the registry.
    #[error("project type not found: {0}")]
    TypeNotFound(String),

    /// The `extends` chain revisited a type before reaching a root.
    /// Carries the chain as walked, e.g. `a -> b -> a`.
    #[error("cycle detected in extends chain: {0}")]
    CycleDetected(String),

    /// A document failed to parse during a direct load.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The single persisting write failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for type operations.
pub type TypeResult<T> = std::result::Result<T, TypeError>;
