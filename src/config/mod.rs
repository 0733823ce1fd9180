//! Project-type configuration core.
//!
//! Pure logic over the workspace [`Tree`](crate::tree::Tree) capability:
//! - `registry`: discover `project-type.json` documents under `workspace/config/`
//! - `resolve`: walk the single-parent `extends` chain and merge ancestor-first
//! - `matcher`: match a project to a type via its tags
//! - `apply`: merge a resolved fragment into a project without clobbering
//!   project-specific targets
//!
//! All real I/O stays in the CLI command wrappers.

mod apply;
mod matcher;
mod merge;
mod registry;
mod resolve;
mod types;

pub use apply::apply_type;
pub use matcher::match_project_type;
pub use merge::{deep_merge, merge_type_config, union_tags};
pub use registry::{CONFIG_ROOT, TYPE_DOCUMENT, TypeRegistry, load_type, type_document_path};
pub use resolve::{ancestor_chain, resolve};
pub use types::{AI_SAFE_TYPE, ProjectConfiguration, ProjectType, TargetConfig, TypeConfig};
