//! Applying a resolved type configuration to a project.
//!
//! Pure in-memory mutation; persistence stays with the command wrappers.

use super::types::{AI_SAFE_TYPE, ProjectConfiguration, TypeConfig};
use crate::config::merge::union_tags;
use serde_json::json;
use tracing::{debug, info};

/// Merge a resolved type's configuration into a project configuration.
///
/// - The type name joins the project's tag set (no duplicate).
/// - Each resolved target is added only if the project does not already
///   define a target of that name: an existing project-specific target is
///   never overridden by the type (project customization wins).
/// - Tags declared inside the resolved fragment union into the project's
///   tag set, first-seen order.
/// - The reserved `ai-safe` type additionally installs a build
///   configuration variant, see [`apply_ai_safe_config`].
///
/// Applying the same type twice is a no-op the second time.
pub fn apply_type(project: &mut ProjectConfiguration, resolved: &TypeConfig, type_name: &str) {
    if project.add_tag(type_name) {
        info!("adding '{}' tag to {}", type_name, project.name);
    } else {
        debug!("project {} already has the '{}' tag", project.name, type_name);
    }

    for (name, target) in &resolved.targets {
        if project.targets.contains_key(name) {
            debug!(
                "keeping project-specific target '{}' on {} (type provides one too)",
                name, project.name
            );
            continue;
        }
        project.targets.insert(name.clone(), target.clone());
    }

    union_tags(&mut project.tags, &resolved.tags);

    if type_name == AI_SAFE_TYPE {
        apply_ai_safe_config(project);
    }
}

/// Install the `ai-safe` configuration variant on the project's `build`
/// target, if the project has one. Other variants on the target are left
/// untouched; projects without a `build` target are skipped.
fn apply_ai_safe_config(project: &mut ProjectConfiguration) {
    let Some(build) = project.targets.get_mut("build") else {
        return;
    };
    build.configurations.insert(
        AI_SAFE_TYPE.to_string(),
        json!({ "tsConfig": "tsconfig.lib.json" }),
    );
    info!("added ai-safe build configuration to {}", project.name);
}
