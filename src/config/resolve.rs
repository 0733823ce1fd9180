//! Extends-chain resolution.
//!
//! A type may extend exactly one parent. Resolution walks the chain to a
//! root, then merges configuration fragments ancestor-first so that more
//! specific types override their ancestors.

use super::merge::{merge_type_config, union_tags};
use super::registry::TypeRegistry;
use super::types::TypeConfig;
use crate::error::{TypeError, TypeResult};
use tracing::debug;

/// Resolve a type name to its fully merged configuration fragment.
///
/// The chain is walked from `type_name` up through `extends` references
/// and capped at `registry.len() + 1` steps, so a malformed graph can
/// never loop unbounded. A name recurring in the chain is a
/// [`TypeError::CycleDetected`]; a missing start or ancestor is a
/// [`TypeError::TypeNotFound`].
///
/// Merge order is root ancestor first, `type_name` last: later fragments
/// override scalars, targets merge key-by-key (whole-target replacement),
/// and tag lists union in first-seen order. The matching tags of every
/// chain member are also unioned into the fragment's `tags`, so applying
/// a resolved type carries the full lineage's tags.
pub fn resolve(registry: &TypeRegistry, type_name: &str) -> TypeResult<TypeConfig> {
    let chain = ancestor_chain(registry, type_name)?;
    debug!("resolved extends chain for '{}': {}", type_name, chain.join(" -> "));

    let mut merged = TypeConfig::default();
    // ancestor_chain returns parent-first order already.
    for name in &chain {
        // Chain members were looked up during the walk; absence here is
        // unreachable.
        let Some(project_type) = registry.get(name) else {
            return Err(TypeError::TypeNotFound(name.clone()));
        };
        merged = merge_type_config(merged, project_type.config.clone());
        union_tags(&mut merged.tags, &project_type.tags);
    }
    Ok(merged)
}

/// Build the ancestor chain for a type, in parent-first order
/// (root ancestor at index 0, `type_name` last).
pub fn ancestor_chain(registry: &TypeRegistry, type_name: &str) -> TypeResult<Vec<String>> {
    let limit = registry.len() + 1;
    let mut chain: Vec<String> = Vec::new();
    let mut current = type_name.to_string();

    for _ in 0..limit {
        if chain.iter().any(|name| *name == current) {
            chain.push(current);
            return Err(TypeError::CycleDetected(chain.join(" -> ")));
        }
        let Some(project_type) = registry.get(&current) else {
            return Err(TypeError::TypeNotFound(current));
        };
        chain.push(current.clone());
        match &project_type.extends {
            Some(parent) => current = parent.clone(),
            None => {
                chain.reverse();
                return Ok(chain);
            }
        }
    }

    // The walk exceeded the bound without reaching a root, which with
    // distinct names inside the registry can only mean a cycle.
    chain.push(current);
    Err(TypeError::CycleDetected(chain.join(" -> ")))
}
