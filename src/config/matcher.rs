//! Matching projects to types via tags.

use super::types::ProjectType;

/// Find the best-matching type for a project's tags.
///
/// Policy, in priority order:
/// 1. Exact match: a type whose `name` appears in the project's tags.
/// 2. Tag overlap: a type with at least one tag in common.
/// 3. No match: the caller treats this as "skip", not an error.
///
/// Both passes take the first hit in registry order. This is deliberately
/// a first-match policy rather than a best-overlap score; ties fall to
/// discovery order, which is filesystem-dependent, so callers must not
/// rely on specific tie-breaks across runs.
pub fn match_project_type<'a>(
    project_tags: &[String],
    types: &'a [ProjectType],
) -> Option<&'a ProjectType> {
    for project_type in types {
        if project_tags.iter().any(|tag| *tag == project_type.name) {
            return Some(project_type);
        }
    }

    for project_type in types {
        if project_type
            .tags
            .iter()
            .any(|tag| project_tags.contains(tag))
        {
            return Some(project_type);
        }
    }

    None
}
