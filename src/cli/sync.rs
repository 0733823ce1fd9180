//! Sync command: match every indexed project to a discovered type and
//! apply it.
//!
//! One project's failure is logged and skipped so the rest of the batch
//! still runs; a single bad project degrades results, not the whole sync.

use crate::config::{apply_type, match_project_type, resolve, TypeRegistry};
use crate::error::{TypeError, TypeResult};
use crate::tree::{Tree, read_json, write_json};
use crate::workspace::{get_projects, project_document_path};
use clap::Args;
use tracing::{info, warn};

/// Arguments for the sync command.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Report matches without writing any project configuration
    #[arg(long)]
    pub dry_run: bool,
}

/// Sync all projects against the discovered project types.
pub fn run_sync(tree: &mut dyn Tree, args: &SyncArgs) -> TypeResult<()> {
    let dry_run = args.dry_run;

    let registry = TypeRegistry::discover(tree);
    info!("discovered {} project types", registry.len());

    let projects = get_projects(tree)?;
    info!("found {} projects", projects.len());

    let mut match_count = 0;
    for (name, root) in &projects {
        match sync_project(tree, &registry, name, root, dry_run) {
            Ok(Some(type_name)) => {
                match_count += 1;
                info!(
                    "{} project {} to type {}",
                    if dry_run { "[dry run] would match" } else { "matched" },
                    name,
                    type_name
                );
            }
            Ok(None) => {}
            Err(err) => {
                // Isolated-failure policy: keep going.
                warn!("skipping project {}: {}", name, err);
            }
        }
    }

    println!(
        "{} {} of {} projects to project types.",
        if dry_run { "Would match" } else { "Matched" },
        match_count,
        projects.len()
    );
    Ok(())
}

/// Match and apply a type for one project.
///
/// Returns the matched type name, or `None` when the project has no tags
/// or no type matches (both are skips, not errors).
fn sync_project(
    tree: &mut dyn Tree,
    registry: &TypeRegistry,
    name: &str,
    root: &str,
    dry_run: bool,
) -> TypeResult<Option<String>> {
    let document = project_document_path(root);
    let Some(mut project) = read_json::<crate::config::ProjectConfiguration>(tree, &document)?
    else {
        return Err(TypeError::ProjectNotFound(name.to_string()));
    };

    if project.tags.is_empty() {
        info!("skipping project {} (no tags)", name);
        return Ok(None);
    }

    let Some(matched) = match_project_type(&project.tags, registry.types()) else {
        return Ok(None);
    };
    let type_name = matched.name.clone();

    if !dry_run {
        let resolved = resolve(registry, &type_name)?;
        apply_type(&mut project, &resolved, &type_name);
        write_json(tree, &document, &project)?;
    }

    Ok(Some(type_name))
}
