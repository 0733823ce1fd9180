//! Apply command: merge one project type into one project.

use crate::config::{AI_SAFE_TYPE, TypeRegistry, apply_type, resolve};
use crate::error::TypeResult;
use crate::tree::Tree;
use crate::workspace::{read_project, write_project};
use clap::Args;
use tracing::info;

/// Arguments for the apply command.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Name of the project to update
    #[arg(short, long)]
    pub project: String,

    /// Project type to apply
    #[arg(short = 't', long = "type", default_value = AI_SAFE_TYPE)]
    pub type_name: String,
}

/// Apply a named type to a named project.
///
/// Loads the project and the registry, resolves the type's extends chain,
/// merges the resolved fragment into the project, and persists the result
/// in a single write. Any failure before the write leaves the workspace
/// untouched.
pub fn run_apply(tree: &mut dyn Tree, args: &ApplyArgs) -> TypeResult<()> {
    let mut project = read_project(tree, &args.project)?;

    let registry = TypeRegistry::discover(tree);
    let resolved = resolve(&registry, &args.type_name)?;

    apply_type(&mut project, &resolved, &args.type_name);
    write_project(tree, &args.project, &project)?;

    info!(
        "successfully applied project type {} to project {}",
        args.type_name, args.project
    );
    println!("Applied type '{}' to project '{}'.", args.type_name, args.project);
    Ok(())
}
