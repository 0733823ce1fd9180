//! Register command: insert the tool's generator entry into the
//! workspace index so the host build tool can find it.

use crate::error::TypeResult;
use crate::tree::{Tree, read_json, write_json};
use crate::workspace::WORKSPACE_DOCUMENT;
use clap::Args;
use serde_json::{Value, json};
use tracing::info;

/// Arguments for the register command.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Report the intended change without writing
    #[arg(long)]
    pub dry_run: bool,
}

/// The fixed registration entry inserted under `generators.project-types`.
fn generators_entry() -> Value {
    json!({
        "apply": {
            "factory": "workspace/build-tools/project-types/generators/apply",
            "schema": "workspace/build-tools/project-types/generators/apply/schema.json"
        },
        "sync": {
            "factory": "workspace/build-tools/project-types/generators/sync",
            "schema": "workspace/build-tools/project-types/generators/sync/schema.json"
        }
    })
}

/// Register the project-types generators in `workspace.json`.
pub fn run_register(tree: &mut dyn Tree, args: &RegisterArgs) -> TypeResult<()> {
    info!(
        "{} project-types with the workspace",
        if args.dry_run { "[dry run] would register" } else { "registering" }
    );

    if args.dry_run {
        println!(
            "Would update {} to include the project-types generators.",
            WORKSPACE_DOCUMENT
        );
        return Ok(());
    }

    // A missing index starts from an empty document; a malformed one is a
    // parse error via read_json.
    let mut doc: serde_json::Map<String, Value> =
        read_json(tree, WORKSPACE_DOCUMENT)?.unwrap_or_default();

    let generators = doc.entry("generators").or_insert_with(|| json!({}));
    if let Some(generators) = generators.as_object_mut() {
        generators.insert("project-types".to_string(), generators_entry());
    }

    write_json(tree, WORKSPACE_DOCUMENT, &doc)?;
    println!("Registered project-types generators in {}.", WORKSPACE_DOCUMENT);
    Ok(())
}
