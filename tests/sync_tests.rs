//! Integration tests for the sync and register commands.

use project_types::cli::register::{RegisterArgs, run_register};
use project_types::cli::sync::{SyncArgs, run_sync};
use project_types::config::type_document_path;
use project_types::tree::{MemTree, Tree, read_json};
use serde_json::{Value, json};

/// Workspace with three projects: a name-tagged one, a tag-overlap one,
/// and one without tags.
fn workspace() -> MemTree {
    MemTree::new()
        .with_json(
            "workspace.json",
            &json!({
                "version": 2,
                "projects": {
                    "api": "apps/api",
                    "site": "apps/site",
                    "scratch": "apps/scratch"
                }
            }),
        )
        .with_json("apps/api/project.json", &json!({ "name": "api", "tags": ["node"] }))
        .with_json("apps/site/project.json", &json!({ "name": "site", "tags": ["type:web"] }))
        .with_json("apps/scratch/project.json", &json!({ "name": "scratch" }))
        .with_json(
            &type_document_path("node"),
            &json!({
                "name": "node",
                "tags": ["type:node"],
                "config": { "targets": { "serve": { "executor": "workspace:serve" } } }
            }),
        )
        .with_json(
            &type_document_path("web"),
            &json!({
                "name": "web",
                "tags": ["type:web"],
                "config": { "targets": { "bundle": { "executor": "workspace:bundle" } } }
            }),
        )
}

fn project(tree: &dyn Tree, path: &str) -> Value {
    read_json(tree, path).unwrap().unwrap()
}

#[test]
fn test_sync_applies_matched_types() {
    let mut tree = workspace();
    run_sync(&mut tree, &SyncArgs { dry_run: false }).unwrap();

    // api matched "node" by exact name.
    let api = project(&tree, "apps/api/project.json");
    assert_eq!(api["targets"]["serve"]["executor"], "workspace:serve");

    // site matched "web" by tag overlap.
    let site = project(&tree, "apps/site/project.json");
    assert_eq!(site["targets"]["bundle"]["executor"], "workspace:bundle");
    assert!(site["tags"].as_array().unwrap().contains(&json!("web")));
}

#[test]
fn test_sync_skips_untagged_projects() {
    let mut tree = workspace();
    let before = tree.read("apps/scratch/project.json");
    run_sync(&mut tree, &SyncArgs { dry_run: false }).unwrap();
    assert_eq!(tree.read("apps/scratch/project.json"), before);
}

#[test]
fn test_sync_dry_run_writes_nothing() {
    let mut tree = workspace();
    let api_before = tree.read("apps/api/project.json");
    let site_before = tree.read("apps/site/project.json");

    run_sync(&mut tree, &SyncArgs { dry_run: true }).unwrap();

    assert_eq!(tree.read("apps/api/project.json"), api_before);
    assert_eq!(tree.read("apps/site/project.json"), site_before);
}

#[test]
fn test_sync_continues_past_a_bad_project() {
    // "api" sorts before "site"; break api's document and make sure site
    // still gets synced.
    let mut tree = workspace().with_file("apps/api/project.json", "{not json");

    run_sync(&mut tree, &SyncArgs { dry_run: false }).unwrap();

    let site = project(&tree, "apps/site/project.json");
    assert_eq!(site["targets"]["bundle"]["executor"], "workspace:bundle");
}

#[test]
fn test_sync_empty_workspace_is_a_no_op() {
    let mut tree = MemTree::new();
    run_sync(&mut tree, &SyncArgs { dry_run: false }).unwrap();
}

#[test]
fn test_register_inserts_generators_entry() {
    let mut tree = workspace();
    run_register(&mut tree, &RegisterArgs { dry_run: false }).unwrap();

    let doc: Value = read_json(&tree, "workspace.json").unwrap().unwrap();
    let entry = &doc["generators"]["project-types"];
    assert!(entry["apply"]["factory"].is_string());
    assert!(entry["sync"]["schema"].is_string());
    // Existing index content survives the rewrite.
    assert_eq!(doc["projects"]["api"], "apps/api");
}

#[test]
fn test_register_is_idempotent() {
    let mut tree = workspace();
    run_register(&mut tree, &RegisterArgs { dry_run: false }).unwrap();
    let once = tree.read("workspace.json");
    run_register(&mut tree, &RegisterArgs { dry_run: false }).unwrap();
    assert_eq!(tree.read("workspace.json"), once);
}

#[test]
fn test_register_dry_run_writes_nothing() {
    let mut tree = workspace();
    let before = tree.read("workspace.json");
    run_register(&mut tree, &RegisterArgs { dry_run: true }).unwrap();
    assert_eq!(tree.read("workspace.json"), before);
}
