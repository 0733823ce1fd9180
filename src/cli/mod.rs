//! CLI command definitions for project-types
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod apply;
pub mod register;
pub mod sync;

use apply::ApplyArgs;
use clap::{Parser, Subcommand};
use register::RegisterArgs;
use sync::SyncArgs;

/// Workspace project-type tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root directory
    #[arg(short, long, default_value = ".", global = true)]
    pub root: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a named project type to a named project
    Apply(ApplyArgs),

    /// Sync all projects against the discovered project types
    Sync(SyncArgs),

    /// Register the project-types generators in workspace.json
    Register(RegisterArgs),
}
