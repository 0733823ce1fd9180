//! project-types CLI
//!
//! One-shot, synchronous configuration merges over a workspace: apply a
//! project type to a project, sync all projects against discovered types,
//! or register the tool's generators with the workspace.

use anyhow::Result;
use clap::Parser;
use project_types::cli::{Cli, Command, apply, register, sync};
use project_types::tree::FsTree;
use std::fs::OpenOptions;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let mut tree = FsTree::new(&cli.root);

    match &cli.command {
        Command::Apply(args) => apply::run_apply(&mut tree, args)?,
        Command::Sync(args) => sync::run_sync(&mut tree, args)?,
        Command::Register(args) => register::run_register(&mut tree, args)?,
    }

    Ok(())
}
