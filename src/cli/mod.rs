// src/cli/mod.rs
// Maintenance tools for the persisted foldout state and settings file

pub mod init_settings;
pub mod list_foldouts;
pub mod reset_foldouts;

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use crate::inspector::error::InspectorResult;
use crate::inspector::saved_bool::default_store_path;

#[derive(Parser)]
#[command(name = "attribute_inspector")]
#[command(about = "Attribute-driven property inspector with foldout maintenance tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List persisted foldout states
    ListFoldouts {
        /// Path to the foldout store (defaults to the platform config directory)
        path: Option<PathBuf>,
    },

    /// Collapse foldouts by removing their persisted state
    ResetFoldouts {
        /// Path to the foldout store (defaults to the platform config directory)
        path: Option<PathBuf>,
        /// Only reset keys of this owner, e.g. `resource:my_game::ShipConfig`
        #[arg(long)]
        owner: Option<String>,
    },

    /// Write the settings file with every field present
    InitSettings {
        /// Path to the settings file (defaults to the platform config directory)
        path: Option<PathBuf>,
    },
}

fn resolve_store_path(path: Option<PathBuf>) -> InspectorResult<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Ok(default_store_path()?),
    }
}

/// Runs a maintenance command. Returns the process exit code.
pub fn run(command: Commands) -> i32 {
    let result = match command {
        Commands::ListFoldouts { path } => resolve_store_path(path)
            .and_then(|path| list_foldouts::run(&path, &mut io::stdout())),
        Commands::ResetFoldouts { path, owner } => resolve_store_path(path)
            .and_then(|path| reset_foldouts::run(&path, owner.as_deref(), &mut io::stdout())),
        Commands::InitSettings { path } => init_settings::run(path.as_deref(), &mut io::stdout()),
    };
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
