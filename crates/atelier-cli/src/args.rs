use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ProjectCommands, StageCommands};

/// Main command-line interface for the Atelier stage tracking tool
///
/// Atelier tracks design and construction projects through a fixed
/// eight-stage lifecycle. It distributes a project's estimated duration
/// across the stages by weight, lays them out on the calendar, and flags
/// overdue stages with a traffic-light lamp.
#[derive(Parser)]
#[command(version, about, name = "at")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/atelier/atelier.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Atelier CLI
///
/// The CLI is organized into two main command categories:
/// - `project`: Operations for managing projects (create, list, update, etc.)
/// - `stage`: Operations on a project's stages (plan, complete, rename)
///
/// Running without a command lists all projects.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Work with a project's stages
    #[command(alias = "s")]
    Stage {
        #[command(subcommand)]
        command: StageCommands,
    },
}
