//! Atelier CLI Application
//!
//! Command-line interface for the Atelier stage planning and tracking tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use atelier_core::{params::ListProjects, TrackerBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Atelier started");

    match command {
        Some(Project { command }) => {
            Cli::new(tracker, renderer)
                .handle_project_command(command)
                .await
        }
        Some(Stage { command }) => {
            Cli::new(tracker, renderer)
                .handle_stage_command(command)
                .await
        }
        None => {
            Cli::new(tracker, renderer)
                .list_projects(&ListProjects::default())
                .await
        }
    }
}
