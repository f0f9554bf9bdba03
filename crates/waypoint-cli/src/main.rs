//! Waypoint CLI Application
//!
//! Command-line interface for tracking progress through a learning roadmap.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::TrackerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        file,
        export_dir,
        no_color,
        command,
    } = Args::parse();

    let load_context = match command {
        Some(Commands::Validate) => "Roadmap is invalid",
        _ => "Failed to load roadmap",
    };

    let tracker = TrackerBuilder::new()
        .with_document_path(file.as_ref())
        .build()
        .await
        .context(load_context)?;

    info!(
        "Waypoint started with roadmap '{}'",
        tracker.roadmap().title
    );

    Cli::new(tracker, TerminalRenderer::new(!no_color), export_dir).run(command)
}
