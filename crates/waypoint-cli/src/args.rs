//! Command-line interface definitions using clap
//!
//! The argument structs here carry all clap-specific attributes and convert
//! into core parameter types with `From` impls, so the core stays free of CLI
//! framework concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use waypoint_core::params::UpdateItem;

/// Terminal tracker for learning roadmaps
///
/// Waypoint loads a JSON roadmap document, shows the topics grouped by
/// learning status with overall progress, lets you update a topic's status,
/// notes and due date, and exports the updated document back to JSON.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Roadmap document to load. Defaults to the bundled sample roadmap
    #[arg(long, short = 'f', global = true)]
    pub file: Option<PathBuf>,

    /// Directory that exports are written to
    #[arg(long, global = true, default_value = ".")]
    pub export_dir: PathBuf,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
///
/// Without a command the status board is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show topics grouped by status with overall progress
    #[command(alias = "b")]
    Board,
    /// Show overall completion progress
    #[command(alias = "p")]
    Progress,
    /// Show details of a single topic
    #[command(alias = "s")]
    Show(ShowItemArgs),
    /// Update a topic's status, notes or due date and export the result
    #[command(alias = "u")]
    Update(UpdateItemArgs),
    /// Export the roadmap as a JSON document
    #[command(alias = "e")]
    Export(ExportArgs),
    /// Check that the roadmap document is valid
    #[command(alias = "v")]
    Validate,
}

/// Show details of a specific topic
#[derive(ClapArgs)]
pub struct ShowItemArgs {
    #[arg(help = "Identifier of the topic to show")]
    pub id: String,
}

/// Update a topic
///
/// Only the given fields change. The updated roadmap is exported right away,
/// since nothing is kept between runs.
#[derive(ClapArgs)]
pub struct UpdateItemArgs {
    #[arg(help = "Identifier of the topic to update")]
    pub id: String,
    #[arg(short, long, help = "New learning status")]
    pub status: Option<StatusArg>,
    #[arg(short, long, help = "Replace the notes (surrounding whitespace is trimmed)")]
    pub notes: Option<String>,
    #[arg(long, conflicts_with = "notes", help = "Remove the notes")]
    pub clear_notes: bool,
    #[arg(short, long, help = "Planned completion date (YYYY-MM-DD)")]
    pub due: Option<String>,
    #[arg(long, conflicts_with = "due", help = "Remove the due date")]
    pub clear_due: bool,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl From<&UpdateItemArgs> for UpdateItem {
    fn from(val: &UpdateItemArgs) -> Self {
        UpdateItem {
            id: val.id.clone(),
            status: val.status.map(|s| s.to_string()),
            notes: val.notes.clone(),
            clear_notes: val.clear_notes,
            due_date: val.due.clone(),
            clear_due_date: val.clear_due,
        }
    }
}

/// Export the current roadmap
#[derive(ClapArgs)]
pub struct ExportArgs {
    #[command(flatten)]
    pub output: OutputArgs,
    /// Print the document to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Where an export goes
#[derive(ClapArgs)]
pub struct OutputArgs {
    /// Write to this file instead of a dated file in the export directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Command-line representation of the learning statuses
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum StatusArg {
    /// Topic not started yet
    NotStarted,
    /// Topic being studied
    InProgress,
    /// Topic learned
    Completed,
}

impl std::fmt::Display for StatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusArg::NotStarted => write!(f, "not_started"),
            StatusArg::InProgress => write!(f, "in_progress"),
            StatusArg::Completed => write!(f, "completed"),
        }
    }
}
