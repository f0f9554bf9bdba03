//! Command handlers for the Waypoint CLI
//!
//! Each handler works on the already loaded [`Tracker`] and renders its
//! outcome as markdown through the [`TerminalRenderer`].

use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use log::debug;
use waypoint_core::{
    display::ItemCard, params::UpdateItem, DirectorySink, ExportResult, PathSink, Tracker,
    UpdateResult, ValidationResult,
};

use crate::{
    args::{Commands, ExportArgs, OutputArgs, ShowItemArgs, UpdateItemArgs},
    renderer::TerminalRenderer,
};

/// Handler for the commands that operate on a loaded roadmap
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
    export_dir: PathBuf,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer, export_dir: PathBuf) -> Self {
        Self {
            tracker,
            renderer,
            export_dir,
        }
    }

    /// Dispatch a parsed command. No command shows the board.
    pub fn run(mut self, command: Option<Commands>) -> Result<()> {
        match command {
            None | Some(Commands::Board) => self.show_board(),
            Some(Commands::Progress) => self.show_progress(),
            Some(Commands::Show(args)) => self.show_item(&args),
            Some(Commands::Update(args)) => self.update_item(&args),
            Some(Commands::Export(args)) => self.export(&args),
            Some(Commands::Validate) => self.report_valid(),
        }
    }

    fn show_board(&self) -> Result<()> {
        self.renderer.render(&self.tracker.roadmap().to_string())
    }

    fn show_progress(&self) -> Result<()> {
        let roadmap = self.tracker.roadmap();
        let mut output = format!("# {}\n\n{}", roadmap.title, self.tracker.progress());
        let groups = self.tracker.groups();
        if !groups.in_progress.is_empty() {
            output.push_str("\n## Currently studying\n\n");
            for item in &groups.in_progress {
                output.push_str(&ItemCard(item).to_string());
            }
        }
        self.renderer.render(&output)
    }

    fn show_item(&self, args: &ShowItemArgs) -> Result<()> {
        let item = self.tracker.item(&args.id)?;
        self.renderer.render(&item.to_string())
    }

    fn update_item(&mut self, args: &UpdateItemArgs) -> Result<()> {
        let params = UpdateItem::from(args);
        let patch = params.validate()?;
        let item = self.tracker.update_item(&params.id, &patch)?.clone();

        self.renderer
            .render(&UpdateResult::with_changes(item, patch.describe_changes()).to_string())?;
        self.write_export(&args.output)
    }

    fn export(&self, args: &ExportArgs) -> Result<()> {
        if args.stdout {
            let bytes = self.tracker.export()?;
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&bytes)
                .and_then(|()| stdout.write_all(b"\n"))
                .context("Failed to write export to stdout")?;
            return Ok(());
        }
        self.write_export(&args.output)
    }

    fn write_export(&self, output: &OutputArgs) -> Result<()> {
        let path = match &output.output {
            Some(target) => self.tracker.export_to(&PathSink::new(target))?,
            None => {
                debug!("Exporting into directory {}", self.export_dir.display());
                self.tracker.export_to(&DirectorySink::new(&self.export_dir))?
            }
        };
        self.renderer
            .render(&ExportResult::new(path, self.tracker.progress()).to_string())
    }

    fn report_valid(&self) -> Result<()> {
        let result = ValidationResult {
            roadmap: self.tracker.roadmap(),
            origin: self.tracker.origin(),
        };
        self.renderer.render(&result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use waypoint_core::{import, ItemStatus};

    use super::*;
    use crate::args::StatusArg;

    const DOCUMENT: &str = r#"{
        "title": "CLI",
        "items": [{ "id": "a", "name": "Alpha", "description": "first" }]
    }"#;

    fn create_test_cli(export_dir: &Path) -> Cli {
        let tracker = Tracker::new(import(DOCUMENT).unwrap());
        Cli::new(tracker, TerminalRenderer::new(false), export_dir.to_path_buf())
    }

    #[test]
    fn test_update_writes_export_to_explicit_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let target = temp_dir.path().join("out.json");
        let mut cli = create_test_cli(temp_dir.path());

        cli.update_item(&UpdateItemArgs {
            id: "a".to_string(),
            status: Some(StatusArg::Completed),
            notes: None,
            clear_notes: false,
            due: None,
            clear_due: false,
            output: OutputArgs {
                output: Some(target.clone()),
            },
        })
        .unwrap();

        let exported = import(&std::fs::read_to_string(target).unwrap()).unwrap();
        assert_eq!(exported.items[0].status, ItemStatus::Completed);
    }

    #[test]
    fn test_update_unknown_item_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut cli = create_test_cli(temp_dir.path());

        let err = cli
            .update_item(&UpdateItemArgs {
                id: "missing".to_string(),
                status: Some(StatusArg::InProgress),
                notes: None,
                clear_notes: false,
                due: None,
                clear_due: false,
                output: OutputArgs { output: None },
            })
            .unwrap_err();

        assert_eq!(err.to_string(), "Topic with ID 'missing' not found");
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_update_with_invalid_due_date_changes_nothing() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut cli = create_test_cli(temp_dir.path());
        let before = cli.tracker.roadmap().clone();

        let err = cli
            .update_item(&UpdateItemArgs {
                id: "a".to_string(),
                status: Some(StatusArg::Completed),
                notes: None,
                clear_notes: false,
                due: Some("soon".to_string()),
                clear_due: false,
                output: OutputArgs { output: None },
            })
            .unwrap_err();

        assert!(err.to_string().starts_with("Invalid input for field 'due_date'"));
        assert_eq!(cli.tracker.roadmap(), &before);
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
