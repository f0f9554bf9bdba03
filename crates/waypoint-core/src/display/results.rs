//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of update,
//! validation and export operations with consistent messaging.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::models::{Item, Progress, Roadmap};

/// Wrapper type for displaying the result of an item update.
///
/// Lists the changes made, then the item as it is now.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{display::UpdateResult, Item};
///
/// let item = Item::new("a", "Basics", "Syntax");
/// let result = UpdateResult::with_changes(item, vec!["Status set to Completed".to_string()]);
/// let output = result.to_string();
/// assert!(output.contains("Updated topic 'Basics'"));
/// assert!(output.contains("- Status set to Completed"));
/// ```
pub struct UpdateResult {
    pub item: Item,
    pub changes: Vec<String>,
}

impl UpdateResult {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(item: Item, changes: Vec<String>) -> Self {
        Self { item, changes }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated topic '{}' (ID: {})", self.item.name, self.item.id)?;

        if self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.item)
    }
}

/// Wrapper type for displaying where an export was written.
pub struct ExportResult {
    pub path: PathBuf,
    pub progress: Progress,
}

impl ExportResult {
    pub fn new(path: PathBuf, progress: Progress) -> Self {
        Self { path, progress }
    }
}

impl fmt::Display for ExportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Exported roadmap to {}", self.path.display())?;
        writeln!(
            f,
            "{} of {} topics completed ({}%)",
            self.progress.completed, self.progress.total, self.progress.percentage
        )
    }
}

/// Wrapper type for displaying a successful validation of a roadmap document.
///
/// Rejections are not rendered here; they surface as the importer's error
/// message.
pub struct ValidationResult<'a> {
    pub roadmap: &'a Roadmap,
    pub origin: Option<&'a Path>,
}

impl fmt::Display for ValidationResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Success: '{}' ", self.roadmap.title)?;
        match self.origin {
            Some(path) => write!(f, "({})", path.display())?,
            None => write!(f, "(bundled sample)")?,
        }
        writeln!(f, " is a valid roadmap with {} topics", self.roadmap.items.len())
    }
}
