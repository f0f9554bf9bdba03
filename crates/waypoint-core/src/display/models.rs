//! Display implementations for domain models.
//!
//! The Display implementations provide markdown-formatted output for rich
//! terminal display, with consistent status icons and structured sections.

use std::fmt;

use super::{collections::StatusBoard, datetime::DueDate};
use crate::{
    aggregate,
    models::{Item, ItemStatus, Link, Progress, Roadmap},
};

const PROGRESS_BAR_WIDTH: u32 = 20;

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({})", self.title, self.url)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = (self.percentage.min(100) * PROGRESS_BAR_WIDTH / 100) as usize;
        let empty = PROGRESS_BAR_WIDTH as usize - filled;
        writeln!(
            f,
            "**Overall progress**: {}% `{}{}`",
            self.percentage,
            "█".repeat(filled),
            "░".repeat(empty)
        )?;
        writeln!(
            f,
            "Completed: {} of {} topics",
            self.completed, self.total
        )
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        if let Some(due) = &self.due_date {
            writeln!(f, "- Due: {}", DueDate(due))?;
        }

        writeln!(f, "\n## Description")?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        if !self.links.is_empty() {
            writeln!(f, "\n## Resources")?;
            writeln!(f)?;
            for link in &self.links {
                writeln!(f, "- {link}")?;
            }
        }

        writeln!(f, "\n## Notes")?;
        writeln!(f)?;
        if self.notes.is_empty() {
            writeln!(f, "No notes yet.")?;
        } else {
            writeln!(f, "{}", self.notes)?;
        }

        Ok(())
    }
}

impl fmt::Display for Roadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        if let Some(desc) = self.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        write!(f, "{}", aggregate::progress(self))?;
        writeln!(f)?;
        write!(f, "{}", StatusBoard(aggregate::group_by_status(self)))
    }
}
