//! Collection wrapper types for displaying groups of items.
//!
//! This module provides wrapper types that format grouped items with
//! consistent structure and empty collection handling.

use std::fmt;

use super::datetime::DueDate;
use crate::models::{Item, ItemStatus, StatusGroups};

const NOTES_PREVIEW_CHARS: usize = 60;

/// Newtype wrapper for displaying items grouped into status columns.
///
/// Columns always appear in the order not started, in progress, completed,
/// each with its item count. Empty columns show an encouraging placeholder.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{aggregate::group_by_status, display::StatusBoard, Item, Roadmap};
///
/// let roadmap = Roadmap {
///     title: "T".to_string(),
///     description: None,
///     items: vec![Item::new("a", "Basics", "Syntax")],
/// };
/// let output = StatusBoard(group_by_status(&roadmap)).to_string();
/// assert!(output.contains("## Not started (1)"));
/// assert!(output.contains("Complete your first topic!"));
/// ```
pub struct StatusBoard<'a>(pub StatusGroups<'a>);

impl StatusBoard<'_> {
    fn empty_message(status: &ItemStatus) -> &'static str {
        match status {
            ItemStatus::InProgress => "Start working on topics",
            ItemStatus::Completed => "Complete your first topic!",
            _ => "All topics started!",
        }
    }
}

impl fmt::Display for StatusBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &ItemStatus::KNOWN {
            let items = self.0.get(status);
            writeln!(f, "## {} ({})", status.label(), items.len())?;
            writeln!(f)?;

            if items.is_empty() {
                writeln!(f, "{}", Self::empty_message(status))?;
                writeln!(f)?;
            }
            for item in items {
                write!(f, "{}", ItemCard(item))?;
            }
        }
        Ok(())
    }
}

/// Compact rendering of a single item for board columns.
pub struct ItemCard<'a>(pub &'a Item);

impl fmt::Display for ItemCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.0;
        writeln!(f, "### {} ({})", item.name, item.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "{}", item.description)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", item.id)?;
        if let Some(due) = &item.due_date {
            writeln!(f, "- Due: {}", DueDate(due))?;
        }
        if !item.notes.is_empty() {
            writeln!(f, "- Notes: {}", notes_preview(&item.notes))?;
        }
        if !item.links.is_empty() {
            writeln!(f, "- Resources: {}", item.links.len())?;
        }
        writeln!(f)
    }
}

/// Single-line preview of the notes, cut at a character boundary.
fn notes_preview(notes: &str) -> String {
    let flat = notes.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > NOTES_PREVIEW_CHARS {
        let cut: String = flat.chars().take(NOTES_PREVIEW_CHARS).collect();
        format!("{}...", cut.trim_end())
    } else {
        flat
    }
}
