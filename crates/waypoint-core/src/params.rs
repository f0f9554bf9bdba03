//! Parameter structures for waypoint operations
//!
//! These structures are shared by every interface that drives the tracker
//! and carry no framework-specific derives. Interface layers (the CLI) define
//! their own argument types and convert into these with `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   ItemPatch     │
//! │  (clap derives) │───▶│ (UpdateItem)    │───▶│  (validated)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::str::FromStr;

use jiff::civil::Date;

use crate::{
    error::{Result, TrackerError},
    models::{Item, ItemStatus},
};

/// A shallow patch over an item's user-editable fields.
///
/// `None` leaves a field untouched. For `due_date` the inner `None` clears
/// the date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub status: Option<ItemStatus>,
    pub notes: Option<String>,
    pub due_date: Option<Option<String>>,
}

impl ItemPatch {
    /// Patch that only changes the status.
    pub fn status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Whether the patch would leave any item unchanged.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none() && self.due_date.is_none()
    }

    /// Overlay the present fields onto `item`.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(status) = &self.status {
            item.status = status.clone();
        }
        if let Some(notes) = &self.notes {
            item.notes = notes.clone();
        }
        if let Some(due_date) = &self.due_date {
            item.due_date = due_date.clone();
        }
    }

    /// Human-readable list of what the patch changes.
    pub fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(status) = &self.status {
            changes.push(format!("Status set to {}", status.label()));
        }
        match self.notes.as_deref() {
            Some("") => changes.push("Notes cleared".to_string()),
            Some(_) => changes.push("Notes updated".to_string()),
            None => {}
        }
        match &self.due_date {
            Some(Some(date)) => changes.push(format!("Due date set to {date}")),
            Some(None) => changes.push("Due date cleared".to_string()),
            None => {}
        }
        changes
    }
}

/// Parameters for editing an item, as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct UpdateItem {
    /// Id of the item to update (required)
    pub id: String,
    /// New status ('not_started', 'in_progress' or 'completed')
    pub status: Option<String>,
    /// Replacement notes; surrounding whitespace is trimmed
    pub notes: Option<String>,
    /// Remove the notes entirely
    pub clear_notes: bool,
    /// New due date in `YYYY-MM-DD` form; an empty string clears it
    pub due_date: Option<String>,
    /// Remove the due date
    pub clear_due_date: bool,
}

impl UpdateItem {
    /// Validate the user input and turn it into a patch.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When the status is not one of the
    ///   known statuses
    /// * `TrackerError::InvalidInput` - When the due date is not a valid
    ///   calendar date
    /// * `TrackerError::InvalidInput` - When a field is both set and cleared
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waypoint_core::{models::ItemStatus, params::UpdateItem};
    ///
    /// let params = UpdateItem {
    ///     id: "rust-basics".to_string(),
    ///     status: Some("completed".to_string()),
    ///     notes: Some("  finished the book  ".to_string()),
    ///     ..UpdateItem::default()
    /// };
    /// let patch = params.validate()?;
    /// assert_eq!(patch.status, Some(ItemStatus::Completed));
    /// assert_eq!(patch.notes.as_deref(), Some("finished the book"));
    /// # waypoint_core::Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<ItemPatch> {
        let status = self
            .status
            .as_deref()
            .map(|raw| {
                ItemStatus::from_str(raw).map_err(|e| {
                    TrackerError::invalid_input("status").with_reason(format!(
                        "{e}. Must be 'not_started', 'in_progress', or 'completed'"
                    ))
                })
            })
            .transpose()?;

        if self.clear_notes && self.notes.is_some() {
            return Err(TrackerError::invalid_input("notes")
                .with_reason("Cannot set and clear notes at the same time"));
        }
        let notes = if self.clear_notes {
            Some(String::new())
        } else {
            self.notes.as_deref().map(|notes| notes.trim().to_string())
        };

        if self.clear_due_date && self.due_date.is_some() {
            return Err(TrackerError::invalid_input("due_date")
                .with_reason("Cannot set and clear the due date at the same time"));
        }
        let due_date = if self.clear_due_date {
            Some(None)
        } else {
            self.due_date.as_deref().map(parse_due_date).transpose()?
        };

        Ok(ItemPatch {
            status,
            notes,
            due_date,
        })
    }
}

/// Parse a due date entered by the user. An empty value clears the date.
fn parse_due_date(raw: &str) -> Result<Option<String>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let date: Date = raw.parse().map_err(|e| {
        TrackerError::invalid_input("due_date")
            .with_reason(format!("Invalid date '{raw}': {e}. Use YYYY-MM-DD"))
    })?;
    Ok(Some(date.strftime("%Y-%m-%d").to_string()))
}
