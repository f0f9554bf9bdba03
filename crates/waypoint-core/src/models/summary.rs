//! Derived, read-only views over a roadmap.

use serde::Serialize;

use super::{Item, ItemStatus};

/// Completion statistics for a roadmap.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Progress {
    /// Number of completed items
    pub completed: u32,
    /// Total number of items
    pub total: u32,
    /// Completed share rounded half-up to a whole percent
    pub percentage: u32,
}

/// Items partitioned by their effective status, each group in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusGroups<'a> {
    pub not_started: Vec<&'a Item>,
    pub in_progress: Vec<&'a Item>,
    pub completed: Vec<&'a Item>,
}

impl<'a> StatusGroups<'a> {
    /// Items in the group for `status`; unrecognized statuses map to the
    /// not-started group.
    pub fn get(&self, status: &ItemStatus) -> &[&'a Item] {
        match status.effective() {
            ItemStatus::InProgress => &self.in_progress,
            ItemStatus::Completed => &self.completed,
            _ => &self.not_started,
        }
    }

    pub(crate) fn push(&mut self, item: &'a Item) {
        match item.status.effective() {
            ItemStatus::InProgress => self.in_progress.push(item),
            ItemStatus::Completed => self.completed.push(item),
            _ => self.not_started.push(item),
        }
    }

    /// Number of items across all groups.
    pub fn len(&self) -> usize {
        self.not_started.len() + self.in_progress.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
