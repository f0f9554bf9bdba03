//! Read-only summaries derived from a roadmap.
//!
//! These functions never mutate their input and re-apply the status
//! defaulting on their own, so hand-built or partially migrated values are
//! summarized the same way as imported ones.

use crate::models::{Progress, Roadmap, StatusGroups};

/// Completion progress of a roadmap.
///
/// The percentage is rounded half-up and is `0` for an empty roadmap.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{aggregate::progress, Item, ItemStatus, Roadmap};
///
/// let mut items = vec![
///     Item::new("a", "A", "a"),
///     Item::new("b", "B", "b"),
///     Item::new("c", "C", "c"),
/// ];
/// items[0].status = ItemStatus::Completed;
/// items[1].status = ItemStatus::Completed;
/// let roadmap = Roadmap { title: "T".to_string(), description: None, items };
///
/// let progress = progress(&roadmap);
/// assert_eq!((progress.completed, progress.total, progress.percentage), (2, 3, 67));
/// ```
pub fn progress(roadmap: &Roadmap) -> Progress {
    let total = roadmap.items.len();
    let completed = roadmap
        .items
        .iter()
        .filter(|item| item.status.is_completed())
        .count();

    Progress {
        completed: saturating_u32(completed),
        total: saturating_u32(total),
        percentage: percentage(completed, total),
    }
}

/// `completed` out of `total` as a whole percentage, rounded half up.
fn percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let (completed, total) = (completed as u64, total as u64);
    // At most 100, so the narrowing cannot fail
    u32::try_from((completed * 100 + total / 2) / total).unwrap_or(100)
}

fn saturating_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Partition items by effective status, keeping source order in each group.
///
/// Items without an id are left out of every group.
pub fn group_by_status(roadmap: &Roadmap) -> StatusGroups<'_> {
    let mut groups = StatusGroups::default();
    for item in roadmap.items.iter().filter(|item| !item.id.is_empty()) {
        groups.push(item);
    }
    groups
}
