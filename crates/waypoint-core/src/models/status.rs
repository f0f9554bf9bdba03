//! Status enumeration for roadmap items.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Learning status of a roadmap item.
///
/// Documents are edited by hand, so a status outside the known set is kept
/// as [`ItemStatus::Unrecognized`] instead of being rejected. It is exported
/// unchanged and treated as [`ItemStatus::NotStarted`] wherever a display
/// status is needed (see [`ItemStatus::effective`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemStatus {
    /// Topic has not been started yet
    #[default]
    NotStarted,

    /// Topic is being studied
    InProgress,

    /// Topic has been learned
    Completed,

    /// Any other value found in the source document
    Unrecognized(String),
}

impl ItemStatus {
    /// All statuses a user can pick, in board column order.
    pub const KNOWN: [ItemStatus; 3] = [
        ItemStatus::NotStarted,
        ItemStatus::InProgress,
        ItemStatus::Completed,
    ];

    /// Document string representation.
    pub fn as_str(&self) -> &str {
        match self {
            ItemStatus::NotStarted => "not_started",
            ItemStatus::InProgress => "in_progress",
            ItemStatus::Completed => "completed",
            ItemStatus::Unrecognized(raw) => raw,
        }
    }

    /// The status used for grouping and display.
    pub fn effective(&self) -> ItemStatus {
        match self {
            ItemStatus::Unrecognized(_) => ItemStatus::NotStarted,
            known => known.clone(),
        }
    }

    /// Whether the item counts towards completion progress.
    pub fn is_completed(&self) -> bool {
        matches!(self, ItemStatus::Completed)
    }

    /// Human-readable label of the effective status.
    pub fn label(&self) -> &'static str {
        match self.effective() {
            ItemStatus::InProgress => "In progress",
            ItemStatus::Completed => "Completed",
            _ => "Not started",
        }
    }

    /// Get the effective status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waypoint_core::models::ItemStatus;
    ///
    /// assert_eq!(ItemStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ItemStatus::InProgress.with_icon(), "➤ In progress");
    /// assert_eq!(ItemStatus::from("archived".to_string()).with_icon(), "○ Not started");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self.effective() {
            ItemStatus::InProgress => "➤ In progress",
            ItemStatus::Completed => "✓ Completed",
            _ => "○ Not started",
        }
    }
}

/// Lenient conversion used when reading documents. An empty string is the
/// same as an absent status.
impl From<String> for ItemStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "" | "not_started" => ItemStatus::NotStarted,
            "in_progress" => ItemStatus::InProgress,
            "completed" => ItemStatus::Completed,
            _ => ItemStatus::Unrecognized(raw),
        }
    }
}

impl From<ItemStatus> for String {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Strict parsing used for user input; only the known statuses are accepted.
impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "not_started" | "notstarted" | "todo" => Ok(ItemStatus::NotStarted),
            "in_progress" | "inprogress" => Ok(ItemStatus::InProgress),
            "completed" | "done" => Ok(ItemStatus::Completed),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}
