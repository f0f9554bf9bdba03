//! Roadmap model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::Item;

/// The root document: a titled, ordered collection of learning items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Roadmap {
    /// Title of the roadmap
    pub title: String,

    /// Free-form description shown under the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Items in display order
    pub items: Vec<Item>,
}

impl Roadmap {
    /// Find the first item with the given id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether an item with the given id exists.
    pub fn contains_item(&self, id: &str) -> bool {
        self.item(id).is_some()
    }
}
