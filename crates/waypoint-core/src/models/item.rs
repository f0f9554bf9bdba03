//! Item and link model definitions.

use serde::{Deserialize, Serialize};

use super::ItemStatus;

/// One trackable topic with status, notes, due date and resource links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Identifier used to address the item on edits
    pub id: String,

    /// Short name of the topic
    pub name: String,

    /// What the topic covers
    pub description: String,

    /// Learning resources
    #[serde(default)]
    pub links: Vec<Link>,

    /// Current learning status
    #[serde(default)]
    pub status: ItemStatus,

    /// Free-form user notes
    #[serde(default)]
    pub notes: String,

    /// Planned completion date, an ISO date string as written by the user
    #[serde(default)]
    pub due_date: Option<String>,
}

impl Item {
    /// Create an item in canonical form with every optional field defaulted.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            links: Vec::new(),
            status: ItemStatus::default(),
            notes: String::new(),
            due_date: None,
        }
    }
}

/// A titled URL reference attached to an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// Display title of the resource
    pub title: String,

    /// Address of the resource; not checked for URL syntax
    pub url: String,
}

impl Link {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
