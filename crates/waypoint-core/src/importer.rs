//! Roadmap import pipeline: parse, validate and normalize.
//!
//! The importer walks the parsed JSON value by hand instead of deriving
//! `Deserialize` so every rejection can name the exact item, link and field
//! that failed. Checks run in document order and stop at the first failure:
//!
//! 1. the text must be JSON
//! 2. `title` must be a non-empty string
//! 3. `items` must be an array
//! 4. per item: `id`, `name`, `description`, then `links` (if present) and
//!    each link's `title` and `url`, then id uniqueness
//!
//! `status`, `notes` and `dueDate` are never validated. They are normalized:
//! a usable value in the document wins, anything else falls back to the
//! default (`not_started`, `""`, `null`).

use std::collections::HashMap;

use log::debug;
use serde_json::{Map, Value};

use crate::{
    error::ImportError,
    models::{Item, ItemStatus, Link, Roadmap},
};

type Object = Map<String, Value>;

/// Parse, validate and normalize a roadmap document.
///
/// # Errors
///
/// Returns the first [`ImportError`] encountered; no partial roadmap is ever
/// produced.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{import, ImportError, ItemStatus};
///
/// let roadmap = import(r#"{
///     "title": "Rust",
///     "items": [{ "id": "a", "name": "Basics", "description": "Syntax" }]
/// }"#)?;
/// assert_eq!(roadmap.items[0].status, ItemStatus::NotStarted);
/// assert!(roadmap.items[0].links.is_empty());
///
/// let err = import(r#"{ "title": "T", "items": [{ "name": "x" }] }"#).unwrap_err();
/// assert!(matches!(err, ImportError::InvalidItem { index: 1, field: "id" }));
/// # Ok::<(), ImportError>(())
/// ```
pub fn import(raw: &str) -> Result<Roadmap, ImportError> {
    // Skip a leading byte-order mark
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let document: Value = serde_json::from_str(raw)?;
    let root = document.as_object();

    let title = required_text(root, "title").ok_or(ImportError::InvalidField { field: "title" })?;
    let entries = root
        .and_then(|root| root.get("items"))
        .and_then(Value::as_array)
        .ok_or(ImportError::InvalidField { field: "items" })?;

    let mut first_seen: HashMap<String, usize> = HashMap::with_capacity(entries.len());
    let mut items = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        let index = position + 1;
        let item = read_item(index, entry.as_object())?;
        if let Some(&first_index) = first_seen.get(&item.id) {
            return Err(ImportError::DuplicateId {
                index,
                first_index,
                id: item.id,
            });
        }
        first_seen.insert(item.id.clone(), index);
        items.push(item);
    }

    let roadmap = Roadmap {
        title: title.to_string(),
        description: optional_text(root, "description").map(str::to_string),
        items,
    };
    debug!(
        "Imported roadmap '{}' with {} items",
        roadmap.title,
        roadmap.items.len()
    );
    Ok(roadmap)
}

/// Validate one item and build its canonical form.
fn read_item(index: usize, entry: Option<&Object>) -> Result<Item, ImportError> {
    let invalid = |field| ImportError::InvalidItem { index, field };

    let id = required_text(entry, "id").ok_or_else(|| invalid("id"))?;
    let name = required_text(entry, "name").ok_or_else(|| invalid("name"))?;
    let description = required_text(entry, "description").ok_or_else(|| invalid("description"))?;

    let links = match entry.and_then(|entry| entry.get("links")) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(links)) => links
            .iter()
            .enumerate()
            .map(|(position, link)| read_link(index, position + 1, link.as_object()))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(invalid("links")),
    };

    Ok(Item {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        links,
        status: normalize_status(entry),
        notes: optional_text(entry, "notes")
            .unwrap_or_default()
            .to_string(),
        due_date: optional_text(entry, "dueDate")
            .filter(|date| !date.is_empty())
            .map(str::to_string),
    })
}

fn read_link(
    item_index: usize,
    link_index: usize,
    link: Option<&Object>,
) -> Result<Link, ImportError> {
    let invalid = |field| ImportError::InvalidLink {
        item_index,
        link_index,
        field,
    };

    let title = required_text(link, "title").ok_or_else(|| invalid("title"))?;
    let url = required_text(link, "url").ok_or_else(|| invalid("url"))?;
    Ok(Link::new(title, url))
}

fn normalize_status(entry: Option<&Object>) -> ItemStatus {
    optional_text(entry, "status")
        .map(|raw| ItemStatus::from(raw.to_string()))
        .unwrap_or_default()
}

/// A field that must be a non-empty string.
fn required_text<'a>(object: Option<&'a Object>, field: &str) -> Option<&'a str> {
    optional_text(object, field).filter(|text| !text.is_empty())
}

/// A field that is used only when it is a string.
fn optional_text<'a>(object: Option<&'a Object>, field: &str) -> Option<&'a str> {
    object.and_then(|object| object.get(field)).and_then(Value::as_str)
}
