//! Roadmap export: serialize the canonical value back to the document shape.

use std::path::PathBuf;

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use log::{info, warn};
use serde::Serialize;

use crate::{
    error::{Result, TrackerError},
    models::{Item, Link, Roadmap},
    sink::DownloadSink,
};

/// Exact document shape written on export. Fields not listed here never
/// leave the process.
#[derive(Serialize)]
struct ExportDocument<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    items: Vec<ExportItem<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportItem<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    links: &'a [Link],
    status: &'a str,
    notes: &'a str,
    due_date: Option<&'a str>,
}

impl<'a> From<&'a Item> for ExportItem<'a> {
    fn from(item: &'a Item) -> Self {
        let status = match item.status.as_str() {
            "" => "not_started",
            status => status,
        };
        Self {
            id: &item.id,
            name: &item.name,
            description: &item.description,
            links: &item.links,
            status,
            notes: &item.notes,
            due_date: item.due_date.as_deref().filter(|date| !date.is_empty()),
        }
    }
}

impl<'a> From<&'a Roadmap> for ExportDocument<'a> {
    fn from(roadmap: &'a Roadmap) -> Self {
        Self {
            title: &roadmap.title,
            description: roadmap.description.as_deref(),
            items: roadmap.items.iter().map(ExportItem::from).collect(),
        }
    }
}

/// Serialize a roadmap as UTF-8 JSON with 2-space indentation.
///
/// The output is deterministic and is accepted by [`crate::import`], which
/// reproduces an equal canonical roadmap.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{export, import, Item, Roadmap};
///
/// let roadmap = Roadmap {
///     title: "Rust".to_string(),
///     description: None,
///     items: vec![Item::new("a", "Basics", "Syntax")],
/// };
/// let bytes = export(&roadmap)?;
/// let text = String::from_utf8(bytes).unwrap();
/// assert!(text.contains("\"dueDate\": null"));
/// assert_eq!(import(&text).unwrap(), roadmap);
/// # waypoint_core::Result::<()>::Ok(())
/// ```
pub fn export(roadmap: &Roadmap) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(&ExportDocument::from(roadmap))?)
}

/// Suggested file name for an export made on `date`.
///
/// ```rust
/// use jiff::civil::date;
/// use waypoint_core::exporter::export_file_name;
///
/// assert_eq!(export_file_name(date(2025, 3, 7)), "roadmap-progress-2025-03-07.json");
/// ```
pub fn export_file_name(date: Date) -> String {
    format!("roadmap-progress-{}.json", date.strftime("%Y-%m-%d"))
}

/// The current UTC calendar date, used to name exports.
pub fn today() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}

/// Serialize `roadmap` and hand it to `sink` under the dated file name.
///
/// # Errors
///
/// Returns `TrackerError::Serialization` if the document cannot be encoded
/// and `TrackerError::ExportFailed` if the sink cannot store it.
pub fn export_to(roadmap: &Roadmap, sink: &dyn DownloadSink, date: Date) -> Result<PathBuf> {
    let bytes = export(roadmap)?;
    let file_name = export_file_name(date);
    match sink.save(&file_name, &bytes) {
        Ok(path) => {
            info!("Exported {} items to {}", roadmap.items.len(), path.display());
            Ok(path)
        }
        Err(source) => {
            warn!("Export of {file_name} failed: {source}");
            Err(TrackerError::ExportFailed { source })
        }
    }
}
