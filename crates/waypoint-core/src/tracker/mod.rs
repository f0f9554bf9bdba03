//! High-level tracker API owning the current roadmap.
//!
//! The [`Tracker`] is the single owner of the roadmap for a session. It is
//! replaced wholesale on import and patched through the item update
//! operation; nothing else mutates it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   File source   │    │     Tracker     │    │  Download sink  │
//! │ (async, ticket) │───▶│ import / update │───▶│   (export)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        progress / groups
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances
//! - [`source`]: Ticketed asynchronous document reads
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use waypoint_core::{params::UpdateItem, DirectorySink, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tracker = TrackerBuilder::new()
//!     .with_document_path(Some("roadmap.json"))
//!     .build()
//!     .await?;
//!
//! tracker.apply(&UpdateItem {
//!     id: "rust-basics".to_string(),
//!     status: Some("completed".to_string()),
//!     ..UpdateItem::default()
//! })?;
//!
//! println!("{}% done", tracker.progress().percentage);
//! tracker.export_to(&DirectorySink::new("."))?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

pub mod builder;
pub mod source;


pub use builder::TrackerBuilder;
pub use source::{ImportCompletion, ImportOutcome, ImportRead, ImportTicket, PendingImport};

use crate::{
    aggregate,
    error::{Result, TrackerError},
    exporter, importer,
    models::{Item, Progress, Roadmap, StatusGroups},
    operations,
    params::{ItemPatch, UpdateItem},
    sink::DownloadSink,
};

/// Owner of the current roadmap for a session.
#[derive(Debug, Clone)]
pub struct Tracker {
    roadmap: Roadmap,
    origin: Option<PathBuf>,
    last_ticket: u64,
}

impl Tracker {
    /// Creates a tracker holding `roadmap`.
    pub fn new(roadmap: Roadmap) -> Self {
        Self {
            roadmap,
            origin: None,
            last_ticket: 0,
        }
    }

    /// The current roadmap.
    pub fn roadmap(&self) -> &Roadmap {
        &self.roadmap
    }

    /// File the current roadmap was imported from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Replace the current roadmap, returning the previous one.
    pub fn replace(&mut self, roadmap: Roadmap) -> Roadmap {
        self.origin = None;
        std::mem::replace(&mut self.roadmap, roadmap)
    }

    /// Look up an item by id.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::ItemNotFound` when no item has this id.
    pub fn item(&self, id: &str) -> Result<&Item> {
        self.roadmap
            .item(id)
            .ok_or_else(|| TrackerError::ItemNotFound { id: id.to_string() })
    }

    /// Overlay `patch` onto the item with `id` and return the updated item.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::ItemNotFound` and leaves the roadmap untouched
    /// when no item has this id.
    pub fn update_item(&mut self, id: &str, patch: &ItemPatch) -> Result<&Item> {
        if !self.roadmap.contains_item(id) {
            return Err(TrackerError::ItemNotFound { id: id.to_string() });
        }
        self.roadmap = operations::update_item(&self.roadmap, id, patch);
        debug!("Updated item '{id}': {:?}", patch.describe_changes());
        self.item(id)
    }

    /// Validate user-entered update parameters and apply them.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when the parameters do not
    /// validate and `TrackerError::ItemNotFound` when no item has the id. The
    /// roadmap is untouched in both cases.
    pub fn apply(&mut self, params: &UpdateItem) -> Result<&Item> {
        let patch = params.validate()?;
        self.update_item(&params.id, &patch)
    }

    /// Completion progress of the current roadmap.
    pub fn progress(&self) -> Progress {
        aggregate::progress(&self.roadmap)
    }

    /// Current items grouped by status.
    pub fn groups(&self) -> StatusGroups<'_> {
        aggregate::group_by_status(&self.roadmap)
    }

    /// Serialize the current roadmap to document bytes.
    pub fn export(&self) -> Result<Vec<u8>> {
        exporter::export(&self.roadmap)
    }

    /// Export the current roadmap to `sink` under today's file name.
    pub fn export_to(&self, sink: &dyn DownloadSink) -> Result<PathBuf> {
        exporter::export_to(&self.roadmap, sink, exporter::today())
    }

    /// Start importing the document at `path`.
    ///
    /// Any import started earlier and not yet completed is superseded by this
    /// one.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when the file is not a `.json`
    /// document.
    pub fn begin_import<P: AsRef<Path>>(&mut self, path: P) -> Result<PendingImport> {
        let path = path.as_ref();
        source::check_extension(path)?;
        self.last_ticket += 1;
        let ticket = ImportTicket(self.last_ticket);
        debug!("Import #{} started for {}", ticket.sequence(), path.display());
        Ok(PendingImport {
            ticket,
            path: path.to_path_buf(),
        })
    }

    /// Apply a finished read.
    ///
    /// Completions for any ticket other than the most recent are dropped,
    /// whatever their result. Otherwise the contents run through the importer
    /// and replace the roadmap on success.
    ///
    /// # Errors
    ///
    /// Returns the read error or `TrackerError::Import`; the current roadmap
    /// is left untouched in both cases.
    pub fn complete_import(&mut self, completion: ImportCompletion) -> Result<ImportOutcome> {
        let ImportCompletion {
            ticket,
            path,
            contents,
        } = completion;

        if ticket.sequence() != self.last_ticket {
            warn!(
                "Dropping stale import #{} of {} (latest is #{})",
                ticket.sequence(),
                path.display(),
                self.last_ticket
            );
            return Ok(ImportOutcome::Superseded { ticket });
        }

        let roadmap = importer::import(&contents?).map_err(|e| {
            warn!("Rejected {}: {e}", path.display());
            TrackerError::from(e)
        })?;
        let items = roadmap.items.len();
        info!("Imported '{}' ({items} items) from {}", roadmap.title, path.display());
        self.roadmap = roadmap;
        self.origin = Some(path);
        Ok(ImportOutcome::Applied { items })
    }

    /// Read and import the document at `path` in one step.
    pub async fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportOutcome> {
        let pending = self.begin_import(path)?;
        let completion = pending.read().await;
        self.complete_import(completion)
    }
}
