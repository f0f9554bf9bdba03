//! Core library for the Waypoint learning roadmap tracker.
//!
//! This crate turns an externally supplied JSON roadmap document into a
//! canonical in-memory [`Roadmap`], derives progress views from it, applies
//! item edits and writes it back out.
//!
//! # Pipeline
//!
//! ```text
//! raw text ──▶ importer ──▶ Tracker ──▶ exporter ──▶ DownloadSink
//!                             │
//!                             ├──▶ aggregate (progress, status groups)
//!                             └──▶ operations (item update)
//! ```
//!
//! - [`importer`]: parse, validate and normalize a document
//! - [`exporter`]: serialize a roadmap back to the document shape
//! - [`aggregate`]: progress and grouping by status
//! - [`operations`]: the pure item update operation
//! - [`tracker`]: the state owner tying these together
//! - [`display`]: markdown formatting of models and results
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{params::UpdateItem, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Starts from the bundled sample roadmap
//! let mut tracker = TrackerBuilder::new().build().await?;
//!
//! tracker.apply(&UpdateItem {
//!     id: "ownership".to_string(),
//!     status: Some("completed".to_string()),
//!     ..UpdateItem::default()
//! })?;
//!
//! println!("{}", tracker.roadmap());
//! let bytes = tracker.export()?;
//! # let _ = bytes;
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod display;
pub mod error;
pub mod exporter;
pub mod importer;
pub mod models;
pub mod operations;
pub mod params;
pub mod sample;
pub mod sink;
pub mod tracker;

// Re-export commonly used types
pub use display::{ExportResult, StatusBoard, UpdateResult, ValidationResult};
pub use error::{ImportError, Result, TrackerError};
pub use exporter::export;
pub use importer::import;
pub use models::{Item, ItemStatus, Link, Progress, Roadmap, StatusGroups};
pub use params::{ItemPatch, UpdateItem};
pub use sink::{DirectorySink, DownloadSink, PathSink};
pub use tracker::{ImportOutcome, ImportRead, ImportTicket, Tracker, TrackerBuilder};
