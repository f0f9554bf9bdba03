//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context-specific formatting for grouped items and
//! operation results. All output is markdown so the CLI can render it richly
//! or print it as plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Roadmap, Item) │───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Status board and item cards
//! - [`results`]: Operation result types (UpdateResult, ExportResult, ValidationResult)
//! - [`datetime`]: Due date formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{ItemCard, StatusBoard};
pub use datetime::DueDate;
pub use results::{ExportResult, UpdateResult, ValidationResult};
