//! Error types for the waypoint library.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a roadmap document is rejected by the importer.
///
/// Positions are 1-based so messages can be shown to the user verbatim.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The input is not valid JSON
    #[error("Malformed JSON: {source}")]
    MalformedJson {
        #[from]
        source: serde_json::Error,
    },
    /// A root-level field is missing or has the wrong type
    #[error("Roadmap field '{field}' is missing or invalid")]
    InvalidField { field: &'static str },
    /// A required item field is missing or has the wrong type
    #[error("Item {index}: field '{field}' is missing or invalid")]
    InvalidItem { index: usize, field: &'static str },
    /// A required link field is missing or has the wrong type
    #[error("Item {item_index}, link {link_index}: field '{field}' is missing or invalid")]
    InvalidLink {
        item_index: usize,
        link_index: usize,
        field: &'static str,
    },
    /// Two items share the same id
    #[error("Item {index}: id '{id}' is already used by item {first_index}")]
    DuplicateId {
        index: usize,
        first_index: usize,
        id: String,
    },
}

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The document was read but rejected by the importer
    #[error("Import failed: {0}")]
    Import(#[from] ImportError),
    /// The document file could not be read
    #[error("Failed to read file '{path}': {source}")]
    FileReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The read task was cancelled before it produced the file contents
    #[error("Reading file '{path}' was aborted")]
    FileReadAborted { path: PathBuf },
    /// The download sink could not store the exported document
    #[error("Export failed, nothing was saved")]
    ExportFailed {
        #[source]
        source: std::io::Error,
    },
    /// No item with the given id exists in the current roadmap
    #[error("Topic with ID '{id}' not found")]
    ItemNotFound { id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error came from the importer rejecting document content.
    pub fn is_import_rejection(&self) -> bool {
        matches!(self, TrackerError::Import(_))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
