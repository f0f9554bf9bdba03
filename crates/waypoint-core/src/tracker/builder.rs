//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use super::Tracker;
use crate::{error::Result, models::Roadmap, sample};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    document_path: Option<PathBuf>,
    roadmap: Option<Roadmap>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the roadmap document to import.
    ///
    /// If not specified, the tracker starts with the bundled sample roadmap.
    pub fn with_document_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.document_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Starts from an in-memory roadmap instead of the bundled sample.
    pub fn with_roadmap(mut self, roadmap: Roadmap) -> Self {
        self.roadmap = Some(roadmap);
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileReadFailed` if the document cannot be read
    /// Returns `TrackerError::Import` if the document is rejected
    pub async fn build(self) -> Result<Tracker> {
        let initial = match self.roadmap {
            Some(roadmap) => roadmap,
            None => sample::roadmap()?,
        };
        let mut tracker = Tracker::new(initial);

        if let Some(path) = self.document_path {
            tracker.import_file(&path).await?;
        }

        Ok(tracker)
    }
}
