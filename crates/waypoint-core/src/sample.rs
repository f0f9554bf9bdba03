//! Roadmap bundled with the crate, used when no document is given.

use crate::{error::ImportError, importer, models::Roadmap};

const SAMPLE_ROADMAP: &str = include_str!("../data/sample-roadmap.json");

/// The bundled sample, run through the importer like any other document.
pub fn roadmap() -> Result<Roadmap, ImportError> {
    importer::import(SAMPLE_ROADMAP)
}
