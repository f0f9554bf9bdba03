//! Asynchronous document reads with ticketed completions.
//!
//! Every read is started through [`crate::Tracker::begin_import`], which hands
//! out a [`PendingImport`] carrying a monotonically increasing
//! [`ImportTicket`]. The read itself does not borrow the tracker, so a caller
//! may start a second import before the first finishes. When completions are
//! handed back, only the one holding the latest ticket is applied.

use std::{
    io,
    path::{Path, PathBuf},
};

use log::debug;
use tokio::task::JoinHandle;

use crate::error::{Result, TrackerError};

/// Sequence number identifying one import request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImportTicket(pub(crate) u64);

impl ImportTicket {
    /// Position of this request among all imports started on the tracker.
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// An import that has been started but whose file has not been read yet.
#[derive(Debug)]
pub struct PendingImport {
    pub(crate) ticket: ImportTicket,
    pub(crate) path: PathBuf,
}

impl PendingImport {
    pub fn ticket(&self) -> ImportTicket {
        self.ticket
    }

    /// Spawn the file read. The returned handle can abort it before it lands.
    pub fn start(self) -> ImportRead {
        let owned = self.path.clone();
        let task = tokio::spawn(async move { tokio::fs::read_to_string(owned).await });
        ImportRead {
            ticket: self.ticket,
            path: self.path,
            task,
        }
    }

    /// Read the document. The outcome, success or failure, is carried in the
    /// returned completion and only takes effect once handed to
    /// [`crate::Tracker::complete_import`].
    pub async fn read(self) -> ImportCompletion {
        self.start().finish().await
    }
}

/// A file read running on its own task.
#[derive(Debug)]
pub struct ImportRead {
    ticket: ImportTicket,
    path: PathBuf,
    task: JoinHandle<io::Result<String>>,
}

impl ImportRead {
    pub fn ticket(&self) -> ImportTicket {
        self.ticket
    }

    /// Cancel the read. Finishing it afterwards yields
    /// `TrackerError::FileReadAborted`.
    pub fn abort(&self) {
        debug!(
            "Aborting read #{} of {}",
            self.ticket.sequence(),
            self.path.display()
        );
        self.task.abort();
    }

    /// Wait for the read and wrap its result in a completion.
    pub async fn finish(self) -> ImportCompletion {
        let contents = join_read(&self.path, self.task).await;
        ImportCompletion {
            ticket: self.ticket,
            path: self.path,
            contents,
        }
    }
}

/// The result of reading the file behind a [`PendingImport`].
#[derive(Debug)]
pub struct ImportCompletion {
    pub ticket: ImportTicket,
    pub path: PathBuf,
    pub contents: Result<String>,
}

/// What happened to a completed import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The document replaced the current roadmap
    Applied { items: usize },
    /// A newer import was started meanwhile; this completion was dropped
    Superseded { ticket: ImportTicket },
}

/// Read a document file as UTF-8 text on a separate task.
///
/// # Errors
///
/// Returns `TrackerError::FileReadFailed` when the file cannot be read or is
/// not UTF-8.
pub async fn read_document(path: &Path) -> Result<String> {
    let owned = path.to_path_buf();
    let task = tokio::spawn(async move { tokio::fs::read_to_string(owned).await });
    join_read(path, task).await
}

async fn join_read(path: &Path, task: JoinHandle<io::Result<String>>) -> Result<String> {
    match task.await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(source)) => Err(TrackerError::FileReadFailed {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.is_cancelled() => Err(TrackerError::FileReadAborted {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(TrackerError::FileReadFailed {
            path: path.to_path_buf(),
            source: io::Error::other(format!("Task join error: {e}")),
        }),
    }
}

/// Only `.json` files are accepted as roadmap documents.
pub(crate) fn check_extension(path: &Path) -> Result<()> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(())
    } else {
        Err(TrackerError::invalid_input("file").with_reason(format!(
            "'{}' is not a JSON file; please choose a .json document",
            path.display()
        )))
    }
}
