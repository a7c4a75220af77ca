//! Error types for the ingest module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting uploaded artifacts.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The scanned document's filename is empty or not a plain file name.
    #[error("Invalid scanned document filename: {name:?}")]
    InvalidDocumentName { name: String },

    /// An artifact could not be written to the input area.
    #[error("Failed to write artifact: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
