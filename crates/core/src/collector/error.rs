//! Error types for the collector module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting engine results.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// The output area could not be scanned.
    #[error("Failed to scan output area: {path}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A result file exists but could not be read.
    #[error("Failed to read result file: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The results document exists but is not valid JSON.
    ///
    /// A present-but-corrupt document is surfaced rather than silently
    /// reported as absent.
    #[error("Failed to parse results document {path}: {reason}")]
    ResultsParse { path: PathBuf, reason: String },
}
