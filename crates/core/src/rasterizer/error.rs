//! Error types for the rasterizer module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during rasterization.
#[derive(Debug, Error)]
pub enum RasterizerError {
    /// pdftoppm binary not found.
    #[error("pdftoppm not found at path: {path}")]
    PdftoppmNotFound { path: PathBuf },

    /// Scanned document not found.
    #[error("Scanned document not found: {path}")]
    DocumentNotFound { path: PathBuf },

    /// The document could not be rendered (corrupt, empty, unsupported).
    #[error("Rasterization failed: {reason}")]
    RasterizationFailed {
        reason: String,
        stderr: Option<String>,
    },

    /// The renderer produced no pages at all.
    #[error("Document produced no pages: {path}")]
    NoPages { path: PathBuf },

    /// Rendering timed out.
    #[error("Rasterization timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// I/O error during rasterization.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RasterizerError {
    /// Creates a new rasterization failed error with stderr output.
    pub fn rasterization_failed(reason: impl Into<String>, stderr: Option<String>) -> Self {
        Self::RasterizationFailed {
            reason: reason.into(),
            stderr,
        }
    }
}
