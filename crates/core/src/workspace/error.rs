//! Error types for the workspace module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while managing a workspace.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// An area could not be cleared.
    #[error("Failed to clear workspace area: {path}")]
    ClearFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An area could not be created.
    #[error("Failed to create workspace area: {path}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The workspace could not be removed after the request completed.
    #[error("Failed to remove workspace: {path}")]
    CleanupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
