//! Error types for the engine module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while invoking the external engine.
///
/// Note that a non-zero engine exit is not represented here; it is part of
/// `EngineOutcome`. These errors mean the engine never ran to completion.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Engine binary not found.
    #[error("Engine binary not found at path: {path}")]
    EngineNotFound { path: PathBuf },

    /// The engine process could not be spawned.
    #[error("Failed to start engine process: {reason}")]
    SpawnFailed { reason: String },

    /// The engine did not terminate within the configured timeout.
    #[error("Engine timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// I/O error while running the engine.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
