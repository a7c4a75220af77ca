//! Types for the engine module.

use std::path::PathBuf;

/// A single engine invocation, parameterized by the two workspace areas.
#[derive(Debug, Clone)]
pub struct EngineInvocation {
    /// Request id, used for logging.
    pub request_id: String,
    /// Area the engine reads artifacts and page images from.
    pub input_dir: PathBuf,
    /// Area the engine writes result artifacts into.
    pub output_dir: PathBuf,
}

/// What happened when the engine ran to completion.
///
/// A non-zero exit is represented here rather than as an error: the engine
/// may have written usable results before failing.
#[derive(Debug, Clone)]
pub struct EngineOutcome {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub duration_ms: u64,
    /// Tail of the engine's stderr, kept for diagnostics.
    pub stderr_tail: Option<String>,
}
