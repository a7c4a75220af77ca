//! Error taxonomy for the request pipeline.

use thiserror::Error;

use crate::collector::CollectorError;
use crate::engine::EngineError;
use crate::ingest::IngestError;
use crate::rasterizer::RasterizerError;
use crate::workspace::WorkspaceError;

/// A fatal pipeline failure, tagged by the stage that produced it.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Workspace could not be allocated, reset or cleaned.
    #[error("Workspace failure: {0}")]
    Workspace(#[from] WorkspaceError),

    /// A required upload could not be persisted.
    #[error("Ingestion failure: {0}")]
    Ingest(#[from] IngestError),

    /// The scanned document could not be rasterized.
    #[error("Rasterization failure: {0}")]
    Rasterize(#[from] RasterizerError),

    /// The engine could not be started or did not terminate.
    #[error("Engine invocation failure: {0}")]
    Engine(#[from] EngineError),

    /// The engine terminated with a failure exit and the pipeline is
    /// configured to treat that as fatal.
    #[error("Engine exited with failure status (code {exit_code:?})")]
    EngineFailed { exit_code: Option<i32> },

    /// Engine results could not be gathered.
    #[error("Result collection failure: {0}")]
    Collect(#[from] CollectorError),

    /// The orchestrator is shutting down and no longer admits requests.
    #[error("Pipeline is shutting down")]
    ShuttingDown,
}

impl PipelineError {
    /// The pipeline stage this error belongs to, for logging.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Workspace(_) => "workspace",
            Self::Ingest(_) => "ingest",
            Self::Rasterize(_) => "rasterize",
            Self::Engine(_) | Self::EngineFailed { .. } => "engine",
            Self::Collect(_) => "collect",
            Self::ShuttingDown => "admission",
        }
    }
}
