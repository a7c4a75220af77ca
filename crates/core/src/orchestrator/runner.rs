//! The request pipeline runner.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::collector::{OmrResults, ResultCollector};
use crate::config::Config;
use crate::engine::{EngineInvocation, OmrEngine};
use crate::ingest::{ArtifactBundle, ArtifactIngestor};
use crate::rasterizer::{RasterJob, Rasterizer};
use crate::workspace::{Workspace, WorkspaceManager};

use super::error::PipelineError;

/// Behavior knobs for the orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorOptions {
    /// Maximum requests processed concurrently.
    pub max_concurrent_requests: usize,
    /// Turn a failure engine exit into `PipelineError::EngineFailed` instead
    /// of collecting whatever the engine produced.
    pub fail_on_engine_error: bool,
    /// Leave workspaces behind after the request completes.
    pub keep_workspaces: bool,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            max_concurrent_requests: 1,
            fail_on_engine_error: false,
            keep_workspaces: false,
        }
    }
}

impl OrchestratorOptions {
    /// Derives options from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_concurrent_requests: config.pipeline.max_concurrent_requests,
            fail_on_engine_error: config.engine.fail_on_engine_error,
            keep_workspaces: config.workspace.keep_workspaces,
        }
    }
}

/// Sequences one request through the full pipeline.
pub struct OmrOrchestrator {
    workspaces: WorkspaceManager,
    ingestor: ArtifactIngestor,
    rasterizer: Arc<dyn Rasterizer>,
    engine: Arc<dyn OmrEngine>,
    collector: ResultCollector,
    admission: Arc<Semaphore>,
    options: OrchestratorOptions,
}

impl OmrOrchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        workspaces: WorkspaceManager,
        rasterizer: Arc<dyn Rasterizer>,
        engine: Arc<dyn OmrEngine>,
        options: OrchestratorOptions,
    ) -> Self {
        let admission = Arc::new(Semaphore::new(options.max_concurrent_requests.max(1)));
        Self {
            workspaces,
            ingestor: ArtifactIngestor::new(),
            rasterizer,
            engine,
            collector: ResultCollector::new(),
            admission,
            options,
        }
    }

    /// Processes one artifact bundle end to end.
    ///
    /// Allocates a fresh workspace, runs the linear stage sequence, and
    /// removes the workspace on completion regardless of the outcome (unless
    /// configured to keep it). Cleanup failure after a finished request is
    /// logged, not surfaced: the result is already in hand.
    pub async fn process(&self, bundle: ArtifactBundle) -> Result<OmrResults, PipelineError> {
        let _permit = self
            .admission
            .acquire()
            .await
            .map_err(|_| PipelineError::ShuttingDown)?;

        let start = Instant::now();
        let workspace = self.workspaces.allocate().await?;
        info!(request_id = workspace.id(), "pipeline started");

        let result = self.run_stages(&workspace, bundle).await;

        if !self.options.keep_workspaces {
            if let Err(e) = workspace.cleanup().await {
                warn!(request_id = workspace.id(), error = %e, "workspace cleanup failed");
            }
        }

        match &result {
            Ok(results) => info!(
                request_id = workspace.id(),
                duration_ms = start.elapsed().as_millis() as u64,
                images = results.converted_images.len(),
                "pipeline completed"
            ),
            Err(e) => warn!(
                request_id = workspace.id(),
                stage = e.stage(),
                error = %e,
                "pipeline failed"
            ),
        }

        result
    }

    async fn run_stages(
        &self,
        workspace: &Workspace,
        bundle: ArtifactBundle,
    ) -> Result<OmrResults, PipelineError> {
        // Ingest: five artifacts to their deterministic paths.
        let ingested = self.ingestor.persist(workspace, &bundle).await?;

        // Rasterize: one JPEG per page, in source order, into the input area.
        let raster = self
            .rasterizer
            .rasterize(RasterJob {
                request_id: workspace.id().to_string(),
                document_path: ingested.scanned_document_path,
                output_dir: workspace.input_dir().to_path_buf(),
            })
            .await?;
        info!(
            request_id = workspace.id(),
            pages = raster.pages.len(),
            duration_ms = raster.duration_ms,
            "document rasterized"
        );

        // Invoke: single attempt, no retry.
        let outcome = self
            .engine
            .run(EngineInvocation {
                request_id: workspace.id().to_string(),
                input_dir: workspace.input_dir().to_path_buf(),
                output_dir: workspace.output_dir().to_path_buf(),
            })
            .await?;
        info!(
            request_id = workspace.id(),
            success = outcome.success,
            exit_code = ?outcome.exit_code,
            duration_ms = outcome.duration_ms,
            "engine run finished"
        );

        if self.options.fail_on_engine_error && !outcome.success {
            return Err(PipelineError::EngineFailed {
                exit_code: outcome.exit_code,
            });
        }

        // Collect: the engine may have partially succeeded, so collection
        // does not gate on its exit status.
        let results = self.collector.collect(workspace).await?;
        Ok(results)
    }
}
