pub mod collector;
pub mod config;
pub mod engine;
pub mod ingest;
pub mod orchestrator;
pub mod rasterizer;
pub mod testing;
pub mod workspace;

pub use collector::{CollectorError, OmrResults, ResultCollector, RESULTS_FILE_NAME, SCORE_FILE_NAME};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, PipelineConfig,
    SanitizedConfig, ServerConfig, WorkspaceConfig,
};
pub use engine::{EngineConfig, EngineError, EngineInvocation, EngineOutcome, OmrEngine, ProcessEngine};
pub use ingest::{
    ArtifactBundle, ArtifactIngestor, IngestError, IngestedArtifacts, ScannedDocument,
    CONFIG_FILE_NAME, EVALUATION_FILE_NAME, MARKER_FILE_NAME, TEMPLATE_FILE_NAME,
};
pub use orchestrator::{OmrOrchestrator, OrchestratorOptions, PipelineError};
pub use rasterizer::{
    PdftoppmRasterizer, Rasterizer, RasterizerConfig, RasterizerError, RasterJob, RasterResult,
};
pub use workspace::{Workspace, WorkspaceError, WorkspaceManager};
