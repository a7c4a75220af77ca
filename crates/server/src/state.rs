use optiscan_core::{Config, OmrOrchestrator, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    orchestrator: OmrOrchestrator,
}

impl AppState {
    pub fn new(config: Config, orchestrator: OmrOrchestrator) -> Self {
        Self {
            config,
            orchestrator,
        }
    }

    pub fn orchestrator(&self) -> &OmrOrchestrator {
        &self.orchestrator
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.config.server.max_upload_bytes
    }
}
