use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Engine section exists (enforced by serde)
/// - Server port is not 0
/// - Engine command is not empty
/// - Pipeline concurrency is at least 1
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.engine.command.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "engine.command cannot be empty".to_string(),
        ));
    }

    if config.pipeline.max_concurrent_requests == 0 {
        return Err(ConfigError::ValidationError(
            "pipeline.max_concurrent_requests cannot be 0".to_string(),
        ));
    }

    if config.rasterizer.dpi == 0 {
        return Err(ConfigError::ValidationError(
            "rasterizer.dpi cannot be 0".to_string(),
        ));
    }

    Ok(())
}
