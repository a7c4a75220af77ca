//! Configuration for the engine module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the subprocess-based engine invoker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The engine executable (e.g. `python3` or a bundled binary).
    pub command: PathBuf,

    /// Arguments placed before `--inputDir`/`--outputDir` (e.g. a script path).
    #[serde(default)]
    pub args: Vec<String>,

    /// Timeout for one engine run in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Treat a non-zero engine exit as a pipeline failure instead of
    /// collecting whatever the engine managed to produce.
    #[serde(default)]
    pub fail_on_engine_error: bool,
}

fn default_timeout() -> u64 {
    600
}

impl EngineConfig {
    /// Creates a config for the given executable with defaults.
    pub fn for_command(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            timeout_secs: default_timeout(),
            fail_on_engine_error: false,
        }
    }

    /// Sets leading arguments (before the directory flags).
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Sets the timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_command_defaults() {
        let config = EngineConfig::for_command("/opt/omr/engine");
        assert_eq!(config.command, PathBuf::from("/opt/omr/engine"));
        assert!(config.args.is_empty());
        assert_eq!(config.timeout_secs, 600);
        assert!(!config.fail_on_engine_error);
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::for_command("python3")
            .with_args(vec!["main.py".to_string()])
            .with_timeout(120);
        assert_eq!(config.args, vec!["main.py".to_string()]);
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_deserialize_requires_command() {
        let result: Result<EngineConfig, _> = toml::from_str("timeout_secs = 10");
        assert!(result.is_err());
    }
}
