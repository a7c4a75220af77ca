use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::engine::EngineConfig;
use crate::rasterizer::RasterizerConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub engine: EngineConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub rasterizer: RasterizerConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on the full multipart request body in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    50 * 1024 * 1024
}

/// Workspace arena configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkspaceConfig {
    /// Root directory under which per-request workspaces are created.
    #[serde(default = "default_workspace_root")]
    pub root: PathBuf,
    /// Skip cleanup-on-completion, leaving workspaces behind for inspection.
    #[serde(default)]
    pub keep_workspaces: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: default_workspace_root(),
            keep_workspaces: false,
        }
    }
}

fn default_workspace_root() -> PathBuf {
    std::env::temp_dir().join("optiscan")
}

/// Pipeline admission configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Maximum requests processed concurrently. Each request gets its own
    /// workspace so this only bounds engine/rasterizer load, not correctness.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_requests: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrent_requests: default_max_concurrent(),
        }
    }
}

fn default_max_concurrent() -> usize {
    1
}

/// Sanitized config for API responses (engine argv redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub workspace: WorkspaceConfig,
    pub rasterizer: RasterizerConfig,
    pub engine: SanitizedEngineConfig,
    pub pipeline: PipelineConfig,
}

/// Engine config as exposed over HTTP (only the binary name, not its argv)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedEngineConfig {
    pub command: String,
    pub timeout_secs: u64,
    pub fail_on_engine_error: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            workspace: config.workspace.clone(),
            rasterizer: config.rasterizer.clone(),
            engine: SanitizedEngineConfig {
                command: config.engine.command.display().to_string(),
                timeout_secs: config.engine.timeout_secs,
                fail_on_engine_error: config.engine.fail_on_engine_error,
            },
            pipeline: config.pipeline.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let toml = r#"
[engine]
command = "/opt/omr/engine"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.engine.command, PathBuf::from("/opt/omr/engine"));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.pipeline.max_concurrent_requests, 1);
        assert!(!config.workspace.keep_workspaces);
    }

    #[test]
    fn test_deserialize_missing_engine_fails() {
        let toml = r#"
[server]
port = 8080
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[engine]
command = "python3"
args = ["main.py"]
timeout_secs = 300
fail_on_engine_error = true

[server]
host = "127.0.0.1"
port = 9000
max_upload_bytes = 1048576

[workspace]
root = "/var/lib/optiscan"
keep_workspaces = true

[rasterizer]
dpi = 200

[pipeline]
max_concurrent_requests = 4
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.engine.args, vec!["main.py".to_string()]);
        assert_eq!(config.engine.timeout_secs, 300);
        assert!(config.engine.fail_on_engine_error);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.max_upload_bytes, 1048576);
        assert_eq!(config.workspace.root, PathBuf::from("/var/lib/optiscan"));
        assert!(config.workspace.keep_workspaces);
        assert_eq!(config.rasterizer.dpi, 200);
        assert_eq!(config.pipeline.max_concurrent_requests, 4);
    }

    #[test]
    fn test_sanitized_config_hides_argv() {
        let toml = r#"
[engine]
command = "/opt/omr/engine"
args = ["--secret-flag", "xyz"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let sanitized = SanitizedConfig::from(&config);
        assert_eq!(sanitized.engine.command, "/opt/omr/engine");
        let json = serde_json::to_value(&sanitized).unwrap();
        assert!(json["engine"].get("args").is_none());
    }
}
