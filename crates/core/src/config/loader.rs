use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Environment variables prefixed with this override file settings, with `_`
/// separating nesting levels (`OPTISCAN_SERVER_PORT` -> `server.port`).
const ENV_PREFIX: &str = "OPTISCAN_";

/// Loads configuration from a TOML file, then applies environment overrides.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("_"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Parses configuration straight from a TOML string, without env overrides.
/// Test fixtures use this to build a config without touching the filesystem.
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
