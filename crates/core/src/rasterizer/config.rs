//! Configuration for the rasterizer module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the pdftoppm-based rasterizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterizerConfig {
    /// Path to the pdftoppm binary.
    #[serde(default = "default_pdftoppm_path")]
    pub pdftoppm_path: PathBuf,

    /// Render resolution in DPI.
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// Timeout for rendering a single document in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_pdftoppm_path() -> PathBuf {
    PathBuf::from("pdftoppm")
}

fn default_dpi() -> u32 {
    150
}

fn default_timeout() -> u64 {
    120
}

impl Default for RasterizerConfig {
    fn default() -> Self {
        Self {
            pdftoppm_path: default_pdftoppm_path(),
            dpi: default_dpi(),
            timeout_secs: default_timeout(),
        }
    }
}

impl RasterizerConfig {
    /// Creates a config with a custom pdftoppm path.
    pub fn with_path(pdftoppm_path: PathBuf) -> Self {
        Self {
            pdftoppm_path,
            ..Default::default()
        }
    }

    /// Sets the render resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Sets the timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
