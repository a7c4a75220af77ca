//! pdftoppm-based rasterizer implementation.

use async_trait::async_trait;
use regex_lite::Regex;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::debug;

use super::config::RasterizerConfig;
use super::error::RasterizerError;
use super::traits::Rasterizer;
use super::types::{page_image_name, PageImage, RasterJob, RasterResult};

/// Prefix passed to pdftoppm; raw pages come out as `raster-<N>.jpg`.
const RASTER_PREFIX: &str = "raster";

/// Rasterizer shelling out to poppler's pdftoppm.
pub struct PdftoppmRasterizer {
    config: RasterizerConfig,
}

impl PdftoppmRasterizer {
    /// Creates a new rasterizer with the given configuration.
    pub fn new(config: RasterizerConfig) -> Self {
        Self { config }
    }

    /// Creates a rasterizer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RasterizerConfig::default())
    }

    /// Builds pdftoppm arguments for rendering a document.
    fn build_args(&self, document_path: &Path, prefix: &Path) -> Vec<String> {
        vec![
            "-jpeg".to_string(),
            "-r".to_string(),
            self.config.dpi.to_string(),
            document_path.to_string_lossy().to_string(),
            prefix.to_string_lossy().to_string(),
        ]
    }

    async fn run_pdftoppm(&self, job: &RasterJob) -> Result<(), RasterizerError> {
        let prefix = job.output_dir.join(RASTER_PREFIX);
        let args = self.build_args(&job.document_path, &prefix);

        let child = Command::new(&self.config.pdftoppm_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RasterizerError::PdftoppmNotFound {
                        path: self.config.pdftoppm_path.clone(),
                    }
                } else {
                    RasterizerError::Io(e)
                }
            })?;

        let timeout_duration = Duration::from_secs(self.config.timeout_secs);
        let output = timeout(timeout_duration, child.wait_with_output())
            .await
            .map_err(|_| RasterizerError::Timeout {
                timeout_secs: self.config.timeout_secs,
            })?
            .map_err(RasterizerError::Io)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RasterizerError::rasterization_failed(
                format!("pdftoppm exited with code: {:?}", output.status.code()),
                if stderr.is_empty() {
                    None
                } else {
                    Some(stderr.to_string())
                },
            ));
        }

        Ok(())
    }
}

/// Parses the pdftoppm page index out of a raw output file name.
///
/// pdftoppm zero-pads indexes depending on the page count, so `raster-01.jpg`
/// and `raster-1.jpg` both map to page 1.
fn raw_page_index(file_name: &str) -> Option<u32> {
    let re = Regex::new(r"^raster-(\d+)\.jpg$").ok()?;
    let caps = re.captures(file_name)?;
    caps.get(1)?.as_str().parse::<u32>().ok()
}

/// Renames the raw pdftoppm output into the canonical ordered page names.
///
/// Raw pages are sorted by their source page index and renamed to
/// `converted_page_{i}.jpg` with i = 1..=N, so lexicographic padding quirks of
/// pdftoppm never leak into the engine contract.
async fn finalize_pages(dir: &Path) -> Result<Vec<PageImage>, RasterizerError> {
    let mut raw_pages: Vec<(u32, PathBuf)> = Vec::new();

    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        if let Some(index) = name.to_str().and_then(raw_page_index) {
            raw_pages.push((index, entry.path()));
        }
    }

    raw_pages.sort_by_key(|(index, _)| *index);

    let mut pages = Vec::with_capacity(raw_pages.len());
    for (position, (_, raw_path)) in raw_pages.into_iter().enumerate() {
        let index = position as u32 + 1;
        let final_path = dir.join(page_image_name(index));
        tokio::fs::rename(&raw_path, &final_path).await?;
        pages.push(PageImage {
            index,
            path: final_path,
        });
    }

    Ok(pages)
}

#[async_trait]
impl Rasterizer for PdftoppmRasterizer {
    fn name(&self) -> &str {
        "pdftoppm"
    }

    async fn rasterize(&self, job: RasterJob) -> Result<RasterResult, RasterizerError> {
        let start = Instant::now();

        if !job.document_path.exists() {
            return Err(RasterizerError::DocumentNotFound {
                path: job.document_path.clone(),
            });
        }

        self.run_pdftoppm(&job).await?;

        let pages = finalize_pages(&job.output_dir).await?;
        if pages.is_empty() {
            return Err(RasterizerError::NoPages {
                path: job.document_path.clone(),
            });
        }

        debug!(
            request_id = %job.request_id,
            pages = pages.len(),
            "rasterized document"
        );

        Ok(RasterResult {
            pages,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    async fn validate(&self) -> Result<(), RasterizerError> {
        let result = Command::new(&self.config.pdftoppm_path)
            .arg("-v")
            .output()
            .await;

        if let Err(e) = result {
            if e.kind() == std::io::ErrorKind::NotFound {
                return Err(RasterizerError::PdftoppmNotFound {
                    path: self.config.pdftoppm_path.clone(),
                });
            }
            return Err(RasterizerError::Io(e));
        }

        Ok(())
    }
}
