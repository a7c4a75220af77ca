//! Mock implementations for testing.
//!
//! Used by unit tests in this crate and the server's integration tests, so
//! the full pipeline can run without poppler or a real engine binary.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::engine::{EngineError, EngineInvocation, EngineOutcome, OmrEngine};
use crate::ingest::{ArtifactBundle, ScannedDocument};
use crate::rasterizer::{page_image_name, PageImage, RasterJob, RasterResult, Rasterizer, RasterizerError};

/// A rasterizer that writes a fixed number of placeholder page images.
pub struct MockRasterizer {
    pages: u32,
    fail: bool,
}

impl MockRasterizer {
    /// Renders the given number of pages for any document.
    pub fn with_pages(pages: u32) -> Self {
        Self { pages, fail: false }
    }

    /// Fails every rasterization as if the document were corrupt.
    pub fn failing() -> Self {
        Self {
            pages: 0,
            fail: true,
        }
    }
}

#[async_trait]
impl Rasterizer for MockRasterizer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn rasterize(&self, job: RasterJob) -> Result<RasterResult, RasterizerError> {
        if self.fail {
            return Err(RasterizerError::rasterization_failed(
                "mock rasterizer configured to fail",
                None,
            ));
        }

        let mut pages = Vec::with_capacity(self.pages as usize);
        for index in 1..=self.pages {
            let path = job.output_dir.join(page_image_name(index));
            tokio::fs::write(&path, format!("page {}", index)).await?;
            pages.push(PageImage { index, path });
        }

        Ok(RasterResult {
            pages,
            duration_ms: 0,
        })
    }

    async fn validate(&self) -> Result<(), RasterizerError> {
        Ok(())
    }
}

/// An engine that writes configured files into the output area.
pub struct MockEngine {
    outputs: Vec<(String, Vec<u8>)>,
    exit_code: i32,
    fail_to_start: bool,
    echo_input_images: bool,
    invocations: Arc<AtomicUsize>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            outputs: Vec::new(),
            exit_code: 0,
            fail_to_start: false,
            echo_input_images: false,
            invocations: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Adds a file the engine will write into the output area.
    pub fn with_output(mut self, name: &str, bytes: Vec<u8>) -> Self {
        self.outputs.push((name.to_string(), bytes));
        self
    }

    /// Sets the exit code the engine reports.
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    /// Fails as if the engine process could not be spawned.
    pub fn failing_to_start() -> Self {
        Self {
            fail_to_start: true,
            ..Self::new()
        }
    }

    /// Copies the rasterized page images from the input area into the output
    /// area, mimicking an engine that annotates every page.
    pub fn echoing_input_images(mut self) -> Self {
        self.echo_input_images = true;
        self
    }

    /// Shared counter of completed `run` calls.
    pub fn invocation_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.invocations)
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OmrEngine for MockEngine {
    fn name(&self) -> &str {
        "mock"
    }

    async fn run(&self, invocation: EngineInvocation) -> Result<EngineOutcome, EngineError> {
        if self.fail_to_start {
            return Err(EngineError::SpawnFailed {
                reason: "mock engine configured to fail".to_string(),
            });
        }

        self.invocations.fetch_add(1, Ordering::SeqCst);

        if self.echo_input_images {
            let mut entries = tokio::fs::read_dir(&invocation.input_dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let name = entry.file_name();
                let name = name.to_string_lossy();
                if name.starts_with("converted_page_") && name.ends_with(".jpg") {
                    tokio::fs::copy(entry.path(), invocation.output_dir.join(name.as_ref()))
                        .await?;
                }
            }
        }

        for (name, bytes) in &self.outputs {
            tokio::fs::write(invocation.output_dir.join(name), bytes).await?;
        }

        Ok(EngineOutcome {
            success: self.exit_code == 0,
            exit_code: Some(self.exit_code),
            duration_ms: 0,
            stderr_tail: None,
        })
    }

    async fn validate(&self) -> Result<(), EngineError> {
        Ok(())
    }
}

/// A complete, valid artifact bundle for tests.
pub fn sample_bundle() -> ArtifactBundle {
    ArtifactBundle {
        config: b"{\"pageDimensions\": [300, 400]}".to_vec(),
        evaluation: b"{\"marking\": {\"correct\": 1}}".to_vec(),
        template: b"{\"fieldBlocks\": {}}".to_vec(),
        marker: vec![0xff, 0xd8, 0xff, 0xd9],
        scanned_document: ScannedDocument {
            filename: "answers.pdf".to_string(),
            bytes: b"%PDF-1.4 sample".to_vec(),
        },
    }
}
