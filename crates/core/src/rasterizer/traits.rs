//! Trait definitions for the rasterizer module.

use async_trait::async_trait;

use super::error::RasterizerError;
use super::types::{RasterJob, RasterResult};

/// A rasterizer that can render a multi-page document into page images.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    /// Returns the name of this rasterizer implementation.
    fn name(&self) -> &str;

    /// Renders the document into ordered page images.
    ///
    /// On success the result holds exactly N pages with indexes 1..=N
    /// matching source page order. A document that cannot be rendered is an
    /// error; a partial page set is never returned.
    async fn rasterize(&self, job: RasterJob) -> Result<RasterResult, RasterizerError>;

    /// Validates that the rasterizer is properly configured and ready.
    async fn validate(&self) -> Result<(), RasterizerError>;
}
