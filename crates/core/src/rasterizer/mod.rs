//! Rasterizer module for rendering scanned documents into page images.
//!
//! This module provides the `Rasterizer` trait and a poppler `pdftoppm` based
//! implementation that renders one JPEG per page of the scanned PDF into the
//! workspace input area. Page files are named with a 1-based index
//! (`converted_page_1.jpg`, `converted_page_2.jpg`, ...) so the external
//! engine sees them in source page order.
//!
//! # Example
//!
//! ```ignore
//! use optiscan_core::rasterizer::{PdftoppmRasterizer, Rasterizer, RasterJob};
//!
//! let rasterizer = PdftoppmRasterizer::with_defaults();
//! rasterizer.validate().await?;
//!
//! let result = rasterizer
//!     .rasterize(RasterJob {
//!         request_id: "req-1".to_string(),
//!         document_path: PathBuf::from("/work/inputs/answers.pdf"),
//!         output_dir: PathBuf::from("/work/inputs"),
//!     })
//!     .await?;
//! println!("Rendered {} pages", result.pages.len());
//! ```

mod config;
mod error;
mod pdftoppm;
mod traits;
mod types;

pub use config::RasterizerConfig;
pub use error::RasterizerError;
pub use pdftoppm::PdftoppmRasterizer;
pub use traits::Rasterizer;
pub use types::{page_image_name, PageImage, RasterJob, RasterResult};
