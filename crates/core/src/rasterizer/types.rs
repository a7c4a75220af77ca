//! Types for the rasterizer module.

use std::path::PathBuf;

/// A single rasterization request.
#[derive(Debug, Clone)]
pub struct RasterJob {
    /// Request id, used for logging.
    pub request_id: String,
    /// The previously ingested scanned document.
    pub document_path: PathBuf,
    /// Directory the page images are written into.
    pub output_dir: PathBuf,
}

/// One rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// 1-based page index matching source page order.
    pub index: u32,
    pub path: PathBuf,
}

/// The ordered page set produced from one document.
#[derive(Debug, Clone)]
pub struct RasterResult {
    /// Pages in strictly increasing index order, 1..=N.
    pub pages: Vec<PageImage>,
    pub duration_ms: u64,
}

/// Final name of a rendered page file.
pub fn page_image_name(index: u32) -> String {
    format!("converted_page_{}.jpg", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_image_name() {
        assert_eq!(page_image_name(1), "converted_page_1.jpg");
        assert_eq!(page_image_name(12), "converted_page_12.jpg");
    }
}
