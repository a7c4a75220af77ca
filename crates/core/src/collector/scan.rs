//! Output-area scanning and result assembly.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::workspace::Workspace;

use super::error::CollectorError;
use super::types::{OmrResults, RESULTS_FILE_NAME, SCORE_FILE_NAME};

/// Image extensions the engine is known to emit.
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Assembles the response payload from whatever the engine wrote.
#[derive(Debug, Default, Clone)]
pub struct ResultCollector;

impl ResultCollector {
    pub fn new() -> Self {
        Self
    }

    /// Collects results from the workspace output area.
    pub async fn collect(&self, workspace: &Workspace) -> Result<OmrResults, CollectorError> {
        let results = self.collect_from(workspace.output_dir()).await?;
        debug!(
            workspace_id = workspace.id(),
            images = results.converted_images.len(),
            has_read_response = results.read_response.is_some(),
            has_score = results.score.is_some(),
            "collected engine results"
        );
        Ok(results)
    }

    /// Collects results from an arbitrary output directory.
    pub async fn collect_from(&self, output_dir: &Path) -> Result<OmrResults, CollectorError> {
        let converted_images = scan_images(output_dir).await?;
        let read_response = read_results_document(&output_dir.join(RESULTS_FILE_NAME)).await?;
        let score = read_score(&output_dir.join(SCORE_FILE_NAME)).await?;

        Ok(OmrResults {
            converted_images,
            read_response,
            score,
        })
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.iter().any(|known| e.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Lists image files in name order.
async fn scan_images(output_dir: &Path) -> Result<Vec<String>, CollectorError> {
    let mut entries =
        tokio::fs::read_dir(output_dir)
            .await
            .map_err(|e| CollectorError::ScanFailed {
                path: output_dir.to_path_buf(),
                source: e,
            })?;

    let mut images: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| CollectorError::ScanFailed {
            path: output_dir.to_path_buf(),
            source: e,
        })?
    {
        let path = entry.path();
        if path.is_file() && is_image(&path) {
            images.push(path);
        }
    }

    images.sort();
    Ok(images
        .into_iter()
        .map(|p| p.to_string_lossy().to_string())
        .collect())
}

async fn read_results_document(path: &Path) -> Result<Option<Value>, CollectorError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(CollectorError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let value = serde_json::from_slice(&bytes).map_err(|e| CollectorError::ResultsParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(Some(value))
}

async fn read_score(path: &Path) -> Result<Option<String>, CollectorError> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Some(text.trim().to_string())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CollectorError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_collect_empty_output_area() {
        let dir = TempDir::new().unwrap();
        let results = ResultCollector::new().collect_from(dir.path()).await.unwrap();

        assert!(results.converted_images.is_empty());
        assert!(results.read_response.is_none());
        assert!(results.score.is_none());
    }

    #[tokio::test]
    async fn test_collect_score_only() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join(SCORE_FILE_NAME), "  8/10\n")
            .await
            .unwrap();

        let results = ResultCollector::new().collect_from(dir.path()).await.unwrap();

        assert_eq!(results.score.as_deref(), Some("8/10"));
        assert!(results.read_response.is_none());
        assert!(results.converted_images.is_empty());
    }

    #[tokio::test]
    async fn test_collect_all_categories() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join("marked_sheet.jpg"), b"jpg")
            .await
            .unwrap();
        tokio::fs::write(
            dir.path().join(RESULTS_FILE_NAME),
            serde_json::to_vec(&json!({"score": 8})).unwrap(),
        )
        .await
        .unwrap();
        tokio::fs::write(dir.path().join(SCORE_FILE_NAME), "8/10")
            .await
            .unwrap();

        let results = ResultCollector::new().collect_from(dir.path()).await.unwrap();

        assert_eq!(results.converted_images.len(), 1);
        assert!(results.converted_images[0].ends_with("marked_sheet.jpg"));
        assert_eq!(results.read_response, Some(json!({"score": 8})));
        assert_eq!(results.score.as_deref(), Some("8/10"));
    }

    #[tokio::test]
    async fn test_collect_images_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in ["b.jpg", "a.PNG", "c.jpeg", "notes.txt", "data.csv"] {
            tokio::fs::write(dir.path().join(name), b"x").await.unwrap();
        }

        let results = ResultCollector::new().collect_from(dir.path()).await.unwrap();

        let names: Vec<&str> = results
            .converted_images
            .iter()
            .map(|p| Path::new(p).file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.PNG", "b.jpg", "c.jpeg"]);
    }

    #[tokio::test]
    async fn test_collect_corrupt_results_document_is_error() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join(RESULTS_FILE_NAME), b"{not json")
            .await
            .unwrap();

        let result = ResultCollector::new().collect_from(dir.path()).await;
        assert!(matches!(result, Err(CollectorError::ResultsParse { .. })));
    }

    #[tokio::test]
    async fn test_collect_missing_output_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");

        let result = ResultCollector::new().collect_from(&missing).await;
        assert!(matches!(result, Err(CollectorError::ScanFailed { .. })));
    }
}
