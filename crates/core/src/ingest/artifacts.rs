//! Artifact persistence into the workspace input area.

use std::path::Path;
use tracing::debug;

use crate::workspace::Workspace;

use super::error::IngestError;
use super::types::{
    ArtifactBundle, IngestedArtifacts, CONFIG_FILE_NAME, EVALUATION_FILE_NAME, MARKER_FILE_NAME,
    TEMPLATE_FILE_NAME,
};

/// Writes the five required artifacts to their deterministic paths.
#[derive(Debug, Default, Clone)]
pub struct ArtifactIngestor;

impl ArtifactIngestor {
    pub fn new() -> Self {
        Self
    }

    /// Persists the bundle into the workspace input area.
    ///
    /// Fixed-name artifacts land at their canonical names; the scanned
    /// document keeps its client-supplied filename. A write error leaves the
    /// target absent or truncated and surfaces as `IngestError`.
    pub async fn persist(
        &self,
        workspace: &Workspace,
        bundle: &ArtifactBundle,
    ) -> Result<IngestedArtifacts, IngestError> {
        let input_dir = workspace.input_dir();

        write_artifact(&input_dir.join(CONFIG_FILE_NAME), &bundle.config).await?;
        write_artifact(&input_dir.join(EVALUATION_FILE_NAME), &bundle.evaluation).await?;
        write_artifact(&input_dir.join(TEMPLATE_FILE_NAME), &bundle.template).await?;
        write_artifact(&input_dir.join(MARKER_FILE_NAME), &bundle.marker).await?;

        let document_name = sanitize_filename(&bundle.scanned_document.filename)?;
        let document_path = input_dir.join(document_name);
        write_artifact(&document_path, &bundle.scanned_document.bytes).await?;

        debug!(
            workspace_id = workspace.id(),
            document = %document_path.display(),
            "ingested artifact bundle"
        );

        Ok(IngestedArtifacts {
            scanned_document_path: document_path,
        })
    }
}

async fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), IngestError> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| IngestError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Reduces a client-supplied filename to a plain file name component.
///
/// Rejects empty names and anything that resolves to a different directory.
fn sanitize_filename(name: &str) -> Result<&str, IngestError> {
    let candidate = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    if candidate.is_empty() || candidate != name {
        return Err(IngestError::InvalidDocumentName {
            name: name.to_string(),
        });
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ScannedDocument;
    use crate::workspace::WorkspaceManager;
    use tempfile::TempDir;

    fn bundle() -> ArtifactBundle {
        ArtifactBundle {
            config: b"{\"cols\": 4}".to_vec(),
            evaluation: b"{\"marking\": {}}".to_vec(),
            template: b"{\"bubbles\": []}".to_vec(),
            marker: vec![0xff, 0xd8, 0xff],
            scanned_document: ScannedDocument {
                filename: "answers.pdf".to_string(),
                bytes: b"%PDF-1.4".to_vec(),
            },
        }
    }

    #[tokio::test]
    async fn test_persist_writes_canonical_names() {
        let root = TempDir::new().unwrap();
        let workspace = WorkspaceManager::new(root.path()).allocate().await.unwrap();

        let ingested = ArtifactIngestor::new()
            .persist(&workspace, &bundle())
            .await
            .unwrap();

        let input = workspace.input_dir();
        for name in [
            CONFIG_FILE_NAME,
            EVALUATION_FILE_NAME,
            TEMPLATE_FILE_NAME,
            MARKER_FILE_NAME,
            "answers.pdf",
        ] {
            assert!(input.join(name).is_file(), "missing {}", name);
        }
        assert_eq!(ingested.scanned_document_path, input.join("answers.pdf"));
    }

    #[tokio::test]
    async fn test_persist_copies_bytes_exactly() {
        let root = TempDir::new().unwrap();
        let workspace = WorkspaceManager::new(root.path()).allocate().await.unwrap();

        ArtifactIngestor::new()
            .persist(&workspace, &bundle())
            .await
            .unwrap();

        let written = tokio::fs::read(workspace.input_dir().join(CONFIG_FILE_NAME))
            .await
            .unwrap();
        assert_eq!(written, b"{\"cols\": 4}");
    }

    #[tokio::test]
    async fn test_persist_rejects_path_traversal() {
        let root = TempDir::new().unwrap();
        let workspace = WorkspaceManager::new(root.path()).allocate().await.unwrap();

        let mut evil = bundle();
        evil.scanned_document.filename = "../escape.pdf".to_string();

        let result = ArtifactIngestor::new().persist(&workspace, &evil).await;
        assert!(matches!(
            result,
            Err(IngestError::InvalidDocumentName { .. })
        ));
    }

    #[tokio::test]
    async fn test_persist_rejects_empty_filename() {
        let root = TempDir::new().unwrap();
        let workspace = WorkspaceManager::new(root.path()).allocate().await.unwrap();

        let mut evil = bundle();
        evil.scanned_document.filename = String::new();

        let result = ArtifactIngestor::new().persist(&workspace, &evil).await;
        assert!(matches!(
            result,
            Err(IngestError::InvalidDocumentName { .. })
        ));
    }

    #[test]
    fn test_sanitize_filename_plain() {
        assert_eq!(sanitize_filename("scan.pdf").unwrap(), "scan.pdf");
    }

    #[test]
    fn test_sanitize_filename_nested_rejected() {
        assert!(sanitize_filename("a/b.pdf").is_err());
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename("/etc/passwd").is_err());
    }
}
