//! Workspace allocation and lifecycle.

use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::error::WorkspaceError;

const INPUT_AREA: &str = "inputs";
const OUTPUT_AREA: &str = "outputs";

/// Allocates request-scoped workspaces under a common root.
#[derive(Debug, Clone)]
pub struct WorkspaceManager {
    root: PathBuf,
}

impl WorkspaceManager {
    /// Creates a manager rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the arena root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Allocates a fresh workspace keyed by a generated request id.
    ///
    /// Both areas exist and are empty when this returns.
    pub async fn allocate(&self) -> Result<Workspace, WorkspaceError> {
        let id = Uuid::new_v4().to_string();
        let workspace = Workspace::at(self.root.join(&id), id);
        workspace.reset().await?;
        Ok(workspace)
    }
}

/// A paired input/output exchange area for a single request.
#[derive(Debug, Clone)]
pub struct Workspace {
    id: String,
    base: PathBuf,
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl Workspace {
    fn at(base: PathBuf, id: String) -> Self {
        let input_dir = base.join(INPUT_AREA);
        let output_dir = base.join(OUTPUT_AREA);
        Self {
            id,
            base,
            input_dir,
            output_dir,
        }
    }

    /// The request id this workspace belongs to.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The input area, read by the external engine.
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// The output area, written by the external engine.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Clears and recreates both areas.
    ///
    /// Idempotent: absence of an area is not an error, and calling this twice
    /// in a row leaves both areas empty and present.
    pub async fn reset(&self) -> Result<(), WorkspaceError> {
        for dir in [&self.input_dir, &self.output_dir] {
            match tokio::fs::remove_dir_all(dir).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(WorkspaceError::ClearFailed {
                        path: dir.clone(),
                        source: e,
                    })
                }
            }
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| WorkspaceError::CreateFailed {
                    path: dir.clone(),
                    source: e,
                })?;
        }
        Ok(())
    }

    /// Removes the whole workspace. Absence is not an error.
    pub async fn cleanup(&self) -> Result<(), WorkspaceError> {
        match tokio::fs::remove_dir_all(&self.base).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(WorkspaceError::CleanupFailed {
                path: self.base.clone(),
                source: e,
            }),
        }
    }
}
