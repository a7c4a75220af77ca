//! Types for the ingest module.

use std::path::PathBuf;

/// Canonical name the engine expects for the grading configuration.
pub const CONFIG_FILE_NAME: &str = "config.json";
/// Canonical name the engine expects for the evaluation rules.
pub const EVALUATION_FILE_NAME: &str = "evaluation.json";
/// Canonical name the engine expects for the template definition.
pub const TEMPLATE_FILE_NAME: &str = "template.json";
/// Canonical name the engine expects for the reference marker image.
pub const MARKER_FILE_NAME: &str = "omr_marker.jpg";

/// The scanned answer-sheet document as uploaded.
#[derive(Debug, Clone)]
pub struct ScannedDocument {
    /// Client-supplied filename, preserved so the document can be re-located
    /// for rasterization.
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// The five required upload payloads for one request.
///
/// Construction requires all five; a partial submission never reaches the
/// pipeline.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub config: Vec<u8>,
    pub evaluation: Vec<u8>,
    pub template: Vec<u8>,
    pub marker: Vec<u8>,
    pub scanned_document: ScannedDocument,
}

/// Where the ingested artifacts ended up.
#[derive(Debug, Clone)]
pub struct IngestedArtifacts {
    /// Path of the scanned document inside the input area.
    pub scanned_document_path: PathBuf,
}
