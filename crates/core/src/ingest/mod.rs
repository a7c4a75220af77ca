//! Ingest module for persisting uploaded grading artifacts.
//!
//! The external engine locates its inputs by fixed names, so the
//! configuration, evaluation, template and marker uploads are written under
//! canonical filenames regardless of what the client called them. The scanned
//! document keeps its client-supplied name: it is looked up again by that name
//! for rasterization.

mod artifacts;
mod error;
mod types;

pub use artifacts::ArtifactIngestor;
pub use error::IngestError;
pub use types::{
    ArtifactBundle, IngestedArtifacts, ScannedDocument, CONFIG_FILE_NAME, EVALUATION_FILE_NAME,
    MARKER_FILE_NAME, TEMPLATE_FILE_NAME,
};
