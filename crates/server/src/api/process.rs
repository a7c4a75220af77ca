use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use optiscan_core::{ArtifactBundle, OmrResults, PipelineError, ScannedDocument};

use crate::state::AppState;

/// Multipart field names the endpoint requires.
const PART_CONFIG: &str = "config";
const PART_EVALUATION: &str = "evaluation";
const PART_TEMPLATE: &str = "template";
const PART_MARKER: &str = "omr_marker";
const PART_DOCUMENT: &str = "pdf_file";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// POST /api/v1/process-omr
///
/// Accepts the five required form parts, runs the pipeline, and returns the
/// aggregated result payload. A missing or unreadable part is rejected before
/// the pipeline is entered, so an incomplete submission never reaches the
/// engine.
pub async fn process_omr(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<OmrResults>, ApiError> {
    let bundle = parse_bundle(multipart).await?;

    match state.orchestrator().process(bundle).await {
        Ok(results) => Ok(Json(results)),
        Err(e) => Err((
            status_for(&e),
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

async fn parse_bundle(mut multipart: Multipart) -> Result<ArtifactBundle, ApiError> {
    let mut config: Option<Vec<u8>> = None;
    let mut evaluation: Option<Vec<u8>> = None;
    let mut template: Option<Vec<u8>> = None;
    let mut marker: Option<Vec<u8>> = None;
    let mut document: Option<ScannedDocument> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Malformed multipart request: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            PART_CONFIG => config = Some(read_part(&name, field).await?),
            PART_EVALUATION => evaluation = Some(read_part(&name, field).await?),
            PART_TEMPLATE => template = Some(read_part(&name, field).await?),
            PART_MARKER => marker = Some(read_part(&name, field).await?),
            PART_DOCUMENT => {
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .ok_or_else(|| bad_request("Part 'pdf_file' has no filename"))?;
                let bytes = read_part(&name, field).await?;
                document = Some(ScannedDocument { filename, bytes });
            }
            other => {
                debug!(part = other, "ignoring unknown multipart field");
            }
        }
    }

    let mut missing = Vec::new();
    if config.is_none() {
        missing.push(PART_CONFIG);
    }
    if evaluation.is_none() {
        missing.push(PART_EVALUATION);
    }
    if template.is_none() {
        missing.push(PART_TEMPLATE);
    }
    if marker.is_none() {
        missing.push(PART_MARKER);
    }
    if document.is_none() {
        missing.push(PART_DOCUMENT);
    }
    if !missing.is_empty() {
        return Err(bad_request(format!(
            "Missing required parts: {}",
            missing.join(", ")
        )));
    }

    // All five checked above.
    Ok(ArtifactBundle {
        config: config.unwrap(),
        evaluation: evaluation.unwrap(),
        template: template.unwrap(),
        marker: marker.unwrap(),
        scanned_document: document.unwrap(),
    })
}

async fn read_part(name: &str, field: axum::extract::multipart::Field<'_>) -> Result<Vec<u8>, ApiError> {
    field
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| bad_request(format!("Failed to read part '{}': {}", name, e)))
}

fn status_for(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::Ingest(_) => StatusCode::BAD_REQUEST,
        PipelineError::Rasterize(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::Workspace(_)
        | PipelineError::Engine(_)
        | PipelineError::EngineFailed { .. }
        | PipelineError::Collect(_) => StatusCode::INTERNAL_SERVER_ERROR,
        PipelineError::ShuttingDown => StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optiscan_core::{
        CollectorError, EngineError, IngestError, RasterizerError, WorkspaceError,
    };
    use std::path::PathBuf;

    #[test]
    fn test_status_for_ingest_is_bad_request() {
        let err = PipelineError::Ingest(IngestError::InvalidDocumentName {
            name: "../x".to_string(),
        });
        assert_eq!(status_for(&err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_for_rasterize_is_unprocessable() {
        let err = PipelineError::Rasterize(RasterizerError::rasterization_failed("bad pdf", None));
        assert_eq!(status_for(&err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_status_for_engine_errors_are_internal() {
        let spawn = PipelineError::Engine(EngineError::SpawnFailed {
            reason: "boom".to_string(),
        });
        assert_eq!(status_for(&spawn), StatusCode::INTERNAL_SERVER_ERROR);

        let timeout = PipelineError::Engine(EngineError::Timeout { timeout_secs: 1 });
        assert_eq!(status_for(&timeout), StatusCode::INTERNAL_SERVER_ERROR);

        let exit = PipelineError::EngineFailed { exit_code: Some(2) };
        assert_eq!(status_for(&exit), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_status_for_workspace_and_collect_are_internal() {
        let ws = PipelineError::Workspace(WorkspaceError::CreateFailed {
            path: PathBuf::from("/x"),
            source: std::io::Error::other("denied"),
        });
        assert_eq!(status_for(&ws), StatusCode::INTERNAL_SERVER_ERROR);

        let collect = PipelineError::Collect(CollectorError::ResultsParse {
            path: PathBuf::from("/x/read_response.json"),
            reason: "eof".to_string(),
        });
        assert_eq!(status_for(&collect), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
