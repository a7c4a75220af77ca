//! Types for the collector module.

use serde::Serialize;
use serde_json::Value;

/// Well-known name of the structured results document.
pub const RESULTS_FILE_NAME: &str = "read_response.json";
/// Well-known name of the plain-text score file.
pub const SCORE_FILE_NAME: &str = "score.txt";

/// The aggregated response payload for one request.
///
/// All three fields are independently optional: the engine may legitimately
/// produce any subset of them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OmrResults {
    /// Server-local paths of engine-produced images, in name order.
    pub converted_images: Vec<String>,
    /// Parsed contents of `read_response.json`, if present.
    pub read_response: Option<Value>,
    /// Whitespace-trimmed contents of `score.txt`, if present.
    pub score: Option<String>,
}
