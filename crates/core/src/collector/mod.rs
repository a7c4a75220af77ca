//! Collector module for gathering engine results from the output area.
//!
//! After the engine has run, the output area may hold any subset of: image
//! files (any name), a structured results document at `read_response.json`,
//! and a plain-text score at `score.txt`. Each category is independently
//! optional; the collector reports exactly what exists and never fabricates
//! placeholder values.

mod error;
mod scan;
mod types;

pub use error::CollectorError;
pub use scan::ResultCollector;
pub use types::{OmrResults, RESULTS_FILE_NAME, SCORE_FILE_NAME};
