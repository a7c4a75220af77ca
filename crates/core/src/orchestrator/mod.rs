//! Orchestrator module sequencing the request pipeline.
//!
//! One request flows linearly through reset → ingest → rasterize → invoke →
//! collect. Every stage is a precondition for the next; a fatal stage error
//! aborts the pipeline immediately and there is no retry anywhere. Whatever
//! happens, the caller gets either a result payload or an explicit error.

mod error;
mod runner;

pub use error::PipelineError;
pub use runner::{OmrOrchestrator, OrchestratorOptions};
