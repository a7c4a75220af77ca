//! Trait definitions for the engine module.

use async_trait::async_trait;

use super::error::EngineError;
use super::types::{EngineInvocation, EngineOutcome};

/// A batch processor that reads a workspace input area and writes results
/// into the output area.
///
/// Swapping the implementation (subprocess, in-process mock, remote worker)
/// requires no orchestrator change.
#[async_trait]
pub trait OmrEngine: Send + Sync {
    /// Returns the name of this engine implementation.
    fn name(&self) -> &str;

    /// Runs the engine to completion against the given workspace areas.
    ///
    /// Returns an `EngineOutcome` whenever the engine terminated, including
    /// failure exits; errors mean the engine could not be run at all.
    async fn run(&self, invocation: EngineInvocation) -> Result<EngineOutcome, EngineError>;

    /// Validates that the engine is properly configured and ready.
    async fn validate(&self) -> Result<(), EngineError>;
}
