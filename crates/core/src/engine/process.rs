//! Subprocess-based engine implementation.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

use super::config::EngineConfig;
use super::error::EngineError;
use super::traits::OmrEngine;
use super::types::{EngineInvocation, EngineOutcome};

/// How much of the engine's stderr is kept for diagnostics.
const STDERR_TAIL_BYTES: usize = 2048;

/// Engine invoker that spawns the configured command as a child process.
pub struct ProcessEngine {
    config: EngineConfig,
}

impl ProcessEngine {
    /// Creates a new process engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Builds the full argument list for one invocation.
    fn build_args(&self, invocation: &EngineInvocation) -> Vec<String> {
        let mut args = self.config.args.clone();
        args.extend([
            "--inputDir".to_string(),
            invocation.input_dir.to_string_lossy().to_string(),
            "--outputDir".to_string(),
            invocation.output_dir.to_string_lossy().to_string(),
        ]);
        args
    }
}

fn stderr_tail(stderr: &[u8]) -> Option<String> {
    if stderr.is_empty() {
        return None;
    }
    let text = String::from_utf8_lossy(stderr).into_owned();
    let tail = if text.len() > STDERR_TAIL_BYTES {
        let cut = text.len() - STDERR_TAIL_BYTES;
        // Don't split a UTF-8 character.
        let cut = (cut..text.len()).find(|i| text.is_char_boundary(*i)).unwrap_or(cut);
        &text[cut..]
    } else {
        text.as_str()
    };
    Some(tail.to_string())
}

#[async_trait]
impl OmrEngine for ProcessEngine {
    fn name(&self) -> &str {
        "process"
    }

    async fn run(&self, invocation: EngineInvocation) -> Result<EngineOutcome, EngineError> {
        let start = Instant::now();
        let args = self.build_args(&invocation);

        debug!(
            request_id = %invocation.request_id,
            command = %self.config.command.display(),
            "spawning engine process"
        );

        let child = Command::new(&self.config.command)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    EngineError::EngineNotFound {
                        path: self.config.command.clone(),
                    }
                } else {
                    EngineError::SpawnFailed {
                        reason: e.to_string(),
                    }
                }
            })?;

        let timeout_duration = Duration::from_secs(self.config.timeout_secs);
        let output = timeout(timeout_duration, child.wait_with_output())
            .await
            .map_err(|_| EngineError::Timeout {
                timeout_secs: self.config.timeout_secs,
            })?
            .map_err(EngineError::Io)?;

        let outcome = EngineOutcome {
            success: output.status.success(),
            exit_code: output.status.code(),
            duration_ms: start.elapsed().as_millis() as u64,
            stderr_tail: stderr_tail(&output.stderr),
        };

        if !outcome.success {
            warn!(
                request_id = %invocation.request_id,
                exit_code = ?outcome.exit_code,
                stderr = outcome.stderr_tail.as_deref().unwrap_or(""),
                "engine exited with failure status"
            );
        }

        Ok(outcome)
    }

    async fn validate(&self) -> Result<(), EngineError> {
        if self.config.command.is_absolute() && !self.config.command.exists() {
            return Err(EngineError::EngineNotFound {
                path: self.config.command.clone(),
            });
        }
        Ok(())
    }
}
