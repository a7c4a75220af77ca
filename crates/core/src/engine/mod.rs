//! Engine module for invoking the external OMR engine.
//!
//! This module provides the `OmrEngine` trait and a subprocess-based
//! implementation. The engine is an opaque collaborator: it is handed the
//! workspace input and output area paths, reads whatever artifacts are
//! present, and writes zero or more result artifacts. Its exit status is
//! recorded but, by default, does not gate result collection; the engine may
//! partially succeed.
//!
//! # Example
//!
//! ```ignore
//! use optiscan_core::engine::{EngineConfig, EngineInvocation, OmrEngine, ProcessEngine};
//!
//! let engine = ProcessEngine::new(EngineConfig::for_command("/opt/omr/engine"));
//! engine.validate().await?;
//!
//! let outcome = engine
//!     .run(EngineInvocation {
//!         request_id: "req-1".to_string(),
//!         input_dir: PathBuf::from("/work/inputs"),
//!         output_dir: PathBuf::from("/work/outputs"),
//!     })
//!     .await?;
//! println!("engine exited success={}", outcome.success);
//! ```

mod config;
mod error;
mod process;
mod traits;
mod types;

pub use config::EngineConfig;
pub use error::EngineError;
pub use process::ProcessEngine;
pub use traits::OmrEngine;
pub use types::{EngineInvocation, EngineOutcome};
