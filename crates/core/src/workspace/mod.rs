//! Workspace module for request-scoped engine exchange areas.
//!
//! Each request gets its own workspace: a uniquely-named directory holding an
//! `inputs/` and an `outputs/` area. The input area is populated with the
//! uploaded artifacts and rasterized pages, the external engine writes its
//! results into the output area, and the whole workspace is removed when the
//! request completes.

mod arena;
mod error;

pub use arena::{Workspace, WorkspaceManager};
pub use error::WorkspaceError;
