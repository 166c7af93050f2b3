//! Worker layer: inter-thread message types for the background export runner.

pub mod runner;

use crate::types::DocumentFormat;
use serde::Serialize;
use std::path::PathBuf;

/// Commands sent from the UI thread to the export runner.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExportJob {
    Document {
        client: String,
        stem: String,
        format: DocumentFormat,
    },
    Bundle {
        client: String,
    },
}

impl ExportJob {
    pub fn is_bundle(&self) -> bool {
        matches!(self, ExportJob::Bundle { .. })
    }
}

/// A job tagged with the demo session it was requested in.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRequest {
    pub generation: u64,
    #[serde(flatten)]
    pub job: ExportJob,
}

/// Results sent from the export runner back to the UI thread.
#[derive(Debug)]
pub struct ExportEvent {
    /// Copied from the originating [`ExportRequest`].
    pub generation: u64,
    pub job: ExportJob,
    /// Saved path, or the rendered error message.
    pub result: Result<PathBuf, String>,
}
