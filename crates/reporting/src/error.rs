//! Failure taxonomy of the report pipeline.

use std::path::PathBuf;

use thiserror::Error;

use facturas_infra::StoreError;

use crate::orchestrator::ReportStage;

/// Document construction failed.
///
/// Rendering has no IO side effects, so the only failure surface is document
/// assembly itself. Records reaching the renderer are already validated at
/// the ingestion boundary.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("built-in font unavailable: {0}")]
    Font(String),

    #[error("document serialization failed: {0}")]
    Assembly(String),
}

/// Persisting the rendered report to the artifact directory failed.
#[derive(Debug, Error)]
#[error("artifact write to {} failed: {source}", path.display())]
pub struct PersistError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Unified pipeline failure, one variant per stage that can fail.
///
/// Every variant is caught at the orchestrator boundary, logged with its
/// diagnostic detail, and collapsed by the HTTP layer into one generic
/// failure response; nothing here is ever serialized to a caller.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("record retrieval failed: {0}")]
    Store(#[from] StoreError),

    #[error("document rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("artifact persistence failed: {0}")]
    Io(#[from] PersistError),

    #[error("artifact delivery failed: {0}")]
    Delivery(#[source] std::io::Error),
}

impl ReportError {
    /// The pipeline stage this failure aborted.
    pub fn failed_stage(&self) -> ReportStage {
        match self {
            ReportError::Store(_) => ReportStage::Fetching,
            ReportError::Render(_) => ReportStage::Rendering,
            ReportError::Io(_) => ReportStage::Persisting,
            ReportError::Delivery(_) => ReportStage::Delivering,
        }
    }
}
