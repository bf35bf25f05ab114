//! Artifact persistence for rendered reports.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::PersistError;
use crate::renderer::RenderedReport;

/// Persists rendered reports under the reports directory.
///
/// Every invocation writes its own uniquely named file, so concurrent report
/// requests never observe each other's artifacts between write and read-back.
/// The directory itself must exist and be writable; creating it is a process
/// bootstrap concern, not the writer's.
#[derive(Clone, Debug)]
pub struct ReportWriter {
    reports_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    /// Write the full rendered buffer to a fresh artifact file.
    ///
    /// Returns only once every byte is flushed; readers of the returned
    /// handle never see a partial write.
    pub async fn persist(&self, report: &RenderedReport) -> Result<PersistedArtifact, PersistError> {
        let name = format!("invoices_report-{}.pdf", Uuid::now_v7());
        let path = self.reports_dir.join(name);

        tokio::fs::write(&path, report.as_bytes())
            .await
            .map_err(|source| PersistError {
                path: path.clone(),
                source,
            })?;

        Ok(PersistedArtifact { path })
    }
}

/// Handle to one persisted report artifact.
///
/// Artifacts are written once and never modified or deleted by the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistedArtifact {
    path: PathBuf,
}

impl PersistedArtifact {
    pub fn path(&self) -> &Path {
        &self.path
    }
}
