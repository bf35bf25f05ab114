//! Report pipeline sequencing and unified failure handling.

use facturas_infra::InvoiceStore;

use crate::error::ReportError;
use crate::renderer::DocumentRenderer;
use crate::writer::ReportWriter;

/// Suggested filename for the downloaded report; fixed across invocations
/// even though every persisted artifact gets a unique name on disk.
pub const REPORT_DOWNLOAD_FILENAME: &str = "invoices_report.pdf";

/// Pipeline stage of one report invocation.
///
/// `Idle → Fetching → Rendering → Persisting → Delivering → Done`, with any
/// stage moving to `Failed` on error; `Done` and `Failed` are terminal and
/// there is no cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportStage {
    Idle,
    Fetching,
    Rendering,
    Persisting,
    Delivering,
    Done,
    Failed,
}

impl core::fmt::Display for ReportStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ReportStage::Idle => "idle",
            ReportStage::Fetching => "fetching",
            ReportStage::Rendering => "rendering",
            ReportStage::Persisting => "persisting",
            ReportStage::Delivering => "delivering",
            ReportStage::Done => "done",
            ReportStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// The outcome handed to the delivery boundary: the exact persisted bytes
/// plus the fixed suggested download filename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportDelivery {
    bytes: Vec<u8>,
    filename: &'static str,
}

impl ReportDelivery {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn filename(&self) -> &'static str {
        self.filename
    }
}

/// Sequences fetch → render → persist → deliver for one report request.
///
/// Failures from any stage are logged here with their stage and diagnostic
/// detail, then surfaced as [`ReportError`] for the HTTP boundary to collapse
/// into its generic failure response. No stage is retried; either a complete
/// report is delivered or none is.
pub struct ReportOrchestrator<S> {
    store: S,
    renderer: DocumentRenderer,
    writer: ReportWriter,
}

impl<S> ReportOrchestrator<S>
where
    S: InvoiceStore,
{
    pub fn new(store: S, renderer: DocumentRenderer, writer: ReportWriter) -> Self {
        Self {
            store,
            renderer,
            writer,
        }
    }

    pub async fn generate(&self) -> Result<ReportDelivery, ReportError> {
        tracing::debug!(stage = %ReportStage::Idle, "report generation requested");

        match self.run().await {
            Ok(delivery) => {
                tracing::info!(
                    stage = %ReportStage::Done,
                    bytes = delivery.bytes().len(),
                    "invoice report generated"
                );
                Ok(delivery)
            }
            Err(e) => {
                tracing::error!(
                    stage = %ReportStage::Failed,
                    failed_at = %e.failed_stage(),
                    error = %e,
                    "invoice report generation failed"
                );
                Err(e)
            }
        }
    }

    async fn run(&self) -> Result<ReportDelivery, ReportError> {
        tracing::debug!(stage = %ReportStage::Fetching);
        let invoices = self.store.fetch_all().await?;

        tracing::debug!(stage = %ReportStage::Rendering, records = invoices.len());
        let report = self.renderer.render(&invoices)?;

        tracing::debug!(stage = %ReportStage::Persisting, bytes = report.len());
        let artifact = self.writer.persist(&report).await?;

        tracing::debug!(stage = %ReportStage::Delivering, path = %artifact.path().display());
        let bytes = tokio::fs::read(artifact.path())
            .await
            .map_err(ReportError::Delivery)?;

        Ok(ReportDelivery {
            bytes,
            filename: REPORT_DOWNLOAD_FILENAME,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use facturas_infra::{InMemoryInvoiceStore, StoreError};
    use facturas_invoicing::{Invoice, InvoiceId};

    struct FailingStore;

    #[async_trait]
    impl InvoiceStore for FailingStore {
        async fn fetch_all(&self) -> Result<Vec<Invoice>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn insert(&self, _invoice: Invoice) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn invoice(id: &str, name: &str) -> Invoice {
        Invoice::new(InvoiceId::new(id).unwrap(), name, "100", "2024-01-01").unwrap()
    }

    fn orchestrator<S: InvoiceStore>(store: S, dir: &std::path::Path) -> ReportOrchestrator<S> {
        ReportOrchestrator::new(store, DocumentRenderer::new(), ReportWriter::new(dir))
    }

    #[tokio::test]
    async fn delivery_matches_persisted_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = InMemoryInvoiceStore::new();
        store.insert(invoice("1", "Ana")).await.unwrap();

        let delivery = orchestrator(store, dir.path()).generate().await.unwrap();
        assert_eq!(delivery.filename(), REPORT_DOWNLOAD_FILENAME);
        assert!(delivery.bytes().starts_with(b"%PDF"));

        let artifact = std::fs::read_dir(dir.path())
            .unwrap()
            .next()
            .unwrap()
            .unwrap()
            .path();
        let on_disk = std::fs::read(artifact).unwrap();
        assert_eq!(on_disk, delivery.bytes());
    }

    #[tokio::test]
    async fn empty_store_still_delivers_a_report() {
        let dir = tempfile::tempdir().unwrap();
        let delivery = orchestrator(InMemoryInvoiceStore::new(), dir.path())
            .generate()
            .await
            .unwrap();
        assert!(!delivery.bytes().is_empty());
        assert!(delivery.bytes().starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn store_failure_writes_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let err = orchestrator(FailingStore, dir.path())
            .generate()
            .await
            .unwrap_err();

        assert_eq!(err.failed_stage(), ReportStage::Fetching);
        assert!(matches!(err, ReportError::Store(_)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn unwritable_target_fails_at_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = orchestrator(InMemoryInvoiceStore::new(), &missing)
            .generate()
            .await
            .unwrap_err();

        assert_eq!(err.failed_stage(), ReportStage::Persisting);
    }

    #[tokio::test]
    async fn concurrent_invocations_do_not_share_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(InMemoryInvoiceStore::new());
        store.insert(invoice("1", "Ana")).await.unwrap();

        let orch = std::sync::Arc::new(orchestrator(store, dir.path()));
        let a = tokio::spawn({
            let orch = orch.clone();
            async move { orch.generate().await.unwrap() }
        });
        let b = tokio::spawn({
            let orch = orch.clone();
            async move { orch.generate().await.unwrap() }
        });
        let (a, b) = (a.await.unwrap(), b.await.unwrap());

        assert!(a.bytes().starts_with(b"%PDF"));
        assert!(b.bytes().starts_with(b"%PDF"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }
}
