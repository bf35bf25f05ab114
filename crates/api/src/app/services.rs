//! Store and report pipeline wiring.
//!
//! Mirrors the deployment split of the record store: an in-memory backend for
//! dev/test and a Postgres backend behind the `postgres` feature, selected at
//! startup via `USE_PERSISTENT_STORES`.

use std::path::PathBuf;
use std::sync::Arc;

use facturas_infra::{InMemoryInvoiceStore, InvoiceStore, StoreError};
use facturas_invoicing::Invoice;
use facturas_reporting::{
    DocumentRenderer, ReportDelivery, ReportError, ReportOrchestrator, ReportWriter,
};

#[cfg(feature = "postgres")]
use facturas_infra::PostgresInvoiceStore;
#[cfg(feature = "postgres")]
use sqlx::PgPool;

pub enum AppServices {
    InMemory {
        store: Arc<InMemoryInvoiceStore>,
        orchestrator: ReportOrchestrator<Arc<InMemoryInvoiceStore>>,
    },
    #[cfg(feature = "postgres")]
    Postgres {
        store: Arc<PostgresInvoiceStore>,
        orchestrator: ReportOrchestrator<Arc<PostgresInvoiceStore>>,
    },
}

fn build_in_memory_services(reports_dir: PathBuf) -> AppServices {
    let store = Arc::new(InMemoryInvoiceStore::new());
    let orchestrator = ReportOrchestrator::new(
        store.clone(),
        DocumentRenderer::new(),
        ReportWriter::new(reports_dir),
    );
    AppServices::InMemory {
        store,
        orchestrator,
    }
}

#[cfg(feature = "postgres")]
async fn build_postgres_services(reports_dir: PathBuf) -> AppServices {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set when USE_PERSISTENT_STORES=true");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("failed to connect to Postgres");

    let store = Arc::new(PostgresInvoiceStore::new(pool));
    store
        .ensure_schema()
        .await
        .expect("failed to prepare invoices schema");

    let orchestrator = ReportOrchestrator::new(
        store.clone(),
        DocumentRenderer::new(),
        ReportWriter::new(reports_dir),
    );
    AppServices::Postgres {
        store,
        orchestrator,
    }
}

/// Build services from the environment.
pub async fn build_services(reports_dir: PathBuf) -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        #[cfg(feature = "postgres")]
        {
            build_postgres_services(reports_dir).await
        }
        #[cfg(not(feature = "postgres"))]
        {
            tracing::warn!(
                "USE_PERSISTENT_STORES=true but postgres feature not enabled, falling back to in-memory"
            );
            build_in_memory_services(reports_dir)
        }
    } else {
        build_in_memory_services(reports_dir)
    }
}

impl AppServices {
    pub async fn insert_invoice(&self, invoice: Invoice) -> Result<(), StoreError> {
        match self {
            AppServices::InMemory { store, .. } => store.insert(invoice).await,
            #[cfg(feature = "postgres")]
            AppServices::Postgres { store, .. } => store.insert(invoice).await,
        }
    }

    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, StoreError> {
        match self {
            AppServices::InMemory { store, .. } => store.fetch_all().await,
            #[cfg(feature = "postgres")]
            AppServices::Postgres { store, .. } => store.fetch_all().await,
        }
    }

    pub async fn generate_report(&self) -> Result<ReportDelivery, ReportError> {
        match self {
            AppServices::InMemory { orchestrator, .. } => orchestrator.generate().await,
            #[cfg(feature = "postgres")]
            AppServices::Postgres { orchestrator, .. } => orchestrator.generate().await,
        }
    }
}
