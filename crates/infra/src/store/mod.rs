//! Invoice record store boundary.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use facturas_invoicing::Invoice;

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryInvoiceStore;

/// Record store operation error.
///
/// These are **infrastructure errors** (connectivity, query execution) as
/// opposed to domain errors. `Malformed` is the one boundary case: a
/// persisted row that no longer passes invoice validation surfaces here,
/// during retrieval, so consumers never see an invalid record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("duplicate invoice identifier: {0}")]
    DuplicateId(String),

    #[error("malformed record: {0}")]
    Malformed(String),
}

/// Ordered invoice record store.
///
/// `fetch_all` returns every record in store order (insertion order for the
/// bundled implementations); the order is whatever the backend yields and may
/// be empty. Identifiers are unique within one store.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Load the full ordered sequence of invoice records.
    async fn fetch_all(&self) -> Result<Vec<Invoice>, StoreError>;

    /// Append a new record; rejects duplicate identifiers.
    async fn insert(&self, invoice: Invoice) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> InvoiceStore for Arc<S>
where
    S: InvoiceStore + ?Sized,
{
    async fn fetch_all(&self) -> Result<Vec<Invoice>, StoreError> {
        (**self).fetch_all().await
    }

    async fn insert(&self, invoice: Invoice) -> Result<(), StoreError> {
        (**self).insert(invoice).await
    }
}
