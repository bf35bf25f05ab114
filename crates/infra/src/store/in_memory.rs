use std::sync::RwLock;

use async_trait::async_trait;

use facturas_invoicing::Invoice;

use super::{InvoiceStore, StoreError};

/// In-memory invoice store.
///
/// Intended for tests/dev. Keeps records in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryInvoiceStore {
    records: RwLock<Vec<Invoice>>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn fetch_all(&self) -> Result<Vec<Invoice>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(records.clone())
    }

    async fn insert(&self, invoice: Invoice) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        if records.iter().any(|r| r.id() == invoice.id()) {
            return Err(StoreError::DuplicateId(invoice.id().to_string()));
        }

        records.push(invoice);
        Ok(())
    }
}
