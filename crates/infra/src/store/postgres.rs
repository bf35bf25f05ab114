//! Postgres-backed invoice store.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use facturas_invoicing::{Invoice, InvoiceId};

use super::{InvoiceStore, StoreError};

/// Postgres-backed invoice store.
///
/// Records are kept in a single `invoices` table with an append position, so
/// `fetch_all` yields them in insertion order, matching the in-memory store.
/// Rows are mapped back through the validated [`Invoice`] constructor; a row
/// that no longer validates fails the whole fetch as [`StoreError::Malformed`].
pub struct PostgresInvoiceStore {
    pool: PgPool,
}

impl PostgresInvoiceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the backing table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS invoices (
                position BIGSERIAL PRIMARY KEY,
                id TEXT NOT NULL UNIQUE,
                client_name TEXT NOT NULL,
                total_amount TEXT NOT NULL,
                invoice_date TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(format!("schema setup failed: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for PostgresInvoiceStore {
    async fn fetch_all(&self) -> Result<Vec<Invoice>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, client_name, total_amount, invoice_date
             FROM invoices
             ORDER BY position",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row
                .try_get("id")
                .map_err(|e| StoreError::Query(e.to_string()))?;
            let client_name: String = row
                .try_get("client_name")
                .map_err(|e| StoreError::Query(e.to_string()))?;
            let total_amount: String = row
                .try_get("total_amount")
                .map_err(|e| StoreError::Query(e.to_string()))?;
            let invoice_date: String = row
                .try_get("invoice_date")
                .map_err(|e| StoreError::Query(e.to_string()))?;

            let invoice_id = InvoiceId::new(id.as_str())
                .map_err(|e| StoreError::Malformed(format!("row {id:?}: {e}")))?;
            let invoice = Invoice::new(invoice_id, client_name, total_amount, invoice_date)
                .map_err(|e| StoreError::Malformed(format!("row {id:?}: {e}")))?;
            records.push(invoice);
        }

        Ok(records)
    }

    async fn insert(&self, invoice: Invoice) -> Result<(), StoreError> {
        let result = sqlx::query(
            "INSERT INTO invoices (id, client_name, total_amount, invoice_date)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(invoice.id().as_str())
        .bind(invoice.client_name())
        .bind(invoice.total_amount())
        .bind(invoice.date())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::DuplicateId(invoice.id().to_string()))
            }
            Err(e) => Err(StoreError::Query(e.to_string())),
        }
    }
}
