//! `facturas-infra` — storage adapters for the invoice record store.
//!
//! The report pipeline only consumes the [`store::InvoiceStore`] trait; the
//! implementations here (in-memory for dev/test, Postgres behind the
//! `postgres` feature) are wired up at process startup.

pub mod store;

pub use store::{InMemoryInvoiceStore, InvoiceStore, StoreError};

#[cfg(feature = "postgres")]
pub use store::postgres::PostgresInvoiceStore;
