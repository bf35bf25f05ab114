//! Invoicing domain module.
//!
//! This crate contains the typed invoice record used by the report pipeline,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod invoice;

pub use invoice::{Invoice, InvoiceId};
