//! HTTP API application wiring (Axum router + service wiring).
//!
//! Structure:
//! - `services.rs`: store/pipeline wiring (in-memory vs Postgres)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Artifact directory, `REPORTS_DIR` env var with a `reports` default.
pub fn reports_dir_from_env() -> PathBuf {
    std::env::var("REPORTS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("reports"))
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(reports_dir: PathBuf) -> Router {
    let services = Arc::new(services::build_services(reports_dir).await);

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/invoices", routes::invoices::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
