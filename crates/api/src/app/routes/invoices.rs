use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use facturas_invoicing::{Invoice, InvoiceId};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_invoice).get(list_invoices))
        .route("/report", get(generate_report))
}

pub async fn create_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateInvoiceRequest>,
) -> axum::response::Response {
    let id = body
        .id
        .unwrap_or_else(|| uuid::Uuid::now_v7().to_string());
    let id = match InvoiceId::new(id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let amount = match dto::amount_text(&body.total_amount) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let invoice = match Invoice::new(id, body.client_name, amount, body.date) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.insert_invoice(invoice.clone()).await {
        return errors::store_error_to_response(e);
    }

    (StatusCode::CREATED, Json(dto::invoice_to_json(&invoice))).into_response()
}

pub async fn list_invoices(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.list_invoices().await {
        Ok(invoices) => {
            let items: Vec<_> = invoices.iter().map(dto::invoice_to_json).collect();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

/// `GET /invoices/report` — generate and download the invoice report.
///
/// Success streams the persisted artifact bytes as an attachment; any
/// pipeline failure has already been logged with its stage by the
/// orchestrator and collapses to the fixed failure response here.
pub async fn generate_report(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let delivery = match services.generate_report().await {
        Ok(d) => d,
        Err(_) => return errors::report_failure_response(),
    };

    let disposition = format!("attachment; filename=\"{}\"", delivery.filename());
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        delivery.into_bytes(),
    )
        .into_response()
}
