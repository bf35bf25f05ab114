use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use facturas_core::DomainError;
use facturas_infra::StoreError;

/// Fixed message returned whenever report generation fails.
///
/// No stage or cause detail crosses the HTTP boundary; diagnostics go to
/// the logs only.
pub const REPORT_FAILURE_MESSAGE: &str = "Error al generar reporte.";

/// The uniform report failure response: 500 with a single message field.
pub fn report_failure_response() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "message": REPORT_FAILURE_MESSAGE })),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::DuplicateId(id) => json_error(
            StatusCode::CONFLICT,
            "duplicate_id",
            format!("invoice {id} already exists"),
        ),
        StoreError::Malformed(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "malformed_record", msg)
        }
        StoreError::Unavailable(msg) | StoreError::Query(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg)
        }
    }
}
