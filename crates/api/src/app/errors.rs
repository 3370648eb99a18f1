use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use gazette_core::{DomainError, ValidationReport};
use gazette_store::StoreError;

/// Map a domain error to its HTTP response.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => record_not_found(),
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, msg),
    }
}

/// Fixed body for missing records. The message is part of the client
/// contract; do not reword it.
pub fn record_not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "Record was not found")
}

/// Per-field validation errors, 400.
pub fn validation_failed(report: &ValidationReport) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({ "errors": report.errors() })),
    )
        .into_response()
}

/// Store failures surface as an opaque 500; the detail stays in the logs.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store operation failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({ "error": message.into() })),
    )
        .into_response()
}
