use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Error taxonomy surfaced to API callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// One or more field-level rules failed on create; every violated rule
    /// is reported together, never partially.
    Validation(Vec<String>),

    /// The targeted id matches no row.
    NotFound,

    /// Unexpected store failure on an id-addressed route. No detail reaches
    /// the caller; the cause is logged where the error is mapped.
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errorType": "VALIDATION_ERROR", "errors": errors })),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "errorType": "NOT_FOUND", "message": "Entry not found" })),
            )
                .into_response(),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "errorType": "INTERNAL", "message": "Internal Server Error" })),
            )
                .into_response(),
        }
    }
}
