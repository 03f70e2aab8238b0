use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// API-level failures. The engine itself is total; everything here comes
/// from the surrounding plumbing (validation, auth, storage).
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    Conflict(String),
    Unauthorized(String),
    Internal(String),
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        tracing::error!("database error: {err}");
        ApiError::Internal("database error".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
