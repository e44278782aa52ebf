//! HTTP error mapping.
//!
//! The only error kind the interface distinguishes is not-found: it maps
//! to a 404 with a fixed message. Everything else from the store is a
//! server fault — logged, and surfaced as an opaque 500. Malformed
//! payloads never reach this module; axum's extractor rejections handle
//! them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use taskd_store::TaskError;
use tracing::error;

/// An error response: status code plus a client-visible detail message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// 404 with the fixed task-not-found message.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: "Task not found".to_string(),
        }
    }

    /// 500 with an opaque message.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: "Internal server error".to_string(),
        }
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        if err.is_not_found() {
            return Self::not_found();
        }
        error!(error = %err, "store operation failed");
        Self::internal()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(TaskError::task_not_found(5));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_error_maps_to_500() {
        let err = ApiError::from(TaskError::Database(rusqlite::Error::InvalidQuery));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_body_carries_fixed_detail() {
        let response = ApiError::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
