/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * Validation failures:
 * ```json
 * { "errors": [{ "field": "title", "message": "Title is required" }] }
 * ```
 *
 * Everything else:
 * ```json
 * { "error": "Post not found" }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::shared::{ErrorBody, ValidationErrorBody};

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        match self {
            BackendError::Validation(errors) => {
                (status, Json(ValidationErrorBody { errors })).into_response()
            }
            other => (status, Json(ErrorBody { error: other.message() })).into_response(),
        }
    }
}
