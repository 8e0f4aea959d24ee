//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use staffhub_domain::error::StaffHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`StaffHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(StaffHubError);

impl<E: Into<StaffHubError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            StaffHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            StaffHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            StaffHubError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            StaffHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
