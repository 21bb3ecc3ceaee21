//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use ssmgr_domain::error::{SsmgrError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Build a JSON error response.
pub(crate) fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Status code for a domain error.
pub(crate) fn status_of(err: &SsmgrError) -> StatusCode {
    match err {
        SsmgrError::Validation(_) | SsmgrError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        SsmgrError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

/// Human-readable reason for a domain error, including the inner cause.
pub(crate) fn message_of(err: &SsmgrError) -> String {
    match err {
        SsmgrError::Validation(inner) => inner.to_string(),
        SsmgrError::InvalidArgument(inner) => inner.to_string(),
        SsmgrError::NotFound(inner) => inner.to_string(),
    }
}

/// Maps [`SsmgrError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(SsmgrError);

impl From<SsmgrError> for ApiError {
    fn from(err: SsmgrError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_of(&self.0);
        tracing::debug!(%status, error = %message_of(&self.0), "api request failed");
        json_error(status, message_of(&self.0))
    }
}
