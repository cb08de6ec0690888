//! Error types for the HTTP API.
//!
//! [`ApiError`] is converted into a JSON body of the form
//! `{"error": message, "status": code}` via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No route matches the request path.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request body was not acceptable JSON for the endpoint.
    ///
    /// `status` is the extractor's own 4xx code: 400 for syntax errors,
    /// 415 for a missing JSON content type, 422 for wrong field types.
    #[error("invalid request body: {message}")]
    InvalidBody {
        /// HTTP status to answer with.
        status: StatusCode,
        /// Description of the rejection.
        message: String,
    },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::InvalidBody { status, message } => (status, message),
        };

        tracing::warn!(status = status.as_u16(), %message, "request rejected");

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
