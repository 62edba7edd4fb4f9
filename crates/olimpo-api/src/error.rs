//! Error types for the content API server.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Database
//! failures are logged server-side and surfaced to the caller as a
//! generic message; upstream generation failures relay the upstream body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use olimpo_db::DbError;
use tracing::error;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required request field was absent.
    #[error("missing field: {0}")]
    MissingField(String),

    /// The request discriminators did not match any known query.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The bearer token was absent or wrong.
    #[error("unauthorized")]
    Unauthorized,

    /// The requested record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A content store query failed.
    #[error("database error: {0}")]
    Database(#[from] DbError),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The generation API call failed; carries the upstream message.
    #[error("upstream generation error: {0}")]
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingField(field) => {
                (StatusCode::BAD_REQUEST, format!("{field} is required"))
            }
            Self::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, String::from("Unauthorized")),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Database(e) => {
                error!(error = %e, "content store query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("internal server error"),
                )
            }
            Self::Serialization(e) => {
                error!(error = %e, "response serialization failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("internal server error"),
                )
            }
            Self::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
