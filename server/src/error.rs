//! API error taxonomy and its mapping onto HTTP responses.
//!
//! Every failing response carries a `{ "message": ... }` JSON body. Nothing
//! is retried; the caller decides what to surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shopsecure_store::StoreError;
use thiserror::Error;
use tracing::error;

/// Body shape shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Errors surfaced to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body or out-of-range value. 400.
    #[error("{0}")]
    Validation(String),

    /// No authenticated user on the request. 401.
    #[error("Not authenticated")]
    AuthenticationRequired,

    /// Acting on a row owned by someone else. 403, never silently allowed.
    #[error("Not authorized")]
    AuthorizationDenied,

    /// Missing product/cart/review row. 404.
    #[error("{0}")]
    NotFound(String),

    /// Storage or other unexpected failure. 500; detail stays in the log.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            Self::AuthorizationDenied => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Internal(detail) => {
                error!("request failed: {detail}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(message) => Self::Validation(message),
            StoreError::NotFound(what) => Self::NotFound(format!("Not found: {what}")),
            StoreError::Database(db) => Self::Internal(db.to_string()),
        }
    }
}
