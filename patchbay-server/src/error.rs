use crate::session::{SessionError, StoreError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// REST-boundary errors. This is the only layer where a caller ever sees an
/// error; everything inside the relay is drop-and-log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing token")]
    MissingToken,

    #[error("Invalid or expired token")]
    TokenNotFound,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Internal Server Error")]
    Internal(String),
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound => ApiError::TokenNotFound,
            SessionError::Expired => ApiError::TokenExpired,
            SessionError::Store(StoreError::Unavailable(detail)) => ApiError::Internal(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingToken => StatusCode::BAD_REQUEST,
            ApiError::TokenNotFound => StatusCode::NOT_FOUND,
            ApiError::TokenExpired => StatusCode::UNAUTHORIZED,
            ApiError::Internal(detail) => {
                // Logged server-side, generic message to the client.
                tracing::error!("Session store failure: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
