use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shared::analysis::ParseError;
use thiserror::Error;

use crate::services::gemini::ProviderError;

/// Error taxonomy of the HTTP surface. Parse and Provider failures are kept
/// apart on purpose: a parse failure means "ask the AI again", a provider
/// failure means the transport itself gave up, and clients retry them
/// differently.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Parse(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            ApiError::Provider(err) => {
                tracing::error!(error = %err, "AI provider call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Server overload atau gagal merespons. Coba lagi nanti.".to_string(),
                )
            }
            ApiError::Database(err) => {
                tracing::error!(error = %err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
