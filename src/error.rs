//! Application error types shared across the API and storage layers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Result type for application operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors that can occur while handling a request.
///
/// Validation and capacity errors are terminal for the single request and
/// carry a user-facing message. Resolver transport failures never reach this
/// type (they degrade to an unresolved name); charge/store failures do.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    CapacityExceeded(String),

    #[error("{0}")]
    ExternalService(String),

    #[error("Wallet identity required")]
    Unauthorized,

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::CapacityExceeded(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::ExternalService(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Validation("DUPR rating must be between 3.0-4.0".to_string());
        assert_eq!(err.to_string(), "DUPR rating must be between 3.0-4.0");

        let err = AppError::Unauthorized;
        assert_eq!(err.to_string(), "Wallet identity required");
    }
}
