//! Error types for FoodHub server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Malformed id: {0}")]
    MalformedId(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body sent on every recovered failure
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: bool,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Authentication and role failures share one body on the wire:
        // clients cannot tell a missing token from a bad one or from an
        // insufficient role.
        let (status, message) = match &self {
            AppError::Authentication(msg) => {
                tracing::debug!("authentication rejected: {}", msg);
                (StatusCode::UNAUTHORIZED, "unAuthorized user".to_string())
            }
            AppError::Authorization(msg) => {
                tracing::debug!("authorization rejected: {}", msg);
                (StatusCode::UNAUTHORIZED, "unAuthorized user".to_string())
            }
            AppError::Forbidden(_) => {
                (StatusCode::FORBIDDEN, "Forbidden Access".to_string())
            }
            AppError::MalformedId(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: true,
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn authentication_failure_is_401_with_shared_body() {
        let (status, body) = body_json(AppError::Authentication("no header".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "unAuthorized user");
    }

    #[tokio::test]
    async fn role_failure_matches_authentication_on_the_wire() {
        let (status, body) = body_json(AppError::Authorization("role != admin".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "unAuthorized user");
    }

    #[tokio::test]
    async fn ownership_mismatch_is_403() {
        let (status, body) = body_json(AppError::Forbidden("owner mismatch".into())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "Forbidden Access");
    }

    #[tokio::test]
    async fn malformed_id_is_400() {
        let (status, _) = body_json(AppError::MalformedId("not-an-id".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
