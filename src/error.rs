//! Error types for the grocery backend
//!
//! - `DomainError`: catalog and cart errors
//! - `AppError`: HTTP layer errors (wraps domain errors for responses)
//! - `ConfigError`: invalid environment values at startup

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("Product not found")]
    ProductNotFound(i64),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Error response body, shaped `{"detail": "..."}`
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Domain(DomainError::ProductNotFound(id)) => {
                tracing::warn!(product_id = *id, "Product not found");
                StatusCode::NOT_FOUND
            }
        };

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_maps_to_404_with_detail() {
        let response = AppError::from(DomainError::ProductNotFound(999)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Product not found");
    }
}
