//! Custom error types for the API service

use auth::AuthError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{ErrorResponse, StoreError};
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authenticated caller whose role may not perform the operation
    #[error("Insufficient permissions")]
    Forbidden,

    /// Payload or path failed to parse or violates a field constraint
    #[error("{0}")]
    Validation(String),

    /// Entity store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Identity error raised before the endpoint runs
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Auth(err) => return err.into_response(),
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
