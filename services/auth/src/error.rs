//! Custom error types for the authentication service

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use common::ErrorResponse;
use thiserror::Error;

/// Message returned for every identity failure, whatever the cause
pub const UNAUTHORIZED_DETAIL: &str = "Could not validate credentials";

/// Custom error type for authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Missing, malformed, or mis-signed bearer token
    #[error("{}", UNAUTHORIZED_DETAIL)]
    Unauthorized,

    /// Unknown username or wrong password at login
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Login body could not be parsed
    #[error("{0}")]
    MalformedRequest(String),

    /// JWT configuration is unusable
    #[error("Invalid JWT configuration: {0}")]
    Configuration(String),

    /// Token could not be signed
    #[error("Failed to issue token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AuthError::MalformedRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::Configuration(_) | AuthError::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let detail = match &self {
            AuthError::Configuration(_) | AuthError::Signing(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse::new(detail));

        if status == StatusCode::UNAUTHORIZED {
            return (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response();
        }

        (status, body).into_response()
    }
}

/// Type alias for authentication results
pub type AuthResult<T> = Result<T, AuthError>;
