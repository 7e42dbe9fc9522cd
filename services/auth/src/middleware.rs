//! Middleware for bearer token validation
//!
//! Protected routes are wrapped with [`auth_middleware`], which resolves the
//! caller's role from the `Authorization` header and stores it as an
//! [`Identity`] request extension. Handlers pick it up with the `Identity`
//! extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::debug;

use crate::{error::AuthError, jwt::JwtService};

/// Identity of the caller, resolved from a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Role claim exactly as found in the token
    pub role: String,
}

/// Extract and validate the bearer token from the Authorization header
///
/// Every failure produces the same 401 response; the specific cause is only logged.
pub async fn auth_middleware(
    State(jwt_service): State<JwtService>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or_else(|| {
        debug!("Missing or malformed Authorization header");
        AuthError::Unauthorized
    })?;

    let role = jwt_service.verify(bearer.token())?;

    req.extensions_mut().insert(Identity { role });

    Ok(next.run(req).await)
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or(AuthError::Unauthorized)
    }
}
