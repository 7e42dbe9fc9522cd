//! Authentication for the employee directory
//!
//! This crate issues and verifies the bearer tokens that gate the directory
//! API. It provides:
//!
//! - [`jwt`]: the token codec, signing a single `role` claim with a shared secret
//! - [`credentials`]: the static username/password table
//! - [`middleware`]: the identity extractor run in front of protected routes
//! - [`routes`]: the `POST /token` login endpoint

pub mod credentials;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod routes;

pub use credentials::{Credential, CredentialStore};
pub use error::{AuthError, AuthResult};
pub use jwt::{JwtConfig, JwtService};
pub use middleware::{Identity, auth_middleware};

/// State shared by the authentication handlers
#[derive(Clone)]
pub struct AuthState {
    pub jwt_service: JwtService,
    pub credentials: CredentialStore,
}
