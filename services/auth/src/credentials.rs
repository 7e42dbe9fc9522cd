//! Static credential table
//!
//! Passwords are stored and compared in plain text. This mirrors the
//! simulated user table the directory has always shipped with and is not
//! meant to protect anything; do not put real passwords here.

use std::collections::HashMap;

use common::RoleName;
use tracing::warn;

use crate::error::{AuthError, AuthResult};

/// A username/password pair and the role it grants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub role: RoleName,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: RoleName) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}

/// Immutable credential table keyed by username
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: HashMap<String, Credential>,
}

impl Default for CredentialStore {
    /// One account per role, with the password equal to the username
    fn default() -> Self {
        Self::new(
            RoleName::all()
                .iter()
                .map(|role| Credential::new(role.as_str(), role.as_str(), *role)),
        )
    }
}

impl CredentialStore {
    /// Build a table from the given credentials
    pub fn new(credentials: impl IntoIterator<Item = Credential>) -> Self {
        let users = credentials
            .into_iter()
            .map(|credential| (credential.username.clone(), credential))
            .collect();
        Self { users }
    }

    /// Check a username/password pair and return the role it grants
    pub fn authenticate(&self, username: &str, password: &str) -> AuthResult<RoleName> {
        match self.users.get(username) {
            Some(credential) if credential.password == password => Ok(credential.role),
            Some(_) => {
                warn!("Wrong password for user: {}", username);
                Err(AuthError::InvalidCredentials)
            }
            None => {
                warn!("Unknown user: {}", username);
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
