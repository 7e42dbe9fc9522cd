//! JWT service for token issuance and verification
//!
//! Tokens carry a single `role` claim and are signed with a shared secret
//! using an HMAC algorithm. No expiry claim is added and none is enforced:
//! a token stays valid for as long as its signature verifies.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AuthError, AuthResult};

/// Secrets shorter than this are accepted with a warning
const RECOMMENDED_SECRET_LEN: usize = 32;

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Shared secret for signing and verifying tokens
    pub secret: String,
    /// Signing algorithm name (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

impl JwtConfig {
    /// Create a configuration with the given secret and the default algorithm
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: default_algorithm(),
        }
    }

    /// Set the signing algorithm
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Resolve the configured algorithm
    ///
    /// Only HMAC algorithms are accepted since tokens are signed with a shared secret.
    pub fn algorithm(&self) -> AuthResult<Algorithm> {
        let algorithm = Algorithm::from_str(&self.algorithm).map_err(|_| {
            AuthError::Configuration(format!("unknown algorithm `{}`", self.algorithm))
        })?;

        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
            other => Err(AuthError::Configuration(format!(
                "algorithm {other:?} needs a key pair, only HS256, HS384 and HS512 are supported"
            ))),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> AuthResult<()> {
        if self.secret.is_empty() {
            return Err(AuthError::Configuration("JWT secret is not set".to_string()));
        }
        if self.secret.len() < RECOMMENDED_SECRET_LEN {
            warn!(
                "JWT secret is shorter than the recommended {} bytes",
                RECOMMENDED_SECRET_LEN
            );
        }
        self.algorithm()?;
        Ok(())
    }
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Role of the token holder
    pub role: String,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    algorithm: Algorithm,
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    validation: Arc<Validation>,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: &JwtConfig) -> AuthResult<Self> {
        config.validate()?;
        let algorithm = config.algorithm()?;

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        Ok(JwtService {
            algorithm,
            encoding_key: Arc::new(EncodingKey::from_secret(config.secret.as_bytes())),
            decoding_key: Arc::new(DecodingKey::from_secret(config.secret.as_bytes())),
            validation: Arc::new(validation),
        })
    }

    /// Issue a token carrying the given role
    pub fn issue(&self, role: &str) -> AuthResult<String> {
        let claims = Claims {
            role: role.to_string(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(AuthError::Signing)
    }

    /// Verify a token and return its role claim
    ///
    /// Any decoding failure collapses into [`AuthError::Unauthorized`].
    pub fn verify(&self, token: &str) -> AuthResult<String> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!("Token verification failed: {}", e);
                AuthError::Unauthorized
            })?;

        Ok(token_data.claims.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-that-is-long-enough-for-hs256";

    fn service() -> JwtService {
        JwtService::new(&JwtConfig::new(SECRET)).unwrap()
    }

    #[test]
    fn issued_token_verifies_to_same_role() {
        let jwt = service();
        for role in ["admin", "hr", "employee"] {
            let token = jwt.issue(role).unwrap();
            assert_eq!(jwt.verify(&token).unwrap(), role);
        }
    }

    #[test]
    fn issue_is_deterministic() {
        let jwt = service();
        assert_eq!(jwt.issue("hr").unwrap(), jwt.issue("hr").unwrap());
    }

    #[test]
    fn unknown_role_still_verifies() {
        let jwt = service();
        let token = jwt.issue("manager").unwrap();
        assert_eq!(jwt.verify(&token).unwrap(), "manager");
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = JwtService::new(&JwtConfig::new("another-secret-of-reasonable-length!")).unwrap();
        let token = other.issue("admin").unwrap();
        assert!(matches!(service().verify(&token), Err(AuthError::Unauthorized)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let jwt = service();
        for token in ["", "not-a-token", "a.b.c"] {
            assert!(matches!(jwt.verify(token), Err(AuthError::Unauthorized)));
        }
    }

    #[test]
    fn token_without_role_claim_is_rejected() {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "admin" }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(matches!(service().verify(&token), Err(AuthError::Unauthorized)));
    }

    #[test]
    fn expired_exp_claim_is_not_enforced() {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "role": "hr", "exp": 1 }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert_eq!(service().verify(&token).unwrap(), "hr");
    }

    #[test]
    fn token_with_other_algorithm_is_rejected() {
        let hs512 =
            JwtService::new(&JwtConfig::new(SECRET).with_algorithm("HS512")).unwrap();
        let token = hs512.issue("admin").unwrap();
        assert!(matches!(service().verify(&token), Err(AuthError::Unauthorized)));
        assert_eq!(hs512.verify(&token).unwrap(), "admin");
    }

    #[test]
    fn config_rejects_empty_secret_and_asymmetric_algorithms() {
        assert!(matches!(
            JwtService::new(&JwtConfig::new("")),
            Err(AuthError::Configuration(_))
        ));
        assert!(matches!(
            JwtService::new(&JwtConfig::new(SECRET).with_algorithm("RS256")),
            Err(AuthError::Configuration(_))
        ));
        assert!(matches!(
            JwtService::new(&JwtConfig::new(SECRET).with_algorithm("HS999")),
            Err(AuthError::Configuration(_))
        ));
    }
}
