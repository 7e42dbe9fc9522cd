//! Authentication service routes

use axum::{
    Form, Json, Router, async_trait,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{AuthState, error::AuthError};

/// Request for user login
///
/// Accepted as a JSON body or as an OAuth2 password-flow form.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for token generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[async_trait]
impl<S> FromRequest<S> for LoginRequest
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(payload) = Form::<LoginRequest>::from_request(req, state)
                .await
                .map_err(|e| AuthError::MalformedRequest(e.body_text()))?;
            Ok(payload)
        } else {
            let Json(payload) = Json::<LoginRequest>::from_request(req, state)
                .await
                .map_err(|e| AuthError::MalformedRequest(e.body_text()))?;
            Ok(payload)
        }
    }
}

/// Create the router for the authentication service
pub fn create_router(state: AuthState) -> Router {
    Router::new()
        .route("/token", post(login))
        .with_state(state)
}

/// User login endpoint
pub async fn login(
    State(state): State<AuthState>,
    payload: LoginRequest,
) -> Result<impl IntoResponse, AuthError> {
    info!("Login attempt for user: {}", payload.username);

    let role = state
        .credentials
        .authenticate(&payload.username, &payload.password)?;

    let access_token = state
        .jwt_service
        .issue(role.as_str())
        .inspect_err(|e| error!("Failed to generate access token: {}", e))?;

    let response = TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{credentials::CredentialStore, jwt::JwtConfig, jwt::JwtService};
    use axum::{body::Body, http};
    use tower::ServiceExt;

    fn state() -> AuthState {
        AuthState {
            jwt_service: JwtService::new(&JwtConfig::new("routes-test-secret-0123456789abcdef"))
                .unwrap(),
            credentials: CredentialStore::default(),
        }
    }

    async fn post_token(
        state: AuthState,
        content_type: &str,
        body: String,
    ) -> (StatusCode, serde_json::Value) {
        let req = http::Request::builder()
            .method("POST")
            .uri("/token")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        let response = create_router(state).oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn every_account_gets_a_token_for_its_role() {
        let state = state();
        for (username, role) in [("admin", "admin"), ("hr", "hr"), ("employee", "employee")] {
            let body = serde_json::json!({ "username": username, "password": username });
            let (status, json) =
                post_token(state.clone(), "application/json", body.to_string()).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["token_type"], "bearer");
            let token = json["access_token"].as_str().unwrap();
            assert_eq!(state.jwt_service.verify(token).unwrap(), role);
        }
    }

    #[tokio::test]
    async fn form_login_is_accepted() {
        let state = state();
        let (status, json) = post_token(
            state.clone(),
            "application/x-www-form-urlencoded",
            "username=hr&password=hr".to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let token = json["access_token"].as_str().unwrap();
        assert_eq!(state.jwt_service.verify(token).unwrap(), "hr");
    }

    #[tokio::test]
    async fn bad_credentials_are_a_400() {
        for body in [
            serde_json::json!({ "username": "admin", "password": "wrong" }),
            serde_json::json!({ "username": "ghost", "password": "ghost" }),
        ] {
            let (status, json) = post_token(state(), "application/json", body.to_string()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["detail"], "Incorrect username or password");
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_422() {
        let (status, json) =
            post_token(state(), "application/json", r#"{"username":"admin"}"#.to_string()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["detail"].is_string());
    }
}
