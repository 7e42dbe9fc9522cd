use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod extractors;
mod models;
mod permissions;
mod routes;
mod settings;
mod state;
mod validation;

use auth::{CredentialStore, JwtService};
use tokio::net::TcpListener;

use crate::{settings::Settings, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting employee directory API");

    let settings = Settings::from_env()?;

    // Initialize JWT service
    let jwt_service = JwtService::new(&settings.jwt)?;
    let credentials = CredentialStore::default();
    info!(
        "Loaded {} credentials, signing tokens with {}",
        credentials.len(),
        settings.jwt.algorithm
    );

    let app_state = AppState::new(jwt_service, credentials);
    info!("Seeded {} roles", app_state.roles.len().await);

    // Start the web server
    let app = routes::create_router(app_state);

    let addr = settings.server.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Employee directory API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
