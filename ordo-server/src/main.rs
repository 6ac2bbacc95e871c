mod routes;
mod singleton;
mod state;
mod warmup;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

const DEFAULT_PORT: u16 = 8000;

/// Listening port from `PORT`, falling back to the default when the
/// variable is unset or not a valid port number.
fn resolve_port(var: Option<String>) -> u16 {
    match var {
        None => DEFAULT_PORT,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "invalid PORT, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "ordo_server=info,info".into()),
        )
        .init();

    // Ensure only one instance is running
    let _lock = singleton::acquire_lock()?;

    let state = AppState::new()?;

    // Best-effort warmup; never blocks startup
    warmup::run(&state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::status::router())
        .merge(routes::days::router())
        .merge(routes::cache::router())
        .with_state(state)
        .layer(cors);

    let port = resolve_port(std::env::var("PORT").ok());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("ordo-server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
