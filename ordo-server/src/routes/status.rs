//! Health and status endpoints

use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/status", get(status))
}

#[derive(Serialize)]
pub struct ApiStatus {
    pub status: &'static str,
    pub engine_version: &'static str,
    pub rite: String,
    pub locale: String,
    pub cache_directory: String,
    pub timestamp: String,
}

/// GET / - Service status
async fn root(State(state): State<AppState>) -> Json<ApiStatus> {
    api_status(&state)
}

/// GET /status - Detailed status (same document as the root)
async fn status(State(state): State<AppState>) -> Json<ApiStatus> {
    api_status(&state)
}

fn api_status(state: &AppState) -> Json<ApiStatus> {
    Json(ApiStatus {
        status: "healthy",
        engine_version: ordo_core::ENGINE_VERSION,
        rite: state.config.rite.clone(),
        locale: state.config.locale.clone(),
        cache_directory: state.cache.version_dir().display().to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub uptime_seconds: u64,
}

/// GET /health - Liveness probe with uptime
async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
