//! Cache management endpoints

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;

use ordo_core::cache::CacheStatus;

use crate::routes::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cache/clear", post(clear))
        .route("/cache/status", get(status))
}

#[derive(Serialize)]
pub struct ClearResponse {
    pub message: &'static str,
}

/// POST /cache/clear - Drop both cache levels
async fn clear(State(state): State<AppState>) -> Result<Json<ClearResponse>, ApiError> {
    state.cache.clear()?;
    Ok(Json(ClearResponse {
        message: "Cache cleared successfully",
    }))
}

/// GET /cache/status - Cache contents and location
async fn status(State(state): State<AppState>) -> Json<CacheStatus> {
    Json(state.cache.status())
}
