use axum::{Json, extract::State};
use serde_json::json;
use wcag_core::keys::INIT_MARKER_KEY;
use wcag_core::responses::{HealthResponse, MessageResponse};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Write the initialization marker. Idempotent.
pub async fn init(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    state
        .kv
        .set(INIT_MARKER_KEY, json!("true"))
        .await
        .map_err(ApiError::store("Failed to initialize database"))?;
    Ok(Json(MessageResponse::new("Database initialized successfully")))
}
