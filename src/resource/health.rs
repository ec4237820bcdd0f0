use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::AppState;
use crate::error::AppError;

/// GET /health, answers only when the store does
pub async fn health(State(backend): State<AppState>) -> Result<Json<Value>, AppError> {
    backend.health_check().await?;
    Ok(Json(json!({ "status": "ok" })))
}
