//! Liveness endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /health. Reports process liveness and a database ping.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let database = match state.db.health_check().await {
        Ok(true) => "up",
        _ => "down",
    };

    Ok(Json(json!({
        "status": "ok",
        "database": database,
    })))
}
