use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Liveness check kept for existing clients.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "API is running"
    }))
}

/// GET /health
/// Returns a simple status object with service version and active store backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "people-api",
        "store": state.store.backend()
    }))
}
