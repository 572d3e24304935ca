use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and generation limits.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "templates-api",
        "enrichment_enabled": state.config.enrichment_enabled,
        "max_batch_size": state.engine.max_batch_size()
    }))
}
