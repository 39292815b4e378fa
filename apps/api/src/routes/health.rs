use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and the active
/// content mode (generative when a credential is configured, template
/// otherwise).
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let mode = if state.config.openai_api_key.is_some() {
        "generative"
    } else {
        "template"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "pagesmith-api",
        "mode": mode
    }))
}
