//! Axum route handlers for the content API.

use axum::{extract::State, response::Html, Json};
use serde_json::{json, Value};

use crate::content::models::{BusinessInputs, RECOGNIZED_TONES};
use crate::pipeline::generate_display;
use crate::state::AppState;

/// POST /api/v1/generate
///
/// Runs the full pipeline and always answers 200 with a display-ready body:
/// either the rendered document or a message starting with the failure
/// marker. The UI layer branches on the marker, not on status codes.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(inputs): Json<BusinessInputs>,
) -> Html<String> {
    Html(generate_display(state.provider.as_ref(), &inputs).await)
}

/// GET /api/v1/tones
///
/// The recognized tone catalog for the form layer's dropdown. Free-text
/// tones outside this list are still accepted by the generate endpoint.
pub async fn handle_list_tones() -> Json<Value> {
    Json(json!({ "tones": RECOGNIZED_TONES }))
}
