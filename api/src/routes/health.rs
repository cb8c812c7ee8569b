use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;

use crate::state::AppState;

/// Builds the root route group: a single unauthenticated liveness endpoint.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(liveness))
}

/// GET /
///
/// Static liveness payload, no auth required.
///
/// ### Response
/// - `200 OK`
/// ```json
/// { "message": "ok", "autor": "ADSO 2847248" }
/// ```
async fn liveness() -> impl IntoResponse {
    Json(json!({
        "message": "ok",
        "autor": "ADSO 2847248",
    }))
}
