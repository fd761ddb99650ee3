// Health check endpoint

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::app::AppState;

/// GET /health
///
/// The reputation service is optional, so its absence never makes the
/// service unhealthy.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let virustotal_status = if state.config.virustotal.is_enabled() {
        "configured"
    } else {
        "disabled"
    };

    Json(json!({
        "status": "healthy",
        "service": "phish-detector",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "components": {
            "virustotal": {
                "status": virustotal_status
            }
        }
    }))
}
