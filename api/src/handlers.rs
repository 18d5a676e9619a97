use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Service health and metadata on the root route.
pub async fn index(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let uptime = state.started_at.elapsed().as_secs();
    let now = chrono::Utc::now().to_rfc3339();

    (
        StatusCode::OK,
        Json(json!({
            "message": "Service is up",
            "data": {
                "status": "ok",
                "version": env!("CARGO_PKG_VERSION"),
                "lang": state.translator.locale().as_str(),
                "uptime_secs": uptime,
                "timestamp": now,
            }
        })),
    )
}

/// Failure injection route: returns an explicit internal error instead of
/// panicking. The catch-panic layer stays reserved for genuine bugs.
pub async fn trigger_failure() -> ApiResult<()> {
    tracing::warn!("failure injection route hit");
    Err(ApiError::internal("Internal Server Error"))
}

/// Fallback for unknown routes.
pub async fn route_not_found() -> impl IntoResponse {
    ApiError::not_found("Route not found")
}
