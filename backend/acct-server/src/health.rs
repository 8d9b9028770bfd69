use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde_json::json;

/// GET /health - Component status including a database round trip
pub async fn health(State(state): State<AppState>) -> Response {
    let (status, database) = match state.users.ping().await {
        Ok(()) => (StatusCode::OK, "operational"),
        Err(e) => {
            error!("Health check: database ping failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let health = json!({
        "status": if status == StatusCode::OK { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "auth": "operational",
        },
        "timestamp": humantime::format_rfc3339_seconds(std::time::SystemTime::now()).to_string(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can the store serve requests?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.users.ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            error!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
        }
    }
}
