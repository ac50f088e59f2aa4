use axum::response::Json;

use crate::types::HealthStatus;

/// `GET /health`: fixed liveness payload, no dependency checks.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_string(),
        message: "Spotify validation service running".to_string(),
    })
}
