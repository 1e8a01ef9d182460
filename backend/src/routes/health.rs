use axum::Json;
use schemars::JsonSchema;
use serde::Serialize;

/// Liveness payload
#[derive(Debug, Serialize, JsonSchema)]
pub struct HealthResponse {
    ok: bool,
    /// Fixed status line
    message: &'static str,
}

/// Health check endpoint
///
/// Always answers `200` while the process is serving requests.
#[allow(clippy::unused_async)]
pub async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        message: "Body measurement API is running",
    })
}
