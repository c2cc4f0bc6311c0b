use axum::Json;
use serde::Serialize;

/// Status reported by the liveness endpoint.
pub const HEALTH_STATUS: &str = "OK WORKING";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: HEALTH_STATUS,
        }
    }
}

/// `GET /health`. Any request body is ignored.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
