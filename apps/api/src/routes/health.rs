use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "career-api";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

/// GET /health
/// Liveness only: never touches the model or the auth database.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        service: SERVICE_NAME,
    })
}
