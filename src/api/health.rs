use axum::{http::StatusCode, response::IntoResponse};

/// GET /api/v1/healthz - Liveness check
pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
