//! Health check endpoint.

use axum::{extract::State, Json};

use crate::rest::dto::HealthResponse;
use crate::rest::state::ApiState;

/// Health check with AI provider status.
///
/// Reports the configured provider and a boolean configured flag only;
/// credential material never appears in the response.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ai_provider: state.service.generator_name().to_string(),
        ai_configured: state.service.generator_configured(),
    })
}
