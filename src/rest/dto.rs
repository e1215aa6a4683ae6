//! Data Transfer Objects for the REST API.
//!
//! Documentation records serialize directly as responses; the DTOs here
//! cover requests and the small envelope responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to generate (or regenerate) documentation for an endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateDocRequest {
    pub project_name: String,
    pub api_endpoint: String,
    pub source_code: String,
}

/// Health check response.
///
/// Reports only whether an AI provider key is configured; no credential
/// material is ever echoed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub ai_provider: String,
    pub ai_configured: bool,
}

/// Confirmation body for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
