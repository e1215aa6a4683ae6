//! OpenAPI specification builder using utoipa.

use utoipa::OpenApi;

use crate::rest::dto::{GenerateDocRequest, HealthResponse, MessageResponse};
use crate::rest::error::ErrorResponse;
use crate::store::DocumentationRecord;

/// OpenAPI documentation for the docsmith REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Docsmith API",
        version = "0.1.0",
        description = "REST API for generating and managing AI-assisted API documentation.",
        license(name = "MIT")
    ),
    paths(
        crate::rest::routes::health::health,
        crate::rest::routes::docs::generate,
        crate::rest::routes::docs::list,
        crate::rest::routes::docs::get_one,
        crate::rest::routes::docs::delete,
        crate::rest::routes::projects::list,
        crate::rest::routes::projects::docs_for_project,
    ),
    components(
        schemas(
            DocumentationRecord,
            GenerateDocRequest,
            HealthResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Documentation", description = "Documentation generation and retrieval"),
        (name = "Projects", description = "Project-level views of documentation records"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI specification as a JSON string
    pub fn json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::openapi())
    }

    /// Generate the OpenAPI specification as a YAML string
    pub fn yaml() -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&Self::openapi())
    }
}
