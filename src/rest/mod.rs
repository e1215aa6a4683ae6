//! REST API for the documentation service.
//!
//! Exposes generate/read/list/delete operations over the documentation
//! workflow, plus a health check and a Swagger UI at `/docs`.

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod dto;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::ApiState;

/// Build the API router with all routes
pub fn build_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(routes::health::health))
        // Documentation endpoints
        .route("/api/v1/docs/generate", post(routes::docs::generate))
        .route("/api/v1/docs", get(routes::docs::list))
        .route("/api/v1/docs/:id", get(routes::docs::get_one))
        .route("/api/v1/docs/:id", delete(routes::docs::delete))
        // Project endpoints
        .route("/api/v1/projects", get(routes::projects::list))
        .route(
            "/api/v1/projects/:name/docs",
            get(routes::projects::docs_for_project),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the REST API server
pub async fn serve(state: ApiState, port: u16) -> Result<()> {
    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("REST API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AnthropicGenerator, DocGenerator};
    use crate::config::Config;
    use crate::service::DocumentationService;
    use crate::store::DocStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_build_router() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default();
        let store = Arc::new(DocStore::open(temp_dir.path()).await.unwrap());
        let generator: Arc<dyn DocGenerator> = Arc::new(
            AnthropicGenerator::new(
                config
                    .ai
                    .generator_config(String::new(), "claude-3-5-haiku-latest"),
            )
            .unwrap(),
        );
        let service = Arc::new(DocumentationService::new(store, generator));
        let state = ApiState::new(service, config);
        let _router = build_router(state);
        // Router builds without panicking
    }
}
