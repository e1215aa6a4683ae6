//! Project listing endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::rest::state::ApiState;
use crate::store::DocumentationRecord;

/// List distinct project names
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "Projects",
    responses(
        (status = 200, description = "Distinct project names", body = Vec<String>)
    )
)]
pub async fn list(State(state): State<ApiState>) -> Json<Vec<String>> {
    Json(state.service.projects().await)
}

/// List documentation records for one project
#[utoipa::path(
    get,
    path = "/api/v1/projects/{name}/docs",
    tag = "Projects",
    params(
        ("name" = String, Path, description = "Project name")
    ),
    responses(
        (status = 200, description = "Records for the project", body = Vec<DocumentationRecord>)
    )
)]
pub async fn docs_for_project(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> Json<Vec<DocumentationRecord>> {
    Json(state.service.by_project(&name).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{DocGenerator, ProviderError};
    use crate::config::Config;
    use crate::service::DocumentationService;
    use crate::store::DocStore;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct FixedGenerator;

    #[async_trait]
    impl DocGenerator for FixedGenerator {
        fn name(&self) -> &str {
            "fixed"
        }

        fn is_configured(&self) -> bool {
            true
        }

        async fn generate(&self, _: &str, _: &str) -> Result<String, ProviderError> {
            Ok("docs".to_string())
        }
    }

    async fn make_state(temp_dir: &TempDir) -> ApiState {
        let store = Arc::new(DocStore::open(temp_dir.path()).await.unwrap());
        let service = Arc::new(DocumentationService::new(store, Arc::new(FixedGenerator)));
        ApiState::new(service, Config::default())
    }

    #[tokio::test]
    async fn test_projects_listed_once() {
        let temp_dir = TempDir::new().unwrap();
        let state = make_state(&temp_dir).await;

        state
            .service
            .generate("shop", "/cart", "a")
            .await
            .unwrap();
        state
            .service
            .generate("shop", "/checkout", "b")
            .await
            .unwrap();

        let resp = list(State(state)).await;
        assert_eq!(resp.0, vec!["shop"]);
    }

    #[tokio::test]
    async fn test_docs_for_project() {
        let temp_dir = TempDir::new().unwrap();
        let state = make_state(&temp_dir).await;

        state
            .service
            .generate("shop", "/cart", "a")
            .await
            .unwrap();

        let resp = docs_for_project(State(state.clone()), Path("shop".to_string())).await;
        assert_eq!(resp.0.len(), 1);

        let resp = docs_for_project(State(state), Path("missing".to_string())).await;
        assert!(resp.0.is_empty());
    }
}
