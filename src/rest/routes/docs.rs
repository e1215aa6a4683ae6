//! Documentation record endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::rest::dto::{GenerateDocRequest, MessageResponse};
use crate::rest::error::{ApiError, ErrorResponse};
use crate::rest::state::ApiState;
use crate::store::DocumentationRecord;

/// Generate documentation for an endpoint
#[utoipa::path(
    post,
    path = "/api/v1/docs/generate",
    tag = "Documentation",
    request_body = GenerateDocRequest,
    responses(
        (status = 200, description = "Documentation generated", body = DocumentationRecord),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 503, description = "AI provider unavailable", body = ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<ApiState>,
    Json(request): Json<GenerateDocRequest>,
) -> Result<Json<DocumentationRecord>, ApiError> {
    let record = state
        .service
        .generate(
            &request.project_name,
            &request.api_endpoint,
            &request.source_code,
        )
        .await?;

    Ok(Json(record))
}

/// List all documentation records
#[utoipa::path(
    get,
    path = "/api/v1/docs",
    tag = "Documentation",
    responses(
        (status = 200, description = "All documentation records", body = Vec<DocumentationRecord>)
    )
)]
pub async fn list(State(state): State<ApiState>) -> Json<Vec<DocumentationRecord>> {
    Json(state.service.all().await)
}

/// Get one documentation record by id
#[utoipa::path(
    get,
    path = "/api/v1/docs/{id}",
    tag = "Documentation",
    params(
        ("id" = Uuid, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "Documentation record", body = DocumentationRecord),
        (status = 404, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn get_one(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentationRecord>, ApiError> {
    let record = state.service.by_id(id).await?;
    Ok(Json(record))
}

/// Delete a documentation record
#[utoipa::path(
    delete,
    path = "/api/v1/docs/{id}",
    tag = "Documentation",
    params(
        ("id" = Uuid, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "Record deleted", body = MessageResponse),
        (status = 404, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn delete(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Documentation deleted successfully".to_string(),
    }))
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
            Ok("generated docs".to_string())
        }
    }

    async fn make_state(temp_dir: &TempDir) -> ApiState {
        let store = Arc::new(DocStore::open(temp_dir.path()).await.unwrap());
        let service = Arc::new(DocumentationService::new(store, Arc::new(FixedGenerator)));
        ApiState::new(service, Config::default())
    }

    #[tokio::test]
    async fn test_generate_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let state = make_state(&temp_dir).await;

        let request = GenerateDocRequest {
            project_name: "shop".to_string(),
            api_endpoint: "/cart".to_string(),
            source_code: "fn add() {}".to_string(),
        };
        let record = generate(State(state.clone()), Json(request)).await.unwrap();
        assert_eq!(
            record.generated_documentation.as_deref(),
            Some("generated docs")
        );

        let id = record.id.unwrap();
        let fetched = get_one(State(state), Path(id)).await.unwrap();
        assert_eq!(fetched.project_name, "shop");
    }

    #[tokio::test]
    async fn test_get_one_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let state = make_state(&temp_dir).await;

        let result = get_one(State(state), Path(Uuid::new_v4())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let state = make_state(&temp_dir).await;

        let result = delete(State(state), Path(Uuid::new_v4())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
