//! Documentation workflow.
//!
//! Orchestrates the generate-or-update operation: look up the record for a
//! (project, endpoint) pair, regenerate its documentation through the AI
//! provider, and persist only after generation succeeds. Provider failures
//! leave the store untouched.

use std::sync::Arc;

use uuid::Uuid;

use crate::ai::DocGenerator;
use crate::error::DocError;
use crate::store::{DocStore, DocumentationRecord};

/// Service wiring the record store to the AI generator
pub struct DocumentationService {
    store: Arc<DocStore>,
    generator: Arc<dyn DocGenerator>,
}

impl DocumentationService {
    pub fn new(store: Arc<DocStore>, generator: Arc<dyn DocGenerator>) -> Self {
        Self { store, generator }
    }

    /// Provider name for status reporting
    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Whether the AI provider has credentials
    pub fn generator_configured(&self) -> bool {
        self.generator.is_configured()
    }

    /// Generate (or regenerate) documentation for a (project, endpoint) pair.
    ///
    /// An existing record for the pair is reused with its source code
    /// replaced; otherwise a new record is constructed. The AI call runs on
    /// the detached record, without any store lock held, and the record is
    /// saved only after generation succeeds.
    pub async fn generate(
        &self,
        project_name: &str,
        api_endpoint: &str,
        source_code: &str,
    ) -> Result<DocumentationRecord, DocError> {
        if project_name.trim().is_empty() {
            return Err(DocError::Validation("project_name must not be empty".into()));
        }
        if api_endpoint.trim().is_empty() {
            return Err(DocError::Validation("api_endpoint must not be empty".into()));
        }

        let mut record = match self
            .store
            .find_by_project_and_endpoint(project_name, api_endpoint)
            .await
        {
            Some(mut existing) => {
                existing.source_code = source_code.to_string();
                existing
            }
            None => DocumentationRecord::new(project_name, api_endpoint, source_code),
        };

        let documentation = self
            .generator
            .generate(source_code, api_endpoint)
            .await
            .map_err(|e| {
                tracing::warn!(
                    provider = self.generator.name(),
                    project = project_name,
                    endpoint = api_endpoint,
                    error = %e,
                    "documentation generation failed"
                );
                DocError::ai_unavailable(e)
            })?;

        record.set_documentation(documentation);
        let saved = self.store.save(record).await?;

        tracing::info!(
            project = project_name,
            endpoint = api_endpoint,
            id = %saved.id.map(|id| id.to_string()).unwrap_or_default(),
            "documentation generated"
        );

        Ok(saved)
    }

    /// All records
    pub async fn all(&self) -> Vec<DocumentationRecord> {
        self.store.find_all().await
    }

    /// Records for one project
    pub async fn by_project(&self, project_name: &str) -> Vec<DocumentationRecord> {
        self.store.find_by_project(project_name).await
    }

    /// One record by id, failing with `NotFound` when absent
    pub async fn by_id(&self, id: Uuid) -> Result<DocumentationRecord, DocError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or(DocError::NotFound(id))
    }

    /// Distinct project names
    pub async fn projects(&self) -> Vec<String> {
        self.store.project_names().await
    }

    /// Delete a record by id, failing with `NotFound` when absent
    pub async fn delete(&self, id: Uuid) -> Result<(), DocError> {
        self.store.delete_by_id(id).await
    }
}
