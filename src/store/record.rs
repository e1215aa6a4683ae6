//! Documentation record entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted documentation entry for one (project, endpoint) pair.
///
/// The (`project_name`, `api_endpoint`) pair is the natural key; at most one
/// record exists per pair. `id` is a surrogate key assigned by the store on
/// first save and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentationRecord {
    /// Surrogate identifier, None until the record is first saved
    pub id: Option<Uuid>,
    pub project_name: String,
    pub api_endpoint: String,
    /// Caller-supplied source code, overwritten on regeneration
    pub source_code: String,
    /// AI-generated documentation, None until first generation
    pub generated_documentation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DocumentationRecord {
    /// Create a new unsaved record for a (project, endpoint) pair
    pub fn new(
        project_name: impl Into<String>,
        api_endpoint: impl Into<String>,
        source_code: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            project_name: project_name.into(),
            api_endpoint: api_endpoint.into(),
            source_code: source_code.into(),
            generated_documentation: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the generated documentation and refresh `updated_at`
    pub fn set_documentation(&mut self, text: impl Into<String>) {
        self.generated_documentation = Some(text.into());
        self.updated_at = Utc::now();
    }

    /// Check whether this record documents the given (project, endpoint) pair
    pub fn matches_key(&self, project_name: &str, api_endpoint: &str) -> bool {
        self.project_name == project_name && self.api_endpoint == api_endpoint
    }
}
