//! Domain error types for the documentation service.

use thiserror::Error;
use uuid::Uuid;

use crate::ai::ProviderError;

/// Errors surfaced by the store and the documentation workflow
#[derive(Error, Debug)]
pub enum DocError {
    #[error("documentation not found with id: {0}")]
    NotFound(Uuid),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("AI service unavailable: {source}")]
    AiUnavailable {
        #[source]
        source: ProviderError,
    },

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DocError {
    /// Wrap a provider failure without masking the underlying cause
    pub fn ai_unavailable(source: ProviderError) -> Self {
        DocError::AiUnavailable { source }
    }
}
