//! Shared state for the REST server.

use std::sync::Arc;

use crate::config::Config;
use crate::service::DocumentationService;

/// Shared state for the REST API
#[derive(Clone)]
pub struct ApiState {
    /// Documentation workflow (store + AI generator)
    pub service: Arc<DocumentationService>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl ApiState {
    pub fn new(service: Arc<DocumentationService>, config: Config) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }
}
