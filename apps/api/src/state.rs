use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// There is no database, cache, or cross-request storage: every analysis is
/// request-local, so the state only carries configuration and the outbound
/// recommendation client.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Recommendation generator, injected explicitly at startup.
    /// `None` when no API key is configured; reports then degrade gracefully.
    pub recommender: Option<Arc<dyn Recommender>>,
}

impl AppState {
    pub fn recommender(&self) -> Option<&dyn Recommender> {
        self.recommender.as_deref()
    }
}
