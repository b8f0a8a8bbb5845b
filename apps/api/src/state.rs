use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::records::RecordCache;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub records: Arc<RecordCache>,
    /// Pluggable generator. Production: `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    pub sessions: SessionStore,
}
