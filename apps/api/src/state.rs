use std::sync::Arc;

use crate::llm_client::CompletionClient;
use crate::profiles::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-request data: profiles are re-read and completions re-issued
/// on every request.
#[derive(Clone)]
pub struct AppState {
    /// Completion provider. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn CompletionClient>,
    pub profiles: ProfileStore,
}
