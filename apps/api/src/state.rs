use std::sync::Arc;

use crate::auth::CredentialVerifier;
use crate::config::Config;
use crate::llm_client::invoker::StructuredPromptInvoker;

/// Shared application state injected into all route handlers via Axum extractors.
/// Clients are built once in `main` and cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub invoker: StructuredPromptInvoker,
    /// `None` when the auth database is not configured; sign-in then answers 503.
    pub auth: Option<Arc<dyn CredentialVerifier>>,
    pub config: Config,
}
