mod assessment;
mod auth;
mod config;
mod deep_dive;
mod errors;
mod goals;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::{CredentialVerifier, SupabaseAuth};
use crate::config::Config;
use crate::llm_client::invoker::{ModelConfig, StructuredPromptInvoker};
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; only unparsable values are fatal
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting career API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client and the structured invoker around it
    let gemini = GeminiClient::new(config.llm_timeout)?;
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; AI endpoints will serve fallback responses");
    }
    let invoker = StructuredPromptInvoker::new(
        Arc::new(gemini),
        ModelConfig {
            model: llm_client::MODEL.to_string(),
            api_key: config.gemini_api_key.clone(),
        },
        config.json_extraction.extractor(),
    );
    info!(
        "LLM client initialized (model: {}, key present: {}, extraction: {:?}, timeout: {:?})",
        invoker.model_name(),
        invoker.has_credential(),
        config.json_extraction,
        config.llm_timeout
    );

    // Initialize auth client
    let auth: Option<Arc<dyn CredentialVerifier>> = match &config.supabase {
        Some(supabase) => {
            info!(
                "Supabase auth initialized ({}, timeout: {:?})",
                supabase.url, supabase.timeout
            );
            Some(Arc::new(SupabaseAuth::new(supabase)?))
        }
        None => {
            warn!("SUPABASE_URL/SUPABASE_ANON_KEY not set; sign-in is disabled");
            None
        }
    };

    // Build app state
    let state = AppState {
        invoker,
        auth,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
