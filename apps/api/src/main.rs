mod config;
mod content;
mod errors;
mod llm_client;
mod pipeline;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::provider::{ContentProvider, GenerativeProvider, TemplateProvider};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pagesmith API v{}", env!("CARGO_PKG_VERSION"));

    // One-time strategy selection: the credential toggles the generative
    // provider; its absence is the normal offline/demo mode.
    let provider: Arc<dyn ContentProvider> = match &config.openai_api_key {
        Some(key) => {
            let llm = LlmClient::with_base_url(key.clone(), config.openai_base_url.clone());
            info!(
                "Generative content provider active (model: {})",
                llm_client::MODEL
            );
            Arc::new(GenerativeProvider::new(llm))
        }
        None => {
            warn!("OPENAI_API_KEY not set; using template content provider");
            Arc::new(TemplateProvider)
        }
    };

    let state = AppState {
        provider,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
