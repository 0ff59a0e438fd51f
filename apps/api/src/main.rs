mod clock;
mod config;
mod content;
mod emit;
mod errors;
mod generation;
mod layout;
mod llm_client;
mod models;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clock::SystemClock;
use crate::config::Config;
use crate::layout::{default_page_config, PdfBackend};
use crate::llm_client::{GeminiClient, GenerativeTextAdapter, RetryPolicy};
use crate::routes::build_router;
use crate::session::store::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; malformed values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generative text adapter when a credential is configured
    let generator = match config.generative_credential() {
        Ok(api_key) => {
            let client = GeminiClient::new(
                api_key.to_string(),
                Duration::from_secs(config.llm_timeout_secs),
            )?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(GenerativeTextAdapter::new(
                Arc::new(client),
                RetryPolicy::default(),
            ))
        }
        Err(e) => {
            warn!("{e}");
            None
        }
    };

    // Layout backend: A4 portrait with the built-in Helvetica fonts
    let page_config = default_page_config();
    info!(
        "Layout page config: {}x{} mm",
        page_config.page_width_mm, page_config.page_height_mm
    );

    // Build app state
    info!("Idle sessions expire after {}s", config.session_ttl_secs);
    let state = AppState {
        sessions: SessionStore::new(Duration::from_secs(config.session_ttl_secs)),
        generator,
        clock: Arc::new(SystemClock),
        layout: Arc::new(PdfBackend::new(page_config)),
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
