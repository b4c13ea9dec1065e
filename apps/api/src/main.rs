mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod outreach;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, GenerationMode};
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::outreach::assembler::PackAssembler;
use crate::outreach::fit_scoring::HeuristicFitScorer;
use crate::outreach::generative::GenerationStrategy;
use crate::outreach::store::PgOutreachStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
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

    info!("Starting Sponsorship Copilot API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgOutreachStore::new(db));

    // Template-only unless GENERATION_MODE=llm with a supported provider
    let strategy = build_generation_strategy(&config)?;

    let assembler = PackAssembler::new(
        store,
        Arc::new(HeuristicFitScorer),
        strategy,
        config.sender_name.clone(),
    );
    info!("Pack assembler ready (generation: {})", assembler.strategy().label());

    let state = AppState {
        assembler: Arc::new(assembler),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS once the frontend origin is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_generation_strategy(config: &Config) -> Result<GenerationStrategy> {
    if !config.llm_override_enabled() {
        if config.generation_mode == GenerationMode::Llm {
            warn!(
                "GENERATION_MODE=llm but LLM_PROVIDER '{}' is not supported; using templates only",
                config.llm_provider
            );
        }
        return Ok(GenerationStrategy::TemplateOnly);
    }

    let timeout = Duration::from_secs(config.llm_timeout_secs);
    let llm = LlmClient::new(
        config.ollama_base_url.clone(),
        config.ollama_model.clone(),
        config.ollama_temperature,
        timeout,
    )?;
    info!(
        "LLM client initialized (model: {}, base_url: {})",
        llm.model(),
        config.ollama_base_url
    );

    Ok(GenerationStrategy::Generative {
        generator: Arc::new(llm),
        timeout,
    })
}
