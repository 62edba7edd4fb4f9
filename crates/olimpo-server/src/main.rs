//! Server entry point for the Olimpo mythology portal backend.
//!
//! Wires the content store, the generation layer, and the HTTP API
//! together:
//!
//! ```text
//! PostgreSQL / sample catalogue --> Store --> Axum handlers --> JSON
//!                                      Enricher ^ (thin records, curiosity)
//! ```
//!
//! With a `DATABASE_URL` the server connects to `PostgreSQL` and runs the
//! embedded migrations; without one it serves the built-in sample
//! catalogue from memory (demo mode).

mod config;

use std::sync::Arc;

use olimpo_api::{AppState, ServerConfig, start_server};
use olimpo_db::{PostgresPool, Store, sample_store};
use olimpo_enrich::{Enricher, PromptEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// connects the content store, builds the enricher, then serves HTTP
/// until the process is terminated.
///
/// # Errors
///
/// Returns an error if initialization or serving fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("olimpo-server starting");

    // Load configuration from environment
    let config = AppConfig::from_env()?;
    info!(
        host = config.host,
        port = config.port,
        generation_backend = ?config.generation.backend_type,
        generation_enabled = config.generation.keys.any(),
        "configuration loaded"
    );

    // Connect the content store
    let store = match &config.database_url {
        Some(url) => {
            let pool = PostgresPool::connect_url(url).await?;
            pool.run_migrations().await?;
            Store::postgres(pool)
        }
        None => Store::memory(sample_store()),
    };
    info!(store = store.name(), "content store ready");

    // Load prompt templates and build the enricher
    let engine = match &config.templates_dir {
        Some(dir) => PromptEngine::from_dir(dir)?,
        None => PromptEngine::builtin()?,
    };
    let enricher = Enricher::from_config(&config.generation, engine);

    // Assemble state and serve
    let state = Arc::new(AppState::new(store, enricher, config.curiosity_token));

    let server_config = ServerConfig {
        host: config.host,
        port: config.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}
