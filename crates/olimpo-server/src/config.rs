//! Server configuration loaded from environment variables.

use olimpo_enrich::GenerationConfig;

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host address to bind to.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
    /// `PostgreSQL` connection string; absent means demo mode with the
    /// built-in sample catalogue.
    pub database_url: Option<String>,
    /// Bearer secret for the curiosity endpoint.
    pub curiosity_token: String,
    /// Optional prompt-template override directory.
    pub templates_dir: Option<String>,
    /// Generation backend configuration and per-category API keys.
    pub generation: GenerationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `CURIOSITY_TOKEN` -- bearer secret for `/api/curiosity`
    ///
    /// Optional variables:
    /// - `HOST` -- bind address (default `0.0.0.0`)
    /// - `PORT` -- listen port (default 8090)
    /// - `DATABASE_URL` -- `PostgreSQL` connection string; absent serves
    ///   the built-in sample catalogue from memory
    /// - `TEMPLATES_DIR` -- prompt-template override directory
    /// - `LLM_BACKEND`, `LLM_API_URL`, `LLM_MODEL` -- generation backend
    /// - `LLM_API_KEY_GODS`, `LLM_API_KEY_HEROES`, `LLM_API_KEY_PRIMORDIALS`,
    ///   `LLM_API_KEY_MINORS`, `LLM_API_KEY_CURIOSITY` -- per-category keys;
    ///   a missing key disables generation for that category only
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `CURIOSITY_TOKEN` is absent, `PORT` is
    /// not a number, or the generation backend type is unknown.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| String::from("0.0.0.0"));

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| String::from("8090"))
            .parse()
            .map_err(|e| ConfigError(format!("invalid PORT: {e}")))?;

        let database_url = std::env::var("DATABASE_URL").ok();

        let curiosity_token = std::env::var("CURIOSITY_TOKEN")
            .map_err(|_| ConfigError(String::from("CURIOSITY_TOKEN is required")))?;

        let templates_dir = std::env::var("TEMPLATES_DIR").ok();

        let generation =
            GenerationConfig::from_env().map_err(|e| ConfigError(e.to_string()))?;

        Ok(Self {
            host,
            port,
            database_url,
            curiosity_token,
            templates_dir,
            generation,
        })
    }
}

/// A missing or malformed environment variable.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(pub String);
