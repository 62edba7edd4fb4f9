//! Configuration types for the generation layer.
//!
//! All configuration is loaded from environment variables. The backend
//! needs a generation API endpoint and model, plus one API key per content
//! category -- a category with no key simply has enrichment disabled,
//! which is how operators switch categories on and off independently.

use crate::error::EnrichError;

/// Default generation API base URL (Gemini).
const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model.
const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Complete generation configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// The backend type (gemini or openai-compatible).
    pub backend_type: BackendType,
    /// Base API URL.
    pub api_url: String,
    /// Model identifier.
    pub model: String,
    /// Per-category API keys; `None` disables enrichment for the category.
    pub keys: CategoryKeys,
}

/// API keys per enrichable content category, plus the curiosity endpoint.
#[derive(Debug, Clone, Default)]
pub struct CategoryKeys {
    /// Key for Olympian deity enrichment.
    pub gods: Option<String>,
    /// Key for hero enrichment.
    pub heroes: Option<String>,
    /// Key for primordial-being enrichment.
    pub primordials: Option<String>,
    /// Key for minor-god enrichment.
    pub minors: Option<String>,
    /// Key for the voice-curiosity endpoint.
    pub curiosity: Option<String>,
}

impl CategoryKeys {
    /// Whether any category has generation configured.
    pub const fn any(&self) -> bool {
        self.gods.is_some()
            || self.heroes.is_some()
            || self.primordials.is_some()
            || self.minors.is_some()
            || self.curiosity.is_some()
    }
}

/// Supported generation backend types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// Google generative-language API (`:generateContent`).
    Gemini,
    /// `OpenAI`-compatible chat completions API.
    OpenAi,
}

impl GenerationConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables (all have defaults or disable a feature):
    /// - `LLM_BACKEND` -- `gemini` (default) or `openai`
    /// - `LLM_API_URL` -- base API URL
    /// - `LLM_MODEL` -- model identifier
    /// - `LLM_API_KEY_GODS` / `LLM_API_KEY_HEROES` /
    ///   `LLM_API_KEY_PRIMORDIALS` / `LLM_API_KEY_MINORS` -- per-category
    ///   enrichment keys
    /// - `LLM_API_KEY_CURIOSITY` -- key for the curiosity endpoint
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Backend`] if `LLM_BACKEND` names an unknown
    /// backend type.
    pub fn from_env() -> Result<Self, EnrichError> {
        let backend_str =
            std::env::var("LLM_BACKEND").unwrap_or_else(|_| "gemini".to_owned());
        let backend_type = match backend_str.to_lowercase().as_str() {
            "gemini" | "google" => BackendType::Gemini,
            "openai" | "deepseek" | "ollama" => BackendType::OpenAi,
            other => {
                return Err(EnrichError::Backend(format!(
                    "unknown backend type: {other}"
                )));
            }
        };

        let api_url =
            std::env::var("LLM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned());

        Ok(Self {
            backend_type,
            api_url,
            model,
            keys: CategoryKeys {
                gods: std::env::var("LLM_API_KEY_GODS").ok(),
                heroes: std::env::var("LLM_API_KEY_HEROES").ok(),
                primordials: std::env::var("LLM_API_KEY_PRIMORDIALS").ok(),
                minors: std::env::var("LLM_API_KEY_MINORS").ok(),
                curiosity: std::env::var("LLM_API_KEY_CURIOSITY").ok(),
            },
        })
    }

    /// A configuration with no keys, suitable for demo mode: every
    /// enrichment site is disabled and records are served as stored.
    pub fn disabled() -> Self {
        Self {
            backend_type: BackendType::Gemini,
            api_url: DEFAULT_API_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            keys: CategoryKeys::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_has_no_keys() {
        let config = GenerationConfig::disabled();
        assert!(config.keys.gods.is_none());
        assert!(config.keys.curiosity.is_none());
        assert_eq!(config.backend_type, BackendType::Gemini);
    }
}
