//! Generation backend abstraction and implementations.
//!
//! Defines an enum-based dispatch for generation backends, avoiding the
//! dyn-compatibility issues with async trait methods. Concrete
//! implementations exist for the Google generative-language API and for
//! `OpenAI`-compatible chat completions APIs, plus a canned backend for
//! tests and offline runs. All backends communicate over HTTP via
//! `reqwest`.
//!
//! The enrichment layer does not care which model is behind the API -- it
//! sends a prompt and expects a short text reply.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::{BackendType, GenerationConfig};
use crate::error::EnrichError;

/// A single generation call: the rendered prompt plus sampling bounds.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The full prompt text.
    pub text: String,
    /// Output token budget.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

// ---------------------------------------------------------------------------
// Unified backend enum (dyn-compatible alternative to async trait)
// ---------------------------------------------------------------------------

/// A generation backend that can process a prompt and return text.
///
/// Uses enum dispatch instead of trait objects because async methods
/// are not dyn-compatible in Rust.
pub enum LlmBackend {
    /// Google generative-language API.
    Gemini(GeminiBackend),
    /// `OpenAI`-compatible chat completions API.
    OpenAi(OpenAiBackend),
    /// Fixed-response backend for tests and offline development.
    Canned(CannedBackend),
}

impl LlmBackend {
    /// Create a backend for the configured type with the given API key.
    pub fn from_config(config: &GenerationConfig, api_key: &str) -> Self {
        match config.backend_type {
            BackendType::Gemini => Self::Gemini(GeminiBackend::new(config, api_key)),
            BackendType::OpenAi => Self::OpenAi(OpenAiBackend::new(config, api_key)),
        }
    }

    /// Send a prompt to the generation API and return the reply text.
    ///
    /// Dispatches to the concrete backend implementation.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Backend`] if the HTTP call fails and
    /// [`EnrichError::MissingContent`] if the reply holds no usable text.
    pub async fn complete(&self, request: &GenerationRequest) -> Result<String, EnrichError> {
        match self {
            Self::Gemini(backend) => backend.complete(request).await,
            Self::OpenAi(backend) => backend.complete(request).await,
            Self::Canned(backend) => backend.complete(),
        }
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &str {
        match self {
            Self::Gemini(_) => "gemini",
            Self::OpenAi(_) => "openai-compatible",
            Self::Canned(_) => "canned",
        }
    }
}

// ---------------------------------------------------------------------------
// Google generative-language backend
// ---------------------------------------------------------------------------

/// Backend for the Google generative-language API.
///
/// Sends requests to `{api_url}/models/{model}:generateContent` with the
/// API key as a query parameter. The reply text lives at
/// `candidates[0].content.parts[0].text`.
pub struct GeminiBackend {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    /// Create a new generative-language backend.
    pub fn new(config: &GenerationConfig, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: api_key.to_owned(),
            model: config.model.clone(),
        }
    }

    /// Send a prompt and return the reply text.
    async fn complete(&self, request: &GenerationRequest) -> Result<String, EnrichError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_url, self.model, self.api_key
        );

        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": request.text }]
            }],
            "generationConfig": {
                "temperature": request.temperature,
                "maxOutputTokens": request.max_tokens
            }
        });

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| EnrichError::Backend(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(EnrichError::Backend(format!(
                "Gemini returned {status}: {error_body}"
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| EnrichError::Backend(format!("Gemini response parse failed: {e}")))?;

        extract_gemini_content(&json)
    }
}

/// Extract the text content from a generative-language API response.
fn extract_gemini_content(json: &serde_json::Value) -> Result<String, EnrichError> {
    json.get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| {
            EnrichError::MissingContent(
                "Gemini response missing candidates[0].content.parts[0].text".to_owned(),
            )
        })
}

// ---------------------------------------------------------------------------
// OpenAI-compatible backend
// ---------------------------------------------------------------------------

/// Backend for `OpenAI`-compatible chat completions APIs.
///
/// Works with `OpenAI`, `DeepSeek`, and Ollama endpoints.
/// Sends requests to `{api_url}/chat/completions`.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    /// Create a new `OpenAI`-compatible backend.
    pub fn new(config: &GenerationConfig, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: api_key.to_owned(),
            model: config.model.clone(),
        }
    }

    /// Send a prompt and return the reply text.
    async fn complete(&self, request: &GenerationRequest) -> Result<String, EnrichError> {
        let url = format!("{}/chat/completions", self.api_url);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": request.text}
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| EnrichError::Backend(format!("OpenAI request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(EnrichError::Backend(format!(
                "OpenAI returned {status}: {error_body}"
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| EnrichError::Backend(format!("OpenAI response parse failed: {e}")))?;

        extract_openai_content(&json)
    }
}

/// Extract the text content from an `OpenAI` chat completions response.
fn extract_openai_content(json: &serde_json::Value) -> Result<String, EnrichError> {
    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| {
            EnrichError::MissingContent(
                "OpenAI response missing choices[0].message.content".to_owned(),
            )
        })
}

// ---------------------------------------------------------------------------
// Canned backend (tests, offline development)
// ---------------------------------------------------------------------------

/// The behavior a [`CannedBackend`] simulates.
#[derive(Debug, Clone)]
enum CannedReply {
    /// Always answer with this text.
    Text(String),
    /// Simulate a reply with no usable content.
    Missing,
    /// Simulate an upstream HTTP failure.
    Failing(String),
}

/// Fixed-response backend that counts its calls.
///
/// Used by the test suites to verify the enrichment policy (a record with
/// a long description must trigger zero calls) and by offline development
/// runs.
pub struct CannedBackend {
    reply: CannedReply,
    calls: Arc<AtomicUsize>,
}

impl CannedBackend {
    /// A backend that always answers with `text`.
    pub fn replying(text: &str) -> Self {
        Self {
            reply: CannedReply::Text(text.to_owned()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A backend that answers with no usable content.
    pub fn missing() -> Self {
        Self {
            reply: CannedReply::Missing,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A backend that simulates an upstream HTTP failure.
    pub fn failing(message: &str) -> Self {
        Self {
            reply: CannedReply::Failing(message.to_owned()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A shared handle to the call counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    fn complete(&self) -> Result<String, EnrichError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            CannedReply::Text(text) => Ok(text.clone()),
            CannedReply::Missing => Err(EnrichError::MissingContent(
                "canned backend configured with no content".to_owned(),
            )),
            CannedReply::Failing(message) => Err(EnrichError::Backend(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_gemini_content_valid() {
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Poseidon criou os cavalos." }]
                }
            }]
        });
        let result = extract_gemini_content(&json);
        assert!(result.is_ok());
        assert!(result.unwrap_or_default().contains("cavalos"));
    }

    #[test]
    fn extract_gemini_content_missing_candidates() {
        let json = serde_json::json!({"promptFeedback": {"blockReason": "SAFETY"}});
        let result = extract_gemini_content(&json);
        assert!(matches!(result, Err(EnrichError::MissingContent(_))));
    }

    #[test]
    fn extract_openai_content_valid() {
        let json = serde_json::json!({
            "choices": [{
                "message": { "content": "{\"descricao\": \"Deus dos mares\"}" }
            }]
        });
        let result = extract_openai_content(&json);
        assert!(result.is_ok());
    }

    #[test]
    fn extract_openai_content_missing() {
        let json = serde_json::json!({"error": "rate_limit"});
        let result = extract_openai_content(&json);
        assert!(result.is_err());
    }

    #[test]
    fn from_config_dispatches_correctly() {
        let mut config = crate::config::GenerationConfig::disabled();
        let backend = LlmBackend::from_config(&config, "test-key");
        assert_eq!(backend.name(), "gemini");

        config.backend_type = BackendType::OpenAi;
        let backend = LlmBackend::from_config(&config, "test-key");
        assert_eq!(backend.name(), "openai-compatible");
    }

    #[tokio::test]
    async fn canned_backend_counts_calls() {
        let backend = CannedBackend::replying("ok");
        let counter = backend.counter();
        let backend = LlmBackend::Canned(backend);

        let request = GenerationRequest {
            text: String::from("prompt"),
            max_tokens: 100,
            temperature: 0.7,
        };
        let reply = backend.complete(&request).await;
        assert_eq!(reply.unwrap_or_default(), "ok");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
