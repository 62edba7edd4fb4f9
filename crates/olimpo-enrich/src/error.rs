//! Error types for the enrichment layer.
//!
//! Uses `thiserror` for typed errors that surface through the generation
//! pipeline: template rendering, backend HTTP calls, response parsing.
//!
//! The distinction between [`EnrichError::Backend`] and
//! [`EnrichError::MissingContent`] matters at the API seam: an unreachable
//! or failing upstream is a hard error for the curiosity endpoint, while a
//! reply with no usable text falls back to a canned sentence.

/// Errors that can occur while calling the generation API.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    /// Failed to render a prompt template.
    #[error("template render error: {0}")]
    Template(String),

    /// The generation backend returned an HTTP error or was unreachable.
    /// Carries the upstream status and body for logging and relaying.
    #[error("generation backend error: {0}")]
    Backend(String),

    /// The backend answered, but the reply carried no usable text.
    #[error("generation response missing content: {0}")]
    MissingContent(String),

    /// The generated text could not be parsed into a profile.
    #[error("generated profile parse error: {0}")]
    Parse(String),

    /// No backend is configured for the requested category.
    #[error("enrichment disabled: {0}")]
    Disabled(String),

    /// Serialization or deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
