//! Enrichment policy and the curiosity relay.
//!
//! [`Enricher`] owns one optional backend per content category (a category
//! with no configured API key is simply never enriched) plus the backend
//! for the voice-curiosity endpoint. Enrichment is best-effort: any
//! failure is logged and the stored record is returned unchanged. The
//! curiosity relay is stricter -- an upstream HTTP failure propagates to
//! the caller.

use olimpo_types::{ContentCategory, MythEntity};
use tracing::warn;

use crate::config::GenerationConfig;
use crate::error::EnrichError;
use crate::llm::{GenerationRequest, LlmBackend};
use crate::merge::merge_profile;
use crate::parse::parse_generated_profile;
use crate::prompt::PromptEngine;

/// Descriptions shorter than this many characters are considered thin and
/// eligible for enrichment. Counted in `char`s, not bytes -- the content
/// is Portuguese and accented text would overcount otherwise.
pub const MIN_DESCRIPTION_CHARS: usize = 100;

/// Output token budget for an enrichment call.
const ENRICH_MAX_TOKENS: u32 = 512;

/// Output token budget for a curiosity call.
const CURIOSITY_MAX_TOKENS: u32 = 200;

/// Sampling temperature for both call kinds.
const TEMPERATURE: f32 = 0.7;

/// Sentence returned when the curiosity call yields no usable text.
pub const CURIOSITY_FALLBACK: &str = "Não foi possível gerar uma curiosidade no momento.";

/// Whether a stored description is thin enough to enrich.
pub fn needs_enrichment(descricao: &str) -> bool {
    descricao.chars().count() < MIN_DESCRIPTION_CHARS
}

/// Per-category generation backends and the enrichment policy.
pub struct Enricher {
    engine: PromptEngine,
    gods: Option<LlmBackend>,
    heroes: Option<LlmBackend>,
    primordials: Option<LlmBackend>,
    minors: Option<LlmBackend>,
    curiosity: Option<LlmBackend>,
}

impl Enricher {
    /// Build an enricher from configuration.
    ///
    /// Each category gets a backend only if its API key is configured.
    pub fn from_config(config: &GenerationConfig, engine: PromptEngine) -> Self {
        let backend = |key: &Option<String>| {
            key.as_deref()
                .map(|k| LlmBackend::from_config(config, k))
        };

        Self {
            gods: backend(&config.keys.gods),
            heroes: backend(&config.keys.heroes),
            primordials: backend(&config.keys.primordials),
            minors: backend(&config.keys.minors),
            curiosity: backend(&config.keys.curiosity),
            engine,
        }
    }

    /// An enricher with no backends: every record is served as stored and
    /// curiosity calls fail with [`EnrichError::Disabled`].
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Template`] if the compiled-in templates fail
    /// to load.
    pub fn disabled() -> Result<Self, EnrichError> {
        Ok(Self {
            engine: PromptEngine::builtin()?,
            gods: None,
            heroes: None,
            primordials: None,
            minors: None,
            curiosity: None,
        })
    }

    /// Replace the backend for a category. Used by tests and offline runs
    /// to install a canned backend.
    #[must_use]
    pub fn with_backend(mut self, category: ContentCategory, backend: LlmBackend) -> Self {
        match category {
            ContentCategory::Olympian => self.gods = Some(backend),
            ContentCategory::Hero => self.heroes = Some(backend),
            ContentCategory::Primordial => self.primordials = Some(backend),
            ContentCategory::Minor => self.minors = Some(backend),
        }
        self
    }

    /// Replace the curiosity backend.
    #[must_use]
    pub fn with_curiosity_backend(mut self, backend: LlmBackend) -> Self {
        self.curiosity = Some(backend);
        self
    }

    /// Enrich a thin record in memory, best-effort.
    ///
    /// Returns the record unchanged when its description is already long
    /// enough, when the category has no backend, or when any step of the
    /// generation pipeline fails. Nothing is ever written back to the
    /// store; repeated requests for the same thin record regenerate.
    pub async fn enrich_entity(
        &self,
        category: ContentCategory,
        entity: MythEntity,
    ) -> MythEntity {
        if !needs_enrichment(&entity.descricao) {
            return entity;
        }

        let Some(backend) = self.backend_for(category) else {
            return entity;
        };

        match self.generate_profile(backend, &entity).await {
            Ok(profile) => merge_profile(entity, profile),
            Err(e) => {
                warn!(
                    nome = %entity.nome,
                    categoria = %category,
                    error = %e,
                    "enrichment failed, serving stored record"
                );
                entity
            }
        }
    }

    /// Relay a speech transcript to the generation API and return a short
    /// curiosity fact.
    ///
    /// A reply with no usable text yields the fixed fallback sentence.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Disabled`] when no curiosity backend is
    /// configured and [`EnrichError::Backend`] when the upstream call
    /// fails; the caller surfaces both as a server error.
    pub async fn curiosity_fact(&self, transcribed_text: &str) -> Result<String, EnrichError> {
        let backend = self.curiosity.as_ref().ok_or_else(|| {
            EnrichError::Disabled("curiosity generation key is not configured".to_owned())
        })?;

        let request = GenerationRequest {
            text: self.engine.render_curiosity(transcribed_text)?,
            max_tokens: CURIOSITY_MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        match backend.complete(&request).await {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) | Err(EnrichError::MissingContent(_)) => Ok(CURIOSITY_FALLBACK.to_owned()),
            Err(e) => Err(e),
        }
    }

    /// Run the generation pipeline for one entity.
    async fn generate_profile(
        &self,
        backend: &LlmBackend,
        entity: &MythEntity,
    ) -> Result<crate::parse::GeneratedProfile, EnrichError> {
        let request = GenerationRequest {
            text: self.engine.render_enrichment(entity)?,
            max_tokens: ENRICH_MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let raw = backend.complete(&request).await?;
        parse_generated_profile(&raw)
    }

    /// The backend configured for a category, if any.
    const fn backend_for(&self, category: ContentCategory) -> Option<&LlmBackend> {
        match category {
            ContentCategory::Olympian => self.gods.as_ref(),
            ContentCategory::Hero => self.heroes.as_ref(),
            ContentCategory::Primordial => self.primordials.as_ref(),
            ContentCategory::Minor => self.minors.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::llm::CannedBackend;

    fn thin_entity() -> MythEntity {
        MythEntity {
            id: String::from("nyx"),
            nome: String::from("Nyx"),
            categoria: String::from("primordial"),
            descricao: String::from("A Noite personificada."),
            dominios: vec![String::from("Noite")],
            poderes: Vec::new(),
            simbolos: Vec::new(),
            tags: Vec::new(),
        }
    }

    fn thick_entity() -> MythEntity {
        let mut entity = thin_entity();
        entity.descricao = "x".repeat(MIN_DESCRIPTION_CHARS);
        entity
    }

    fn enricher() -> Enricher {
        match Enricher::disabled() {
            Ok(enricher) => enricher,
            Err(e) => panic!("builtin templates failed: {e}"),
        }
    }

    #[test]
    fn threshold_is_exclusive_at_100_chars() {
        assert!(needs_enrichment(&"x".repeat(99)));
        assert!(!needs_enrichment(&"x".repeat(100)));
        // Accented Portuguese text counts characters, not bytes.
        let accented = "é".repeat(99);
        assert!(accented.len() > 100);
        assert!(needs_enrichment(&accented));
    }

    #[tokio::test]
    async fn long_description_never_calls_the_backend() {
        let backend = CannedBackend::replying(r#"{"descricao": "nova"}"#);
        let counter = backend.counter();
        let enricher = enricher()
            .with_backend(ContentCategory::Primordial, LlmBackend::Canned(backend));

        let entity = thick_entity();
        let result = enricher
            .enrich_entity(ContentCategory::Primordial, entity.clone())
            .await;

        assert_eq!(result, entity);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn thin_description_gets_generated_fields() {
        let backend = CannedBackend::replying(
            r#"{"descricao": "Nyx, a primordial noite que precede a criação.",
                "poderes": ["Manto da escuridão"]}"#,
        );
        let counter = backend.counter();
        let enricher = enricher()
            .with_backend(ContentCategory::Primordial, LlmBackend::Canned(backend));

        let result = enricher
            .enrich_entity(ContentCategory::Primordial, thin_entity())
            .await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(result.descricao.starts_with("Nyx, a primordial"));
        assert_eq!(result.poderes, vec!["Manto da escuridão".to_owned()]);
        // Fields absent from the reply keep their stored values.
        assert_eq!(result.dominios, vec!["Noite".to_owned()]);
    }

    #[tokio::test]
    async fn backend_failure_keeps_the_stored_record() {
        let enricher = enricher().with_backend(
            ContentCategory::Minor,
            LlmBackend::Canned(CannedBackend::failing("upstream 503")),
        );

        let entity = thin_entity();
        let result = enricher
            .enrich_entity(ContentCategory::Minor, entity.clone())
            .await;
        assert_eq!(result, entity);
    }

    #[tokio::test]
    async fn unparsable_reply_keeps_the_stored_record() {
        let enricher = enricher().with_backend(
            ContentCategory::Hero,
            LlmBackend::Canned(CannedBackend::replying("não é JSON")),
        );

        let entity = thin_entity();
        let result = enricher
            .enrich_entity(ContentCategory::Hero, entity.clone())
            .await;
        assert_eq!(result, entity);
    }

    #[tokio::test]
    async fn unconfigured_category_is_served_as_stored() {
        let entity = thin_entity();
        let result = enricher()
            .enrich_entity(ContentCategory::Olympian, entity.clone())
            .await;
        assert_eq!(result, entity);
    }

    #[tokio::test]
    async fn curiosity_returns_generated_text() {
        let enricher = enricher().with_curiosity_backend(LlmBackend::Canned(
            CannedBackend::replying("Poseidon criou os cavalos das ondas."),
        ));

        let fact = enricher.curiosity_fact("cavalos").await;
        assert_eq!(
            fact.unwrap_or_default(),
            "Poseidon criou os cavalos das ondas."
        );
    }

    #[tokio::test]
    async fn curiosity_falls_back_when_reply_is_empty() {
        let enricher = enricher()
            .with_curiosity_backend(LlmBackend::Canned(CannedBackend::missing()));

        let fact = enricher.curiosity_fact("tridente").await;
        assert_eq!(fact.unwrap_or_default(), CURIOSITY_FALLBACK);
    }

    #[tokio::test]
    async fn curiosity_propagates_upstream_failures() {
        let enricher = enricher().with_curiosity_backend(LlmBackend::Canned(
            CannedBackend::failing("Gemini returned 500"),
        ));

        let result = enricher.curiosity_fact("tempestades").await;
        assert!(matches!(result, Err(EnrichError::Backend(_))));
    }

    #[tokio::test]
    async fn curiosity_without_backend_is_disabled() {
        let result = enricher().curiosity_fact("mares").await;
        assert!(matches!(result, Err(EnrichError::Disabled(_))));
    }
}
