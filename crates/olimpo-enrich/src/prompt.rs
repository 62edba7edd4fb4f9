//! Prompt template loading and rendering via `minijinja`.
//!
//! Templates can be loaded from a directory so operators can tune the
//! prompts without recompiling; compiled-in defaults are used otherwise.
//! Two templates exist: `enrichment.j2` asks the generation API for a
//! JSON profile of a catalogue entity, and `curiosity.j2` embeds a speech
//! transcript into the fixed Portuguese curiosity prompt.

use minijinja::Environment;
use olimpo_types::MythEntity;

use crate::error::EnrichError;

/// Compiled-in default for the enrichment template.
const DEFAULT_ENRICHMENT: &str = include_str!("../templates/enrichment.j2");

/// Compiled-in default for the curiosity template.
const DEFAULT_CURIOSITY: &str = include_str!("../templates/curiosity.j2");

/// Manages prompt template loading and rendering.
///
/// Wraps a `minijinja` [`Environment`] with both prompt templates
/// pre-loaded. Templates edited on disk are picked up on the next call
/// to [`PromptEngine::from_dir`].
pub struct PromptEngine {
    env: Environment<'static>,
}

impl PromptEngine {
    /// Create a prompt engine with the compiled-in default templates.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Template`] if a default template fails to
    /// compile.
    pub fn builtin() -> Result<Self, EnrichError> {
        Self::from_templates(DEFAULT_ENRICHMENT.to_owned(), DEFAULT_CURIOSITY.to_owned())
    }

    /// Create a prompt engine loading templates from the given directory.
    ///
    /// The directory must contain `enrichment.j2` and `curiosity.j2`.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Template`] if a file cannot be read or a
    /// template fails to compile.
    pub fn from_dir(templates_dir: &str) -> Result<Self, EnrichError> {
        let enrichment = load_template(templates_dir, "enrichment.j2")?;
        let curiosity = load_template(templates_dir, "curiosity.j2")?;
        Self::from_templates(enrichment, curiosity)
    }

    /// Create a prompt engine from template sources.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Template`] if a template fails to compile.
    pub fn from_templates(enrichment: String, curiosity: String) -> Result<Self, EnrichError> {
        let mut env = Environment::new();

        env.add_template_owned("enrichment", enrichment).map_err(|e| {
            EnrichError::Template(format!("failed to add enrichment template: {e}"))
        })?;
        env.add_template_owned("curiosity", curiosity).map_err(|e| {
            EnrichError::Template(format!("failed to add curiosity template: {e}"))
        })?;

        Ok(Self { env })
    }

    /// Render the enrichment prompt for a catalogue entity.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Template`] if rendering fails.
    pub fn render_enrichment(&self, entity: &MythEntity) -> Result<String, EnrichError> {
        let context = serde_json::json!({
            "nome": entity.nome,
            "categoria": entity.categoria,
            "descricao": entity.descricao,
        });

        self.env
            .get_template("enrichment")
            .map_err(|e| EnrichError::Template(format!("missing enrichment template: {e}")))?
            .render(context)
            .map_err(|e| EnrichError::Template(format!("enrichment render failed: {e}")))
    }

    /// Render the curiosity prompt around a speech transcript.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Template`] if rendering fails.
    pub fn render_curiosity(&self, transcribed_text: &str) -> Result<String, EnrichError> {
        let context = serde_json::json!({ "transcribed_text": transcribed_text });

        self.env
            .get_template("curiosity")
            .map_err(|e| EnrichError::Template(format!("missing curiosity template: {e}")))?
            .render(context)
            .map_err(|e| EnrichError::Template(format!("curiosity render failed: {e}")))
    }
}

/// Read a template file from disk.
fn load_template(dir: &str, filename: &str) -> Result<String, EnrichError> {
    let path = format!("{dir}/{filename}");
    std::fs::read_to_string(&path)
        .map_err(|e| EnrichError::Template(format!("failed to read {path}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poseidon() -> MythEntity {
        MythEntity {
            id: String::from("poseidon"),
            nome: String::from("Poseidon"),
            categoria: String::from("olimpico"),
            descricao: String::from("Deus dos mares."),
            dominios: Vec::new(),
            poderes: Vec::new(),
            simbolos: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn builtin_templates_compile() {
        assert!(PromptEngine::builtin().is_ok());
    }

    #[test]
    fn enrichment_prompt_embeds_name_and_category() {
        let engine = match PromptEngine::builtin() {
            Ok(engine) => engine,
            Err(e) => panic!("builtin templates failed: {e}"),
        };
        let prompt = engine.render_enrichment(&poseidon()).unwrap_or_default();
        assert!(prompt.contains("Poseidon"));
        assert!(prompt.contains("olimpico"));
        assert!(prompt.contains("descricao"));
    }

    #[test]
    fn curiosity_prompt_embeds_transcript() {
        let engine = match PromptEngine::builtin() {
            Ok(engine) => engine,
            Err(e) => panic!("builtin templates failed: {e}"),
        };
        let prompt = engine
            .render_curiosity("cavalos e terremotos")
            .unwrap_or_default();
        assert!(prompt.contains("cavalos e terremotos"));
        assert!(prompt.contains("150 palavras"));
    }

    #[test]
    fn missing_directory_is_a_template_error() {
        let result = PromptEngine::from_dir("/nonexistent/templates");
        assert!(matches!(result, Err(EnrichError::Template(_))));
    }
}
