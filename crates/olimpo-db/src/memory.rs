//! In-memory content store.
//!
//! Serves the same operations as the `PostgreSQL` store from plain vectors.
//! Used by the API tests and by demo mode, where the server runs without a
//! database and serves the built-in sample catalogue instead.

use olimpo_types::{BlogPost, BlogPostSummary, ContentCategory, MythEntity, TimelineEvent};

/// An in-memory content catalogue.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Main catalogue (Olympians and heroes).
    pub entities: Vec<MythEntity>,
    /// Primordial beings.
    pub primordials: Vec<MythEntity>,
    /// Minor gods.
    pub minors: Vec<MythEntity>,
    /// Blog posts.
    pub posts: Vec<BlogPost>,
    /// Timeline events, already in display order.
    pub timeline: Vec<TimelineEvent>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All blog post summaries, newest publication first.
    pub fn list_blog_summaries(&self) -> Vec<BlogPostSummary> {
        let mut summaries: Vec<BlogPostSummary> =
            self.posts.iter().cloned().map(Into::into).collect();
        summaries.sort_by(|a, b| b.data_publicacao.cmp(&a.data_publicacao));
        summaries
    }

    /// A single blog post by slug.
    pub fn get_blog_post(&self, id: &str) -> Option<BlogPost> {
        self.posts.iter().find(|p| p.id == id).cloned()
    }

    /// All primordial beings.
    pub fn list_primordials(&self) -> Vec<MythEntity> {
        sorted_by_nome(self.primordials.clone())
    }

    /// All minor gods.
    pub fn list_minors(&self) -> Vec<MythEntity> {
        sorted_by_nome(self.minors.clone())
    }

    /// First primordial being whose name contains `nome`, case-insensitive.
    pub fn find_primordial(&self, nome: &str) -> Option<MythEntity> {
        find_substring(&self.primordials, nome)
    }

    /// First minor god whose name contains `nome`, case-insensitive.
    pub fn find_minor(&self, nome: &str) -> Option<MythEntity> {
        find_substring(&self.minors, nome)
    }

    /// Exact-name lookup in the main catalogue.
    pub fn get_entity_by_name(&self, nome: &str) -> Option<MythEntity> {
        self.entities.iter().find(|e| e.nome == nome).cloned()
    }

    /// First hero whose name contains `nome`, case-insensitive.
    pub fn find_hero(&self, nome: &str) -> Option<MythEntity> {
        let heroes: Vec<MythEntity> = self
            .entities
            .iter()
            .filter(|e| e.categoria == ContentCategory::Hero.as_str())
            .cloned()
            .collect();
        find_substring(&heroes, nome)
    }

    /// Catalogue listing filtered by category.
    pub fn list_entities(&self, categoria: ContentCategory) -> Vec<MythEntity> {
        sorted_by_nome(
            self.entities
                .iter()
                .filter(|e| e.categoria == categoria.as_str())
                .cloned()
                .collect(),
        )
    }

    /// All timeline events in display order.
    pub fn list_timeline(&self) -> Vec<TimelineEvent> {
        self.timeline.clone()
    }

    /// A single timeline event by slug.
    pub fn get_timeline_event(&self, id: &str) -> Option<TimelineEvent> {
        self.timeline.iter().find(|e| e.id == id).cloned()
    }
}

/// First entity whose name contains `nome`, case-insensitive, in `nome` order.
fn find_substring(entities: &[MythEntity], nome: &str) -> Option<MythEntity> {
    let needle = nome.to_lowercase();
    let mut matches: Vec<&MythEntity> = entities
        .iter()
        .filter(|e| e.nome.to_lowercase().contains(&needle))
        .collect();
    matches.sort_by(|a, b| a.nome.cmp(&b.nome));
    matches.first().map(|e| (*e).clone())
}

/// Sort entities by display name, matching the SQL `ORDER BY nome`.
fn sorted_by_nome(mut entities: Vec<MythEntity>) -> Vec<MythEntity> {
    entities.sort_by(|a, b| a.nome.cmp(&b.nome));
    entities
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::sample::sample_store;

    fn entity(id: &str, nome: &str, categoria: &str) -> MythEntity {
        MythEntity {
            id: id.to_owned(),
            nome: nome.to_owned(),
            categoria: categoria.to_owned(),
            descricao: String::new(),
            dominios: Vec::new(),
            poderes: Vec::new(),
            simbolos: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let mut store = MemoryStore::new();
        store.primordials.push(entity("gaia", "Gaia", "primordial"));

        assert!(store.find_primordial("gai").is_some());
        assert!(store.find_primordial("GAIA").is_some());
        assert!(store.find_primordial("urano").is_none());
    }

    #[test]
    fn substring_match_returns_first_by_name() {
        let mut store = MemoryStore::new();
        store.primordials.push(entity("nyx", "Nyx", "primordial"));
        store.primordials.push(entity("erebo", "Érebo", "primordial"));
        store.primordials.push(entity("eros", "Eros", "primordial"));

        let found = store.find_primordial("er").map(|e| e.id);
        assert_eq!(found.as_deref(), Some("eros"));
    }

    #[test]
    fn exact_name_lookup_does_not_match_substrings() {
        let mut store = MemoryStore::new();
        store.entities.push(entity("zeus", "Zeus", "olimpico"));

        assert!(store.get_entity_by_name("Zeus").is_some());
        assert!(store.get_entity_by_name("Zeu").is_none());
        assert!(store.get_entity_by_name("zeus").is_none());
    }

    #[test]
    fn hero_search_ignores_other_categories() {
        let mut store = MemoryStore::new();
        store.entities.push(entity("zeus", "Zeus", "olimpico"));
        store.entities.push(entity("aquiles", "Aquiles", "heroi"));

        assert!(store.find_hero("zeus").is_none());
        assert!(store.find_hero("aquiles").is_some());
    }

    #[test]
    fn blog_summaries_are_newest_first() {
        let mut store = MemoryStore::new();
        for (id, date) in [
            ("velho", NaiveDate::from_ymd_opt(2023, 5, 1)),
            ("novo", NaiveDate::from_ymd_opt(2024, 3, 10)),
            ("medio", NaiveDate::from_ymd_opt(2024, 1, 15)),
        ] {
            store.posts.push(BlogPost {
                id: id.to_owned(),
                titulo: id.to_owned(),
                resumo: String::new(),
                conteudo: String::new(),
                data_publicacao: date.unwrap_or_default(),
                tags: Vec::new(),
                livro_recomendado: None,
            });
        }

        let ids: Vec<String> = store
            .list_blog_summaries()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["novo", "medio", "velho"]);
    }

    #[test]
    fn sample_store_covers_every_record_kind() {
        let store = sample_store();
        assert!(!store.list_entities(ContentCategory::Olympian).is_empty());
        assert!(!store.list_entities(ContentCategory::Hero).is_empty());
        assert!(!store.list_primordials().is_empty());
        assert!(!store.list_minors().is_empty());
        assert!(!store.list_blog_summaries().is_empty());
        assert!(!store.list_timeline().is_empty());
        assert!(store.get_entity_by_name("Poseidon").is_some());
    }
}
