//! Record structs served by the content API.
//!
//! Field names are the Portuguese wire names used by the content store and
//! the portal frontend. Every record is read-only from the backend's point
//! of view: rows are fetched, optionally enriched in memory, and discarded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Catalogue entities
// ---------------------------------------------------------------------------

/// A mythological figure: Olympian, hero, primordial being, or minor god.
///
/// All four catalogue kinds share this shape. Records are keyed by string
/// slug (`"zeus"`, `"gaia"`), not by UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MythEntity {
    /// Slug identifier.
    pub id: String,
    /// Display name.
    pub nome: String,
    /// Category tag (`olimpico`, `heroi`, `primordial`, `menor`).
    pub categoria: String,
    /// Free-text description. May be thin; thin descriptions are eligible
    /// for in-memory enrichment before a response is sent.
    pub descricao: String,
    /// Domains of influence (seas, war, harvest, ...).
    pub dominios: Vec<String>,
    /// Powers and abilities.
    pub poderes: Vec<String>,
    /// Associated symbols.
    pub simbolos: Vec<String>,
    /// Free-form search tags.
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

/// A full blog post, returned by single-post lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BlogPost {
    /// Slug identifier.
    pub id: String,
    /// Post title.
    pub titulo: String,
    /// Short summary shown on list pages.
    pub resumo: String,
    /// Full post body.
    pub conteudo: String,
    /// Publication date; list responses are ordered by this, newest first.
    pub data_publicacao: NaiveDate,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Optional recommended further reading.
    pub livro_recomendado: Option<String>,
}

/// A blog post without its body, returned by list requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BlogPostSummary {
    /// Slug identifier.
    pub id: String,
    /// Post title.
    pub titulo: String,
    /// Short summary.
    pub resumo: String,
    /// Publication date.
    pub data_publicacao: NaiveDate,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Optional recommended further reading.
    pub livro_recomendado: Option<String>,
}

impl From<BlogPost> for BlogPostSummary {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            titulo: post.titulo,
            resumo: post.resumo,
            data_publicacao: post.data_publicacao,
            tags: post.tags,
            livro_recomendado: post.livro_recomendado,
        }
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// An event on the mythology timeline, from the primordial era to the age
/// of heroes.
///
/// `era`, `tipo`, and `data_estimada` are nullable in the store; the
/// frontend substitutes placeholder labels when they are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TimelineEvent {
    /// Slug identifier.
    pub id: String,
    /// Event name.
    pub nome: String,
    /// Free-text description.
    pub descricao: String,
    /// Era label (`Era Primordial`, `Era dos Titãs`, ...).
    pub era: Option<String>,
    /// Event type label (war, birth, founding, ...).
    pub tipo: Option<String>,
    /// Free-form estimated date (`"c. 1200 a.C."`).
    pub data_estimada: Option<String>,
    /// Names of the characters involved.
    pub personagens: Vec<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_serializes_with_wire_field_names() {
        let entity = MythEntity {
            id: String::from("poseidon"),
            nome: String::from("Poseidon"),
            categoria: String::from("olimpico"),
            descricao: String::from("Deus dos mares."),
            dominios: vec![String::from("Mares")],
            poderes: vec![String::from("Controle das águas")],
            simbolos: vec![String::from("Tridente")],
            tags: vec![String::from("mar")],
        };

        let json = serde_json::to_value(&entity).unwrap_or_default();
        assert_eq!(json["nome"], "Poseidon");
        assert_eq!(json["descricao"], "Deus dos mares.");
        assert_eq!(json["simbolos"][0], "Tridente");
    }

    #[test]
    fn summary_drops_the_body() {
        let post = BlogPost {
            id: String::from("guerra-troia"),
            titulo: String::from("A Guerra de Troia"),
            resumo: String::from("Dez anos de cerco."),
            conteudo: String::from("A Guerra de Troia é uma das narrativas..."),
            data_publicacao: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            tags: vec![String::from("troia")],
            livro_recomendado: Some(String::from("Ilíada")),
        };

        let summary = BlogPostSummary::from(post);
        let json = serde_json::to_value(&summary).unwrap_or_default();
        assert_eq!(json["titulo"], "A Guerra de Troia");
        assert!(json.get("conteudo").is_none());
    }

    #[test]
    fn timeline_event_allows_null_labels() {
        let json = serde_json::json!({
            "id": "titanomaquia",
            "nome": "Titanomaquia",
            "descricao": "A guerra entre titãs e olímpicos.",
            "era": null,
            "tipo": null,
            "data_estimada": null,
            "personagens": ["Zeus", "Cronos"],
            "tags": ["guerra"],
        });

        let event: Result<TimelineEvent, _> = serde_json::from_value(json);
        assert!(event.is_ok());
    }
}
