//! Detail request classification.
//!
//! `POST /api/details` carries `type` and `action` discriminators plus an
//! optional `nome` or `id`. Classification happens up front, in one place,
//! into the [`DetailQuery`] enum; each variant then has exactly one
//! handler branch. Field validation (missing `id`, missing `nome`,
//! unknown `type`) is part of classification, so handlers only see
//! well-formed queries.

use serde::Deserialize;

use crate::error::ApiError;

/// Raw body of a `POST /api/details` request.
///
/// `type` defaults to `god`, matching the portal frontend which omits it
/// when browsing the main Olympian catalogue.
#[derive(Debug, Deserialize)]
pub struct DetailRequest {
    /// Content kind discriminator.
    #[serde(rename = "type", default = "default_type")]
    pub content_type: String,
    /// `"list"` requests the whole collection; anything else (including
    /// absence) selects the single-item path.
    #[serde(default)]
    pub action: Option<String>,
    /// Name for catalogue lookups.
    #[serde(default)]
    pub nome: Option<String>,
    /// Slug for blog posts and timeline events.
    #[serde(default)]
    pub id: Option<String>,
}

fn default_type() -> String {
    String::from("god")
}

/// A fully classified detail query. One handler branch per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailQuery {
    /// All blog post summaries, newest first.
    BlogList,
    /// A single blog post by slug.
    BlogPost { id: String },
    /// All primordial beings.
    PrimordialList,
    /// One primordial being by name substring.
    Primordial { nome: String },
    /// All minor gods.
    MinorList,
    /// One minor god by name substring.
    Minor { nome: String },
    /// All heroes.
    HeroList,
    /// One hero by name substring.
    Hero { nome: String },
    /// All Olympian deities.
    GodList,
    /// One catalogue entity by exact name.
    God { nome: String },
    /// All timeline events in display order.
    TimelineList,
    /// A single timeline event by slug.
    TimelineEvent { id: String },
}

impl DetailQuery {
    /// Classify a raw request into a query, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for an unknown `type` and
    /// [`ApiError::MissingField`] when the single-item path lacks its
    /// `nome` or `id`.
    pub fn classify(request: DetailRequest) -> Result<Self, ApiError> {
        let wants_list = request.action.as_deref() == Some("list");

        match request.content_type.as_str() {
            "blog" if wants_list => Ok(Self::BlogList),
            "blog" => Ok(Self::BlogPost {
                id: require(request.id, "id")?,
            }),
            "primordial" if wants_list => Ok(Self::PrimordialList),
            "primordial" => Ok(Self::Primordial {
                nome: require(request.nome, "nome")?,
            }),
            "minor" if wants_list => Ok(Self::MinorList),
            "minor" => Ok(Self::Minor {
                nome: require(request.nome, "nome")?,
            }),
            "hero" if wants_list => Ok(Self::HeroList),
            "hero" => Ok(Self::Hero {
                nome: require(request.nome, "nome")?,
            }),
            "god" if wants_list => Ok(Self::GodList),
            "god" => Ok(Self::God {
                nome: require(request.nome, "nome")?,
            }),
            "timeline" if wants_list => Ok(Self::TimelineList),
            "timeline" => Ok(Self::TimelineEvent {
                id: require(request.id, "id")?,
            }),
            other => Err(ApiError::InvalidRequest(format!(
                "unknown type: {other}"
            ))),
        }
    }
}

fn require(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::MissingField(field.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        content_type: &str,
        action: Option<&str>,
        nome: Option<&str>,
        id: Option<&str>,
    ) -> DetailRequest {
        DetailRequest {
            content_type: content_type.to_owned(),
            action: action.map(str::to_owned),
            nome: nome.map(str::to_owned),
            id: id.map(str::to_owned),
        }
    }

    #[test]
    fn type_defaults_to_god() {
        let parsed: DetailRequest =
            serde_json::from_str(r#"{"nome": "Zeus"}"#).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(parsed.content_type, "god");

        let query = DetailQuery::classify(parsed);
        assert_eq!(
            query.unwrap_or(DetailQuery::GodList),
            DetailQuery::God {
                nome: String::from("Zeus")
            }
        );
    }

    #[test]
    fn list_action_selects_every_collection() {
        for (content_type, expected) in [
            ("blog", DetailQuery::BlogList),
            ("primordial", DetailQuery::PrimordialList),
            ("minor", DetailQuery::MinorList),
            ("hero", DetailQuery::HeroList),
            ("god", DetailQuery::GodList),
            ("timeline", DetailQuery::TimelineList),
        ] {
            let query = DetailQuery::classify(request(content_type, Some("list"), None, None));
            assert_eq!(query.unwrap_or(DetailQuery::BlogPost { id: String::new() }), expected);
        }
    }

    #[test]
    fn single_item_paths_require_their_field() {
        for content_type in ["primordial", "minor", "hero", "god"] {
            let query = DetailQuery::classify(request(content_type, None, None, None));
            assert!(matches!(query, Err(ApiError::MissingField(ref f)) if f == "nome"));
        }
        for content_type in ["blog", "timeline"] {
            let query = DetailQuery::classify(request(content_type, None, None, None));
            assert!(matches!(query, Err(ApiError::MissingField(ref f)) if f == "id"));
        }
    }

    #[test]
    fn empty_nome_counts_as_missing() {
        let query = DetailQuery::classify(request("hero", None, Some(""), None));
        assert!(matches!(query, Err(ApiError::MissingField(_))));
    }

    #[test]
    fn non_list_action_takes_the_single_item_path() {
        let query = DetailQuery::classify(request("god", Some("detail"), Some("Hera"), None));
        assert_eq!(
            query.unwrap_or(DetailQuery::GodList),
            DetailQuery::God {
                nome: String::from("Hera")
            }
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        let query = DetailQuery::classify(request("titan", None, Some("Cronos"), None));
        assert!(matches!(query, Err(ApiError::InvalidRequest(_))));
    }

    #[test]
    fn single_blog_query_carries_the_slug() {
        let query = DetailQuery::classify(request("blog", None, None, Some("os-doze-trabalhos")));
        assert_eq!(
            query.unwrap_or(DetailQuery::BlogList),
            DetailQuery::BlogPost {
                id: String::from("os-doze-trabalhos")
            }
        );
    }
}
