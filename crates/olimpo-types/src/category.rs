//! Content category enumeration.
//!
//! The catalogue stores every mythological figure with a `categoria` tag.
//! Olympians and heroes share the `entidades_mitologicas` table; primordial
//! beings and minor gods live in their own tables but carry the tag too so
//! all four kinds serialize to the same shape.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The four catalogue categories served by the content API.
///
/// Serialized with the Portuguese `categoria` values used by the content
/// store and the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    /// Olympian deity (`olimpico`).
    #[serde(rename = "olimpico")]
    Olympian,
    /// Hero (`heroi`).
    #[serde(rename = "heroi")]
    Hero,
    /// Primordial being (`primordial`).
    Primordial,
    /// Minor god (`menor`).
    #[serde(rename = "menor")]
    Minor,
}

impl ContentCategory {
    /// The `categoria` column value for this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Olympian => "olimpico",
            Self::Hero => "heroi",
            Self::Primordial => "primordial",
            Self::Minor => "menor",
        }
    }
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categoria_strings_round_trip() {
        for (category, tag) in [
            (ContentCategory::Olympian, "olimpico"),
            (ContentCategory::Hero, "heroi"),
            (ContentCategory::Primordial, "primordial"),
            (ContentCategory::Minor, "menor"),
        ] {
            assert_eq!(category.as_str(), tag);
            let json = format!("\"{tag}\"");
            let parsed: ContentCategory =
                serde_json::from_str(&json).unwrap_or(ContentCategory::Olympian);
            assert_eq!(parsed, category);
        }
    }
}
