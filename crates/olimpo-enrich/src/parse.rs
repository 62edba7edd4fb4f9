//! Parsing of generated text into a typed profile.
//!
//! The generation API returns raw text (ideally JSON). This module
//! extracts and validates it into a [`GeneratedProfile`]. Models wrap
//! JSON in markdown fences or emit trailing commas often enough that a
//! small recovery ladder pays for itself.

use serde::Deserialize;

use crate::error::EnrichError;

/// The profile fields a generation reply may carry.
///
/// Every field is optional: the merge step only overlays values that are
/// present and non-empty, so a partial reply still improves the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedProfile {
    /// Generated description.
    #[serde(default)]
    pub descricao: Option<String>,
    /// Generated domains of influence.
    #[serde(default)]
    pub dominios: Option<Vec<String>>,
    /// Generated powers.
    #[serde(default)]
    pub poderes: Option<Vec<String>>,
    /// Generated symbols.
    #[serde(default)]
    pub simbolos: Option<Vec<String>>,
}

/// Parse a generation reply into a [`GeneratedProfile`].
///
/// Attempts multiple recovery strategies if the raw text is not clean JSON:
/// 1. Direct `serde_json` deserialization
/// 2. Extract JSON from markdown code blocks
/// 3. Strip trailing commas and retry
///
/// # Errors
///
/// Returns [`EnrichError::Parse`] if every strategy fails.
pub fn parse_generated_profile(raw: &str) -> Result<GeneratedProfile, EnrichError> {
    let trimmed = raw.trim();

    // Strategy 1: direct parse
    if let Ok(profile) = serde_json::from_str::<GeneratedProfile>(trimmed) {
        return Ok(profile);
    }

    // Strategy 2: extract from markdown code block
    if let Some(json_str) = extract_json_from_codeblock(trimmed)
        && let Ok(profile) = serde_json::from_str::<GeneratedProfile>(json_str)
    {
        return Ok(profile);
    }

    // Strategy 3: strip trailing commas and retry
    let cleaned = strip_trailing_commas(trimmed);
    if let Ok(profile) = serde_json::from_str::<GeneratedProfile>(&cleaned) {
        return Ok(profile);
    }

    // Strategy 4: extract from code block then strip commas
    if let Some(json_str) = extract_json_from_codeblock(trimmed) {
        let cleaned_inner = strip_trailing_commas(json_str);
        if let Ok(profile) = serde_json::from_str::<GeneratedProfile>(&cleaned_inner) {
            return Ok(profile);
        }
    }

    Err(EnrichError::Parse(format!(
        "all parse strategies failed for: {trimmed}"
    )))
}

/// Extract the contents of the first markdown code block, if any.
fn extract_json_from_codeblock(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after_fence = text.get(start + 3..)?;
    // Skip an optional language tag on the fence line.
    let body_start = after_fence.find('\n').map_or(0, |i| i + 1);
    let body = after_fence.get(body_start..)?;
    let end = body.find("```")?;
    body.get(..end).map(str::trim)
}

/// Remove trailing commas before closing braces and brackets.
fn strip_trailing_commas(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ',' {
            // Look ahead past whitespace for a closing delimiter.
            let mut lookahead = chars.clone();
            let mut next_significant = None;
            while let Some(&n) = lookahead.peek() {
                if n.is_whitespace() {
                    lookahead.next();
                } else {
                    next_significant = Some(n);
                    break;
                }
            }
            if matches!(next_significant, Some('}' | ']')) {
                continue;
            }
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clean_json() {
        let raw = r#"{"descricao": "Deus dos mares", "poderes": ["Terremotos"]}"#;
        let profile = parse_generated_profile(raw).unwrap_or_default();
        assert_eq!(profile.descricao.as_deref(), Some("Deus dos mares"));
        assert_eq!(
            profile.poderes.unwrap_or_default(),
            vec!["Terremotos".to_owned()]
        );
        assert!(profile.dominios.is_none());
    }

    #[test]
    fn parses_json_in_markdown_fence() {
        let raw = "Aqui está o perfil:\n```json\n{\"descricao\": \"A Terra personificada\"}\n```";
        let profile = parse_generated_profile(raw).unwrap_or_default();
        assert_eq!(profile.descricao.as_deref(), Some("A Terra personificada"));
    }

    #[test]
    fn parses_json_with_trailing_commas() {
        let raw = r#"{"descricao": "Deus dos pastores", "simbolos": ["Flauta",],}"#;
        let profile = parse_generated_profile(raw).unwrap_or_default();
        assert_eq!(profile.descricao.as_deref(), Some("Deus dos pastores"));
        assert_eq!(
            profile.simbolos.unwrap_or_default(),
            vec!["Flauta".to_owned()]
        );
    }

    #[test]
    fn prose_reply_is_a_parse_error() {
        let raw = "Poseidon é o deus dos mares e dos terremotos.";
        let result = parse_generated_profile(raw);
        assert!(matches!(result, Err(EnrichError::Parse(_))));
    }

    #[test]
    fn empty_object_parses_to_empty_profile() {
        let profile = parse_generated_profile("{}").unwrap_or_default();
        assert!(profile.descricao.is_none());
        assert!(profile.poderes.is_none());
    }
}
