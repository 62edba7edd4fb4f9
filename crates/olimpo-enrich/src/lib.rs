//! Generative enrichment for the mythology catalogue.
//!
//! Stored records with thin descriptions are expanded in memory by a
//! generation API before being served; the voice assistant's curiosity
//! endpoint relays transcripts to the same API. This crate holds the
//! backends ([`llm`]), the prompt templates ([`prompt`]), the tolerant
//! reply parser ([`parse`]), the merge rules ([`merge`]), and the policy
//! that ties them together ([`enricher`]).

pub mod config;
pub mod enricher;
pub mod error;
pub mod llm;
pub mod merge;
pub mod parse;
pub mod prompt;

pub use config::{BackendType, CategoryKeys, GenerationConfig};
pub use enricher::{CURIOSITY_FALLBACK, Enricher, MIN_DESCRIPTION_CHARS, needs_enrichment};
pub use error::EnrichError;
pub use llm::{CannedBackend, GenerationRequest, LlmBackend};
pub use merge::merge_profile;
pub use parse::{GeneratedProfile, parse_generated_profile};
pub use prompt::PromptEngine;
