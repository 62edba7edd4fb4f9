//! HTTP API server for the Olimpo mythology portal.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`POST /api/details`** -- `type`/`action`-discriminated reads over
//!   the content store (catalogue, blog, timeline), with best-effort
//!   generative enrichment of thinly-described records
//! - **`POST /api/curiosity`** -- bearer-gated voice assistant endpoint:
//!   a privileged Poseidon lookup or relay of a speech transcript to the
//!   generation API
//! - **`GET /`** -- minimal HTML status page
//!
//! # Architecture
//!
//! Handlers are stateless over a shared [`AppState`] holding the store
//! handle, the enricher, and the curiosity bearer secret. Request
//! classification happens once, in [`dispatch`], into an explicit enum;
//! handlers never inspect discriminators themselves.

pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
