//! Shared application state for the API server.
//!
//! [`AppState`] holds the content store handle, the enricher, and the
//! bearer secret for the curiosity endpoint. Handlers never hold locks;
//! the store is read-only from the API's point of view and the enricher
//! is stateless per request.

use olimpo_db::Store;
use olimpo_enrich::Enricher;

/// Everything a request handler needs.
pub struct AppState {
    /// The content store (Postgres or in-memory).
    pub store: Store,
    /// Generation layer for thin-record enrichment and curiosity facts.
    pub enricher: Enricher,
    /// Secret the `Authorization` header must carry on `/api/curiosity`.
    pub curiosity_token: String,
}

impl AppState {
    /// Assemble the state.
    pub fn new(store: Store, enricher: Enricher, curiosity_token: String) -> Self {
        Self {
            store,
            enricher,
            curiosity_token,
        }
    }
}
