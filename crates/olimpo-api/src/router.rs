//! Axum router construction for the content API.
//!
//! Assembles the routes into a single [`Router`] with the CORS policy the
//! portal frontend relies on: any origin, and the header set the
//! Supabase-style clients send (`authorization`, `x-client-info`,
//! `apikey`, `content-type`).

use std::sync::Arc;

use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// - `GET /` -- minimal HTML status page
/// - `POST /api/details` -- discriminated content reads
/// - `POST /api/curiosity` -- bearer-gated voice assistant endpoint
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ]);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/details", post(handlers::details))
        .route("/api/curiosity", post(handlers::curiosity))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
