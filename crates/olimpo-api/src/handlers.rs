//! Endpoint handlers for the content API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `POST` | `/api/details` | Discriminated catalogue/blog/timeline reads |
//! | `POST` | `/api/curiosity` | Bearer-gated Poseidon lookup / curiosity relay |
//!
//! `/api/details` responses mirror what the portal frontend expects:
//! blog and timeline payloads ride in `{posts}`/`{post}`/`{events}`/
//! `{event}` envelopes, catalogue payloads are bare arrays (single
//! lookups as one-element arrays).

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::response::{Html, IntoResponse};
use olimpo_types::{ContentCategory, MythEntity};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::dispatch::{DetailQuery, DetailRequest};
use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page listing the API endpoints.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.name();

    Html(format!(
        r"<!DOCTYPE html>
<html lang='pt-BR'>
<head>
    <meta charset='utf-8'>
    <title>Olimpo API</title>
</head>
<body>
    <h1>Olimpo API</h1>
    <p>Content backend for the mythology portal. Store: <code>{store}</code></p>
    <ul>
        <li><code>POST /api/details</code> -- catalogue, blog and timeline reads</li>
        <li><code>POST /api/curiosity</code> -- voice assistant (bearer token required)</li>
    </ul>
</body>
</html>"
    ))
}

// ---------------------------------------------------------------------------
// POST /api/details -- discriminated content reads
// ---------------------------------------------------------------------------

/// Dispatch a detail request to the content store, enriching thin
/// single-lookup records before responding.
pub async fn details(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DetailRequest>,
) -> Result<Json<Value>, ApiError> {
    let query = DetailQuery::classify(request)?;

    let body = match query {
        DetailQuery::BlogList => {
            let posts = state.store.list_blog_summaries().await?;
            json!({ "posts": posts })
        }
        DetailQuery::BlogPost { id } => {
            let post = state
                .store
                .get_blog_post(&id)
                .await?
                .ok_or_else(|| ApiError::NotFound(format!("post não encontrado: {id}")))?;
            json!({ "post": post })
        }
        DetailQuery::PrimordialList => {
            let entities = state.store.list_primordials().await?;
            json!(entities)
        }
        DetailQuery::Primordial { nome } => {
            let entity = state
                .store
                .find_primordial(&nome)
                .await?
                .ok_or_else(|| not_found(&nome))?;
            single(&state, ContentCategory::Primordial, entity).await?
        }
        DetailQuery::MinorList => {
            let entities = state.store.list_minors().await?;
            json!(entities)
        }
        DetailQuery::Minor { nome } => {
            let entity = state
                .store
                .find_minor(&nome)
                .await?
                .ok_or_else(|| not_found(&nome))?;
            single(&state, ContentCategory::Minor, entity).await?
        }
        DetailQuery::HeroList => {
            let entities = state.store.list_entities(ContentCategory::Hero).await?;
            json!(entities)
        }
        DetailQuery::Hero { nome } => {
            let entity = state
                .store
                .find_hero(&nome)
                .await?
                .ok_or_else(|| not_found(&nome))?;
            single(&state, ContentCategory::Hero, entity).await?
        }
        DetailQuery::GodList => {
            let entities = state.store.list_entities(ContentCategory::Olympian).await?;
            json!(entities)
        }
        DetailQuery::God { nome } => {
            let entity = state
                .store
                .get_entity_by_name(&nome)
                .await?
                .ok_or_else(|| not_found(&nome))?;
            single(&state, ContentCategory::Olympian, entity).await?
        }
        DetailQuery::TimelineList => {
            let events = state.store.list_timeline().await?;
            json!({ "events": events })
        }
        DetailQuery::TimelineEvent { id } => {
            let event = state
                .store
                .get_timeline_event(&id)
                .await?
                .ok_or_else(|| ApiError::NotFound(format!("evento não encontrado: {id}")))?;
            json!({ "event": event })
        }
    };

    Ok(Json(body))
}

/// Enrich a single catalogue hit and wrap it in the one-element array the
/// frontend expects.
async fn single(
    state: &AppState,
    category: ContentCategory,
    entity: MythEntity,
) -> Result<Value, ApiError> {
    let enriched = state.enricher.enrich_entity(category, entity).await;
    Ok(serde_json::to_value([enriched])?)
}

fn not_found(nome: &str) -> ApiError {
    ApiError::NotFound(format!("nenhum registro encontrado para: {nome}"))
}

// ---------------------------------------------------------------------------
// POST /api/curiosity -- voice assistant endpoint
// ---------------------------------------------------------------------------

/// Body of a `POST /api/curiosity` request.
#[derive(Debug, Deserialize)]
pub struct CuriosityRequest {
    /// `"get_poseidon"` or `"get_curiosity"`.
    pub action: String,
    /// Speech transcript for `get_curiosity`.
    #[serde(rename = "transcribedText", default)]
    pub transcribed_text: Option<String>,
}

/// Bearer-gated voice assistant endpoint.
///
/// The `Authorization` header must carry the configured secret; the gate
/// runs before any store or generation work.
pub async fn curiosity(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<CuriosityRequest>,
) -> Result<Json<Value>, ApiError> {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains(&state.curiosity_token));
    if !authorized {
        return Err(ApiError::Unauthorized);
    }

    match request.action.as_str() {
        "get_poseidon" => {
            let poseidon = state
                .store
                .get_entity_by_name("Poseidon")
                .await?
                .ok_or_else(|| ApiError::NotFound(String::from("Poseidon not found")))?;
            Ok(Json(json!({ "poseidon": poseidon })))
        }
        "get_curiosity" => {
            let transcript = request
                .transcribed_text
                .ok_or_else(|| ApiError::MissingField(String::from("transcribedText")))?;
            let fact = state
                .enricher
                .curiosity_fact(&transcript)
                .await
                .map_err(|e| ApiError::Upstream(e.to_string()))?;
            Ok(Json(json!({ "curiosity": fact })))
        }
        other => Err(ApiError::InvalidRequest(format!("invalid action: {other}"))),
    }
}
