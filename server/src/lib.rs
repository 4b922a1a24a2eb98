use anyhow::{bail, Result};
use axum::{extract::{Path, Query, State}, http::{HeaderValue, StatusCode}, routing::get, Json, Router};
use linematch_core::{best_match, CorpusTable, Document, VocabularyIndex};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct MatchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct MatchResponse {
    pub query: String,
    pub index: usize,
    pub score: usize,
    pub line: String,
    pub document: Document,
    pub took_s: f64,
}

#[derive(Serialize)]
pub struct DocResponse {
    pub index: usize,
    pub line: String,
    pub document: Document,
}

/// Index and table are built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<VocabularyIndex>,
    pub table: Arc<CorpusTable>,
}

/// Reads the corpus file and builds the read-only query state.
pub fn load_state(corpus_path: &str) -> Result<AppState> {
    let (index, table) = CorpusTable::from_path(corpus_path)?;
    if table.is_empty() {
        bail!("corpus {corpus_path} contains no lines");
    }
    Ok(AppState { index: Arc::new(index), table: Arc::new(table) })
}

pub fn build_app(corpus_path: String) -> Result<Router> {
    let state = load_state(&corpus_path)?;
    let origins = std::env::var("CORS_ALLOW_ORIGIN").ok();
    Ok(build_router(state, origins.as_deref()))
}

/// `allowed_origins` is a comma-separated list; unset or unparsable means any origin.
pub fn build_router(state: AppState, allowed_origins: Option<&str>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/match", get(match_handler))
        .route("/doc/:index", get(doc_handler))
        .with_state(state)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .into_iter()
        .flat_map(|v| v.split(','))
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

pub async fn match_handler(
    State(state): State<AppState>,
    Query(params): Query<MatchParams>,
) -> Result<Json<MatchResponse>, (StatusCode, Json<serde_json::Value>)> {
    let start = std::time::Instant::now();
    let query = Document::query(&params.q, &state.index);
    let m = best_match(&query, &state.table).map_err(|e| {
        (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({ "error": e.to_string() })))
    })?;
    let line = state.table.line(m.index).unwrap_or_default().to_string();
    let elapsed = start.elapsed();
    tracing::debug!(index = m.index, score = m.score, "query answered");
    Ok(Json(MatchResponse {
        query: params.q,
        index: m.index,
        score: m.score,
        line,
        document: query,
        took_s: elapsed.as_secs_f64(),
    }))
}

pub async fn doc_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<DocResponse>, (StatusCode, Json<serde_json::Value>)> {
    match state.table.get(index) {
        Some(entry) => Ok(Json(DocResponse { index, line: entry.text.clone(), document: entry.document.clone() })),
        None => Err((StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "not found" })))),
    }
}
