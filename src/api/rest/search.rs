//! Search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::error_response;
use crate::api::state::AppState;
use crate::error::DocError;
use crate::search::RelevanceSearchEngine;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string
    #[serde(default)]
    pub q: String,
    /// Expand the query with synonyms; anything but `false` enables it
    pub semantic: Option<String>,
    /// Restrict the search to one content type
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

impl SearchParams {
    pub fn semantic_enabled(&self) -> bool {
        self.semantic.as_deref() != Some("false")
    }
}

/// GET /api/search - Ranked keyword-expansion search
///
/// The content-type filter is applied before documents reach the engine.
pub async fn search_documents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    if params.q.trim().is_empty() {
        return error_response(DocError::EmptyQuery);
    }

    let documents = state.store.list(params.content_type.as_deref());

    let mut engine = RelevanceSearchEngine::new();
    let results = engine.search(&documents, &params.q, params.semantic_enabled());

    (StatusCode::OK, Json(results)).into_response()
}
