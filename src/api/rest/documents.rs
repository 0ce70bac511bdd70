//! Document endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{error_response, parse_id, ApiError};
use crate::api::state::AppState;
use crate::error::DocError;
use crate::types::{DocumentPatch, NewDocument};

/// Query parameters for listing documents
#[derive(Debug, Deserialize)]
pub struct ListDocumentsParams {
    /// Filter by content type (`all` or absent for every type)
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

/// GET /api/documents - List documents
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListDocumentsParams>,
) -> impl IntoResponse {
    Json(state.store.list(params.content_type.as_deref()))
}

/// GET /api/documents/:id - Get single document
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match state.store.get(id) {
        Some(document) => (StatusCode::OK, Json(document)).into_response(),
        None => error_response(DocError::NotFound(id)),
    }
}

/// POST /api/documents - Create document
pub async fn create_document(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewDocument>, JsonRejection>,
) -> Response {
    let Json(new_doc) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let error = ApiError::bad_request(format!(
                "Invalid document data: {}",
                rejection.body_text()
            ));
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    match state.store.create(new_doc) {
        Ok(document) => (StatusCode::CREATED, Json(document)).into_response(),
        Err(e) => error_response(e),
    }
}

/// PATCH /api/documents/:id - Update document
pub async fn update_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<DocumentPatch>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    let Json(patch) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let error = ApiError::bad_request(format!(
                "Invalid update data: {}",
                rejection.body_text()
            ));
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    match state.store.update(id, patch) {
        Ok(document) => (StatusCode::OK, Json(document)).into_response(),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/documents/:id - Delete document
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let result = parse_id(&id).and_then(|id| state.store.delete(id));

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
