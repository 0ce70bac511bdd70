//! Summary endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{error_response, parse_id, ApiError};
use crate::api::state::AppState;
use crate::error::DocError;
use crate::summarize::{summarize, SummaryOptions};

/// GET /api/documents/:id/summary - Canned summary of one document
pub async fn summarize_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    options: Result<Query<SummaryOptions>, QueryRejection>,
) -> Response {
    let Query(options) = match options {
        Ok(options) => options,
        Err(rejection) => {
            let error = ApiError::bad_request(format!(
                "Invalid summary options: {}",
                rejection.body_text()
            ));
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match state.store.get(id) {
        Some(document) => (StatusCode::OK, Json(summarize(&document, &options))).into_response(),
        None => error_response(DocError::NotFound(id)),
    }
}
