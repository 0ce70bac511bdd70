//! REST API module for HTTP endpoints
//!
//! Provides REST endpoints for document management:
//! - `GET /api/documents` - List documents, optionally filtered by `type`
//! - `GET /api/documents/:id` - Get single document
//! - `POST /api/documents` - Create document
//! - `PATCH /api/documents/:id` - Update document
//! - `DELETE /api/documents/:id` - Delete document
//! - `GET /api/documents/:id/summary` - Canned summary
//! - `GET /api/search` - Ranked keyword-expansion search

pub mod documents;
pub mod search;
pub mod summarize;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::{DocError, DocResult};

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Convert a crate error into a JSON error response
pub fn error_response(err: DocError) -> Response {
    let (status, body) = match &err {
        DocError::NotFound(_) => (StatusCode::NOT_FOUND, ApiError::not_found(err.to_string())),
        DocError::InvalidId(_) | DocError::Validation(_) | DocError::EmptyQuery => {
            (StatusCode::BAD_REQUEST, ApiError::bad_request(err.to_string()))
        }
        DocError::Io(_) => {
            tracing::error!("Request failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::internal(err.to_string()),
            )
        }
    };
    (status, Json(body)).into_response()
}

/// Parse a document id path segment
pub fn parse_id(raw: &str) -> DocResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| DocError::InvalidId(raw.to_string()))
}
