//! API module for HTTP endpoints
//!
//! This module provides the REST API used by the document manager UI.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
