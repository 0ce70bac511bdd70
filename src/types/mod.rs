//! Data types for the document server
//!
//! This module contains the core data structures used throughout the application.

mod document;
mod search_result;
mod summary;

pub use document::{ContentType, Document, DocumentPatch, NewDocument};
pub use search_result::SearchResult;
pub use summary::{Summary, SummaryFocus};
