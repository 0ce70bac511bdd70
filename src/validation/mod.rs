//! Validation for document payloads
//!
//! This module checks creation and update payloads before they reach the store.

mod types;

pub use types::{validate_new_document, validate_patch, SUPPORTED_FILE_TYPES};
