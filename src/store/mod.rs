//! Document Store - in-memory document table
//!
//! This module contains the document store with thread-safe CRUD
//! operations and content-type filtered listing.

mod crud;
mod query;
mod seed;

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::error::DocResult;
use crate::types::{Document, DocumentPatch, NewDocument};

/// Documents keyed by id plus the next id to hand out
#[derive(Debug)]
pub(crate) struct DocumentTable {
    pub(crate) documents: BTreeMap<u64, Document>,
    pub(crate) next_id: u64,
}

impl Default for DocumentTable {
    fn default() -> Self {
        Self {
            documents: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory document store safe to share between request handlers
#[derive(Debug, Default)]
pub struct DocumentStore {
    pub(crate) table: RwLock<DocumentTable>,
}

impl DocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the three sample documents
    pub fn with_sample_documents() -> Self {
        let store = Self::new();
        seed::insert_sample_documents(&store);
        store
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.table.read().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Re-export methods from submodules by implementing them here
impl DocumentStore {
    // CRUD operations (from crud.rs)
    pub fn create(&self, document: NewDocument) -> DocResult<Document> {
        crud::create_document(self, document)
    }

    pub fn update(&self, id: u64, patch: DocumentPatch) -> DocResult<Document> {
        crud::update_document(self, id, patch)
    }

    pub fn delete(&self, id: u64) -> DocResult<()> {
        crud::delete_document(self, id)
    }

    // Query operations (from query.rs)
    pub fn get(&self, id: u64) -> Option<Document> {
        query::get_document(self, id)
    }

    /// List documents in id order, optionally filtered by content type.
    /// `None` or `"all"` disables the filter; unknown kinds match nothing.
    pub fn list(&self, content_type: Option<&str>) -> Vec<Document> {
        query::list_documents(self, content_type)
    }
}
