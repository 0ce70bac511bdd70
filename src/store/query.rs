//! Query operations for the document store

use crate::types::{ContentType, Document};

use super::DocumentStore;

/// Filter value meaning "every content type"
const ALL_TYPES: &str = "all";

pub fn get_document(store: &DocumentStore, id: u64) -> Option<Document> {
    store.table.read().documents.get(&id).cloned()
}

pub fn list_documents(store: &DocumentStore, content_type: Option<&str>) -> Vec<Document> {
    let table = store.table.read();

    match content_type.map(str::trim) {
        None | Some("") => table.documents.values().cloned().collect(),
        Some(filter) if filter.eq_ignore_ascii_case(ALL_TYPES) => {
            table.documents.values().cloned().collect()
        }
        Some(filter) => match ContentType::parse(filter) {
            Some(kind) => table
                .documents
                .values()
                .filter(|d| d.content_type == kind)
                .cloned()
                .collect(),
            None => {
                tracing::debug!(filter, "unknown content type filter");
                Vec::new()
            }
        },
    }
}
