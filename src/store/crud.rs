//! CRUD operations for the document store

use chrono::Utc;

use crate::error::{DocError, DocResult};
use crate::types::{Document, DocumentPatch, NewDocument};
use crate::validation::{validate_new_document, validate_patch};

use super::DocumentStore;

/// Create a document (holds write lock while assigning the id)
pub fn create_document(store: &DocumentStore, new_doc: NewDocument) -> DocResult<Document> {
    let content_type = validate_new_document(&new_doc)?;

    let mut table = store.table.write();
    let id = table.next_id;
    table.next_id += 1;

    let document = Document {
        id,
        name: new_doc.name,
        content_type,
        size: new_doc.size,
        upload_date: Utc::now(),
        content: new_doc.content,
    };
    table.documents.insert(id, document.clone());

    tracing::info!(id, name = %document.name, kind = %content_type, "document created");
    Ok(document)
}

/// Apply a partial update (holds write lock during entire operation)
pub fn update_document(store: &DocumentStore, id: u64, patch: DocumentPatch) -> DocResult<Document> {
    validate_patch(&patch)?;

    let mut table = store.table.write();
    let document = table.documents.get_mut(&id).ok_or(DocError::NotFound(id))?;

    if let Some(name) = patch.name {
        document.name = name;
    }
    if let Some(kind) = patch.content_type {
        document.content_type = kind;
    }
    if let Some(size) = patch.size {
        document.size = size;
    }
    if let Some(content) = patch.content {
        document.content = Some(content);
    }

    tracing::info!(id, "document updated");
    Ok(document.clone())
}

/// Delete a document
pub fn delete_document(store: &DocumentStore, id: u64) -> DocResult<()> {
    let removed = store.table.write().documents.remove(&id);

    match removed {
        Some(document) => {
            tracing::info!(id, name = %document.name, "document deleted");
            Ok(())
        }
        None => Err(DocError::NotFound(id)),
    }
}
