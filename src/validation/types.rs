//! Validation of document payloads

use crate::error::{DocError, DocResult};
use crate::types::{ContentType, DocumentPatch, NewDocument};

/// File kinds accepted by the upload flow
pub const SUPPORTED_FILE_TYPES: &[&str] = &["pdf", "docx", "txt", "pptx"];

fn validate_name(name: &str) -> DocResult<()> {
    if name.trim().is_empty() {
        return Err(DocError::validation("name must not be empty"));
    }
    Ok(())
}

/// Validate a creation payload and resolve its content type.
///
/// An explicit `type` wins; otherwise the kind is inferred from the filename.
pub fn validate_new_document(doc: &NewDocument) -> DocResult<ContentType> {
    validate_name(&doc.name)?;

    match doc.content_type {
        Some(kind) => Ok(kind),
        None => ContentType::from_filename(&doc.name).ok_or_else(|| {
            DocError::validation(format!(
                "cannot infer type from '{}'. Supported: {:?}",
                doc.name, SUPPORTED_FILE_TYPES
            ))
        }),
    }
}

/// Validate a partial update
pub fn validate_patch(patch: &DocumentPatch) -> DocResult<()> {
    if let Some(ref name) = patch.name {
        validate_name(name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_list_matches_content_types() {
        let kinds: Vec<&str> = ContentType::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(SUPPORTED_FILE_TYPES, kinds.as_slice());
    }

    #[test]
    fn test_explicit_type_wins() {
        let doc = NewDocument::new("notes", ContentType::Txt, 10);
        assert_eq!(validate_new_document(&doc).unwrap(), ContentType::Txt);
    }

    #[test]
    fn test_type_inferred_from_name() {
        let doc = NewDocument {
            name: "deck.pptx".to_string(),
            size: 10,
            ..Default::default()
        };
        assert_eq!(validate_new_document(&doc).unwrap(), ContentType::Pptx);
    }

    #[test]
    fn test_uninferable_type_rejected() {
        let doc = NewDocument {
            name: "archive.zip".to_string(),
            size: 10,
            ..Default::default()
        };
        let err = validate_new_document(&doc).unwrap_err();
        assert!(matches!(err, DocError::Validation(_)));
    }

    #[test]
    fn test_blank_name_rejected() {
        let doc = NewDocument::new("   ", ContentType::Pdf, 10);
        assert!(validate_new_document(&doc).is_err());

        let patch = DocumentPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_patch(&patch).is_err());
        assert!(validate_patch(&DocumentPatch::default()).is_ok());
    }
}
