//! Document types for the document store

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::file::get_file_type;

/// Supported file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Pdf,
    Docx,
    Txt,
    Pptx,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Pdf,
        ContentType::Docx,
        ContentType::Txt,
        ContentType::Pptx,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Pdf => "pdf",
            ContentType::Docx => "docx",
            ContentType::Txt => "txt",
            ContentType::Pptx => "pptx",
        }
    }

    /// Parse a kind name, case-insensitive. Returns `None` for unsupported kinds.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Infer the kind from a filename extension
    pub fn from_filename(filename: &str) -> Option<Self> {
        Self::parse(&get_file_type(filename))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub size: u64,
    #[serde(rename = "uploadDate")]
    pub upload_date: DateTime<Utc>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Document {
    /// Text the search engine should read. Empty content counts as missing.
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

/// Payload for creating a document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewDocument {
    pub name: String,
    /// Inferred from the filename when omitted
    #[serde(rename = "type", default)]
    pub content_type: Option<ContentType>,
    pub size: u64,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewDocument {
    pub fn new(name: impl Into<String>, content_type: ContentType, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: Some(content_type),
            size,
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub content: Option<String>,
}
