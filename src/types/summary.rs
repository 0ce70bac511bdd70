//! Summary types for the summarizer

use serde::{Deserialize, Serialize};

/// What a summary should concentrate on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryFocus {
    #[default]
    KeyPoints,
    Concepts,
    ActionItems,
    Statistics,
}

/// Summary of a single document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub title: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
    #[serde(rename = "fileSize")]
    pub file_size: String,
    pub pages: usize,
    pub focus: SummaryFocus,
    pub points: Vec<String>,
    pub themes: Vec<String>,
}
