//! Ranked search result types

use serde::Serialize;

use super::Document;

/// A document matched by a query, borrowed from the searched collection
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    #[serde(flatten)]
    pub document: &'a Document,
    /// Relevance in [0, 100]
    #[serde(rename = "relevance")]
    pub relevance_score: u8,
    /// Snippet with matched terms wrapped in emphasis markers
    #[serde(rename = "matchedText")]
    pub matched_snippet: String,
}
