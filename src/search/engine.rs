//! Ranked search over a document collection

use std::time::Instant;

use rand::rngs::StdRng;

use super::context::{extract_context, DEFAULT_CONTEXT_WINDOW};
use super::highlight::{highlight_with, HighlightMarkers};
use super::scoring::{score, JitterSource, RngJitter};
use super::synonyms::expand_terms;
use crate::types::{Document, SearchResult};

/// Text searched for documents uploaded without extracted content
pub fn placeholder_content(name: &str, query: &str) -> String {
    format!(
        "This is sample content for {} that might contain terms like {}, financial growth, revenue increase, and economic expansion.",
        name, query
    )
}

/// Keyword-expansion search engine.
///
/// Holds no documents; every call is a function of its inputs, the static
/// expansion tables and the jitter source.
pub struct RelevanceSearchEngine<J = RngJitter<StdRng>> {
    jitter: J,
    markers: HighlightMarkers,
    context_window: usize,
}

impl RelevanceSearchEngine {
    /// Engine with entropy-seeded jitter
    pub fn new() -> Self {
        Self::with_jitter(RngJitter::from_entropy())
    }
}

impl Default for RelevanceSearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<J: JitterSource> RelevanceSearchEngine<J> {
    pub fn with_jitter(jitter: J) -> Self {
        Self {
            jitter,
            markers: HighlightMarkers::default(),
            context_window: DEFAULT_CONTEXT_WINDOW,
        }
    }

    pub fn with_markers(mut self, markers: HighlightMarkers) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_context_window(mut self, window: usize) -> Self {
        self.context_window = window;
        self
    }

    /// Score, filter and rank `documents` against `query`.
    ///
    /// With `semantic` the query is expanded with synonyms and related
    /// concepts; otherwise the whole lowercase query is the only term.
    /// Results are sorted by descending relevance, ties keeping collection order.
    pub fn search<'a>(
        &mut self,
        documents: &'a [Document],
        query: &str,
        semantic: bool,
    ) -> Vec<SearchResult<'a>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let started = Instant::now();
        let query_lower = query.to_lowercase();

        let terms = if semantic {
            expand_terms(query, true)
        } else {
            vec![query_lower.clone()]
        };
        let anchor = query_lower.split_whitespace().next().unwrap_or_default();

        let mut results: Vec<SearchResult<'a>> = documents
            .iter()
            .filter_map(|doc| {
                let content = match doc.text() {
                    Some(text) => text.to_string(),
                    None => placeholder_content(&doc.name, query),
                };

                let relevance = score(&content, &terms, anchor, &mut self.jitter);
                if relevance == 0 {
                    return None;
                }

                let snippet = extract_context(&content, &terms, self.context_window);
                Some(SearchResult {
                    document: doc,
                    relevance_score: relevance,
                    matched_snippet: highlight_with(&snippet, &terms, &query_lower, &self.markers),
                })
            })
            .collect();

        // sort_by is stable: equal scores keep collection order
        results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));

        tracing::debug!(
            query = %query,
            semantic,
            terms = terms.len(),
            candidates = documents.len(),
            matched = results.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "search completed"
        );

        results
    }
}
