//! Emphasis markers for matched terms in snippets
//!
//! Known limitation: passes are applied one after another with no overlap
//! resolution. A later term can match inside text an earlier pass already
//! wrapped, or inside the marker text itself.

use regex::{Captures, Regex};

/// Opening and closing markers for both emphasis classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMarkers {
    pub primary_open: String,
    pub primary_close: String,
    pub secondary_open: String,
    pub secondary_close: String,
}

impl Default for HighlightMarkers {
    fn default() -> Self {
        Self {
            primary_open: "<mark class=\"primary\">".to_string(),
            primary_close: "</mark>".to_string(),
            secondary_open: "<mark class=\"secondary\">".to_string(),
            secondary_close: "</mark>".to_string(),
        }
    }
}

/// Highlight with the default markers
pub fn highlight(snippet: &str, terms: &[String], original_term: &str) -> String {
    highlight_with(snippet, terms, original_term, &HighlightMarkers::default())
}

/// Wrap `original_term` with primary markers, then every other term with
/// secondary markers. All matching is literal and case-insensitive.
pub fn highlight_with(
    snippet: &str,
    terms: &[String],
    original_term: &str,
    markers: &HighlightMarkers,
) -> String {
    let original_lower = original_term.to_lowercase();

    let mut result = wrap_all(
        snippet,
        original_term,
        &markers.primary_open,
        &markers.primary_close,
    );

    for term in terms {
        if term.to_lowercase() == original_lower {
            continue;
        }
        result = wrap_all(&result, term, &markers.secondary_open, &markers.secondary_close);
    }

    result
}

fn wrap_all(text: &str, term: &str, open: &str, close: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }

    let pattern = format!("(?i){}", regex::escape(term));
    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(text, |caps: &Captures| format!("{}{}{}", open, &caps[0], close))
            .into_owned(),
        Err(e) => {
            tracing::warn!("Skipping highlight for term {:?}: {}", term, e);
            text.to_string()
        }
    }
}
