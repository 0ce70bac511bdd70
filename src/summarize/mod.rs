//! Canned document summaries
//!
//! Summaries come from a static table of templates selected by keyword
//! presence. Documents matching no template get a generic summary built from
//! their leading sentences.

mod templates;

use serde::Deserialize;

use crate::search::SYNONYMS;
use crate::types::{Document, Summary, SummaryFocus};
use crate::utils::format_file_size;

pub use templates::{match_template, SummaryTemplate, COMPUTER_ORGANIZATION, FINANCE, TEMPLATES};

pub const MIN_LENGTH: i64 = 1;
pub const MAX_LENGTH: i64 = 5;
pub const DEFAULT_LENGTH: i64 = 3;

const WORDS_PER_PAGE: usize = 500;

/// Summary length (1 = very short … 5 = very long) and focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SummaryOptions {
    #[serde(default = "default_length")]
    pub length: i64,
    #[serde(default)]
    pub focus: SummaryFocus,
}

fn default_length() -> i64 {
    DEFAULT_LENGTH
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            focus: SummaryFocus::default(),
        }
    }
}

impl SummaryOptions {
    /// Number of points to return; out-of-range lengths are clamped
    pub fn max_points(&self) -> usize {
        self.length.clamp(MIN_LENGTH, MAX_LENGTH) as usize + 1
    }
}

/// Summarize a document
pub fn summarize(document: &Document, options: &SummaryOptions) -> Summary {
    let text = document.text().unwrap_or(&document.name);
    let text_lower = text.to_lowercase();

    let (points, themes, action_items) = match match_template(&text_lower) {
        Some(template) => {
            tracing::debug!(id = document.id, template = template.name, "summary template matched");
            (
                to_strings(template.points),
                to_strings(template.themes),
                to_strings(template.action_items),
            )
        }
        None => (leading_sentences(document), detect_themes(&text_lower), Vec::new()),
    };

    let mut selected = match options.focus {
        SummaryFocus::KeyPoints => points,
        SummaryFocus::Concepts => themes.clone(),
        SummaryFocus::ActionItems => action_items,
        SummaryFocus::Statistics => {
            let numeric: Vec<String> = points
                .iter()
                .filter(|p| p.chars().any(|c| c.is_ascii_digit()))
                .cloned()
                .collect();
            if numeric.is_empty() {
                points
            } else {
                numeric
            }
        }
    };
    selected.truncate(options.max_points());

    Summary {
        title: document.name.clone(),
        file_type: document.content_type.as_str().to_uppercase(),
        file_size: format_file_size(document.size),
        pages: estimate_pages(text),
        focus: options.focus,
        points: selected,
        themes,
    }
}

/// Page estimate from word count, at least one page
pub fn estimate_pages(text: &str) -> usize {
    text.split_whitespace().count().div_ceil(WORDS_PER_PAGE).max(1)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn leading_sentences(document: &Document) -> Vec<String> {
    let Some(content) = document.text() else {
        return vec![format!("No extracted text is available for {}.", document.name)];
    };

    content
        .split_inclusive(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Expansion-table base terms present in the text, title-cased
fn detect_themes(text_lower: &str) -> Vec<String> {
    SYNONYMS
        .iter()
        .filter(|(term, _)| text_lower.contains(term))
        .map(|(term, _)| {
            let mut chars = term.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}
