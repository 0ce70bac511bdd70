//! Keyword-expansion search with relevance scoring
//!
//! This module provides "semantic" search through purely lexical means:
//! - Static synonym and related-concept tables for query expansion
//! - Coverage-based relevance scoring with an injectable jitter source
//! - Context snippets around the first matched term
//! - Two-class emphasis markers for the literal query and expanded terms

mod context;
mod engine;
mod highlight;
mod scoring;
mod synonyms;

pub use context::{extract_context, DEFAULT_CONTEXT_WINDOW, FALLBACK_TOKENS};
pub use engine::{placeholder_content, RelevanceSearchEngine};
pub use highlight::{highlight, highlight_with, HighlightMarkers};
pub use scoring::{score, FixedJitter, JitterSource, RngJitter, MAX_SCORE};
pub use synonyms::{expand_terms, get_related_concepts, get_synonyms, RELATED_CONCEPTS, SYNONYMS};
