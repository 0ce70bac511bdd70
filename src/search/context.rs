//! Snippet extraction around the first matched term

/// Tokens kept on each side of the matched token
pub const DEFAULT_CONTEXT_WINDOW: usize = 10;
/// Tokens returned when nothing matches
pub const FALLBACK_TOKENS: usize = 20;

const ELLIPSIS: &str = "...";

/// Extract a short excerpt around the first token containing any of `terms`.
///
/// Terms are tried in order; within a term, tokens are scanned left to right.
/// Matching is a case-insensitive substring test against single
/// whitespace-delimited tokens, so multi-word terms never match here.
pub fn extract_context(text: &str, terms: &[String], window: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();

    for term in terms {
        let term_lower = term.to_lowercase();
        if let Some(i) = words
            .iter()
            .position(|word| word.to_lowercase().contains(&term_lower))
        {
            let start = i.saturating_sub(window);
            let end = words.len().min(i + window + 1);
            return format!("{}{}", words[start..end].join(" "), ELLIPSIS);
        }
    }

    let end = words.len().min(FALLBACK_TOKENS);
    format!("{}{}", words[..end].join(" "), ELLIPSIS)
}
