//! Term expansion tables for semantic search

use std::collections::HashSet;

/// Synonyms keyed by lowercase base term
pub const SYNONYMS: &[(&str, &[&str])] = &[
    ("financial", &["monetary", "fiscal", "economic", "revenue", "budgetary"]),
    ("growth", &["increase", "expansion", "development", "rise", "gain"]),
    ("report", &["document", "analysis", "assessment", "evaluation", "review"]),
    ("market", &["industry", "sector", "business", "commercial", "trade"]),
    ("research", &["study", "investigation", "analysis", "examination", "survey"]),
    ("data", &["information", "statistics", "figures", "metrics", "records"]),
    ("customer", &["client", "consumer", "user", "buyer", "patron"]),
    ("product", &["item", "merchandise", "goods", "commodity", "offering"]),
    ("sales", &["revenue", "income", "earnings", "turnover", "proceeds"]),
    ("strategy", &["plan", "approach", "method", "tactic", "procedure"]),
    (
        "innovation",
        &["invention", "creation", "advancement", "breakthrough", "development"],
    ),
    ("technology", &["tech", "digital", "electronic", "IT", "computing"]),
    (
        "performance",
        &["achievement", "accomplishment", "result", "output", "efficiency"],
    ),
    (
        "improvement",
        &["enhancement", "upgrade", "advancement", "progress", "refinement"],
    ),
    ("challenge", &["problem", "difficulty", "obstacle", "issue", "hurdle"]),
];

/// Related concepts keyed by the same base terms
pub const RELATED_CONCEPTS: &[(&str, &[&str])] = &[
    ("financial", &["profit", "investment", "cash flow", "assets", "capital"]),
    (
        "growth",
        &["profit margin", "market share", "scaling", "trajectory", "upward trend"],
    ),
    (
        "report",
        &["findings", "conclusions", "recommendations", "insights", "summary"],
    ),
    (
        "market",
        &["competition", "demand", "supply", "consumer behavior", "trends"],
    ),
    (
        "research",
        &["methodology", "findings", "hypothesis", "data collection", "literature"],
    ),
    (
        "data",
        &["analysis", "collection", "interpretation", "visualization", "insights"],
    ),
    (
        "customer",
        &["satisfaction", "experience", "retention", "acquisition", "feedback"],
    ),
    ("product", &["development", "design", "features", "quality", "lifecycle"]),
    ("sales", &["marketing", "conversion", "pipeline", "forecast", "quota"]),
    (
        "strategy",
        &["vision", "goals", "objectives", "implementation", "execution"],
    ),
    (
        "innovation",
        &["disruption", "creativity", "R&D", "patents", "intellectual property"],
    ),
    (
        "technology",
        &["software", "hardware", "infrastructure", "platform", "solution"],
    ),
    ("performance", &["KPI", "metrics", "benchmark", "evaluation", "assessment"]),
    (
        "improvement",
        &[
            "optimization",
            "streamlining",
            "iteration",
            "incremental change",
            "transformation",
        ],
    ),
    ("challenge", &["risk", "threat", "weakness", "limitation", "constraint"]),
];

type ExpansionTable = [(&'static str, &'static [&'static str])];

fn lookup(table: &'static ExpansionTable, term: &str) -> &'static [&'static str] {
    table
        .iter()
        .find(|(key, _)| *key == term)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

/// Synonyms for an exact lowercase base term
pub fn get_synonyms(term: &str) -> &'static [&'static str] {
    lookup(SYNONYMS, term)
}

/// Related concepts for an exact lowercase base term
pub fn get_related_concepts(term: &str) -> &'static [&'static str] {
    lookup(RELATED_CONCEPTS, term)
}

/// Expand a query into its lowercase tokens plus table-defined synonyms and,
/// optionally, related concepts.
///
/// Duplicates collapse. Order is deterministic: all query tokens first, then
/// each token's synonyms followed by its related concepts.
pub fn expand_terms(query: &str, include_related: bool) -> Vec<String> {
    let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut expanded = Vec::new();
    let mut push = |term: &str| {
        if seen.insert(term.to_string()) {
            expanded.push(term.to_string());
        }
    };

    for token in &tokens {
        push(token);
    }

    for token in &tokens {
        for synonym in get_synonyms(token) {
            push(synonym);
        }
        if include_related {
            for concept in get_related_concepts(token) {
                push(concept);
            }
        }
    }

    expanded
}
