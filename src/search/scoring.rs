//! Relevance scoring with injectable jitter

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Weight of expanded-term coverage in the base score
const COVERAGE_WEIGHT: f64 = 60.0;
/// Weight of the exact-match bonus in the base score
const EXACT_MATCH_WEIGHT: f64 = 40.0;

pub const MAX_SCORE: u8 = 100;

/// Source of the multiplicative perturbation applied to every score.
///
/// Implementations must return values in `[0.9, 1.1)`.
pub trait JitterSource {
    fn next_factor(&mut self) -> f64;
}

/// Uniform jitter backed by any random number generator
#[derive(Debug, Clone)]
pub struct RngJitter<R> {
    rng: R,
}

impl<R: Rng> RngJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngJitter<StdRng> {
    /// Jitter seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible jitter for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> JitterSource for RngJitter<R> {
    fn next_factor(&mut self) -> f64 {
        self.rng.gen_range(0.9..1.1)
    }
}

/// Constant jitter, for deterministic scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl Default for FixedJitter {
    fn default() -> Self {
        Self(1.0)
    }
}

impl JitterSource for FixedJitter {
    fn next_factor(&mut self) -> f64 {
        self.0
    }
}

/// Score how well `text` matches `terms`, in `[0, 100]`.
///
/// Coverage counts each distinct term found as a case-insensitive substring.
/// Only `anchor` (the first token of the original query) earns the exact-match
/// bonus, even for multi-token queries.
pub fn score<J: JitterSource + ?Sized>(
    text: &str,
    terms: &[String],
    anchor: &str,
    jitter: &mut J,
) -> u8 {
    if terms.is_empty() {
        return 0;
    }

    let text_lower = text.to_lowercase();
    let total = terms.len() as f64;

    let matches = terms
        .iter()
        .filter(|term| text_lower.contains(term.to_lowercase().as_str()))
        .count() as f64;

    let anchor_lower = anchor.to_lowercase();
    let exact = if !anchor_lower.is_empty() && text_lower.contains(&anchor_lower) {
        1.0
    } else {
        0.0
    };

    let base = (matches / total * COVERAGE_WEIGHT + exact / total * EXACT_MATCH_WEIGHT)
        .min(MAX_SCORE as f64);

    (base * jitter.next_factor())
        .round()
        .clamp(0.0, MAX_SCORE as f64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_single_exact_term_scores_full() {
        let mut jitter = FixedJitter::default();
        let s = score("Financial results", &terms(&["financial"]), "financial", &mut jitter);
        assert_eq!(s, 100);
    }

    #[test]
    fn test_coverage_and_bonus_weights() {
        // 2 of 4 terms match, anchor present: 2/4*60 + 1/4*40 = 40
        let mut jitter = FixedJitter::default();
        let t = terms(&["financial", "fiscal", "monetary", "revenue"]);
        assert_eq!(score("financial revenue", &t, "financial", &mut jitter), 40);

        // only a synonym matches: 1/4*60 = 15
        assert_eq!(score("fiscal year", &t, "financial", &mut jitter), 15);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let mut jitter = FixedJitter(1.09);
        assert_eq!(score("nothing here", &terms(&["zzz"]), "zzz", &mut jitter), 0);
    }

    #[test]
    fn test_empty_terms_scores_zero() {
        let mut jitter = FixedJitter::default();
        assert_eq!(score("anything", &[], "", &mut jitter), 0);
    }

    #[test]
    fn test_jitter_is_clamped() {
        let mut jitter = FixedJitter(1.099);
        let s = score("growth", &terms(&["growth"]), "growth", &mut jitter);
        assert_eq!(s, MAX_SCORE);
    }

    #[test]
    fn test_mixed_case_terms_match() {
        let mut jitter = FixedJitter::default();
        let s = score("Our IT budget", &terms(&["technology", "IT"]), "technology", &mut jitter);
        assert_eq!(s, 30);
    }

    #[test]
    fn test_random_jitter_stays_in_band() {
        let mut jitter = RngJitter::seeded(42);
        for _ in 0..1000 {
            let factor = jitter.next_factor();
            assert!((0.9..1.1).contains(&factor));
        }

        let t = terms(&["financial", "fiscal"]);
        for _ in 0..200 {
            // base = 1/2*60 + 1/2*40 = 50
            let s = score("financial", &t, "financial", &mut jitter);
            assert!((45..=55).contains(&s), "score {} outside jitter band", s);
        }
    }
}
