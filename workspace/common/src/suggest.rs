//! Approximate city-name matching for live suggestions and "did you mean".
//!
//! Scores are normalized to `0.0..=1.0` where `0.0` is an exact match. A
//! candidate scores the better of:
//!
//! * the whole-string normalized Levenshtein distance, and
//! * the best window of the candidate as long as the query: edit distance
//!   divided by the query length, plus `start / 100` so matches near the
//!   beginning of the name rank higher.
//!
//! The window rule lets a prefix such as `"Par"` match `"Paris"`.

use crate::cities::CITIES;

/// Default acceptance threshold; lower is stricter.
pub const DEFAULT_THRESHOLD: f64 = 0.3;
/// Cap on live suggestions shown under the search box.
pub const MAX_SUGGESTIONS: usize = 10;
/// Cap on fallback candidates offered after a failed lookup.
pub const MAX_FALLBACK: usize = 5;

const LOCATION_PENALTY_DISTANCE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionEngine {
    dataset: &'static [&'static str],
    threshold: f64,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(CITIES)
    }
}

impl SuggestionEngine {
    pub fn new(dataset: &'static [&'static str]) -> Self {
        Self {
            dataset,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Candidates within the threshold, best first. Blank input gives nothing.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        self.ranked(query)
            .into_iter()
            .take_while(|(_, score)| *score <= self.threshold)
            .take(MAX_SUGGESTIONS)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Suggestions after a failed lookup.
    ///
    /// Falls back to the closest names regardless of threshold when nothing
    /// is close enough, so a failed search always offers alternatives.
    pub fn did_you_mean(&self, query: &str) -> Vec<String> {
        let close = self.suggest(query);
        if !close.is_empty() {
            return close;
        }
        self.ranked(query)
            .into_iter()
            .take(MAX_FALLBACK)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    fn ranked(&self, query: &str) -> Vec<(&'static str, f64)> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(&'static str, Score)> = self
            .dataset
            .iter()
            .map(|name| (*name, score(&query, &name.to_lowercase())))
            .collect();
        // Equal scores fall back to the whole-name distance, then to dataset
        // order (the sort is stable).
        scored.sort_by(|a, b| {
            a.1.best
                .total_cmp(&b.1.best)
                .then(a.1.whole.total_cmp(&b.1.whole))
        });
        scored
            .into_iter()
            .map(|(name, score)| (name, score.best))
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct Score {
    best: f64,
    whole: f64,
}

/// Both arguments are expected lowercased.
fn score(query: &str, candidate: &str) -> Score {
    let whole = 1.0 - strsim::normalized_levenshtein(query, candidate);

    let query_len = query.chars().count();
    let chars: Vec<char> = candidate.chars().collect();
    if query_len == 0 || chars.len() < query_len {
        return Score { best: whole, whole };
    }

    let windowed = (0..=chars.len() - query_len)
        .map(|start| {
            let window: String = chars[start..start + query_len].iter().collect();
            let errors = strsim::levenshtein(query, &window) as f64;
            errors / query_len as f64 + start as f64 / LOCATION_PENALTY_DISTANCE
        })
        .fold(f64::INFINITY, f64::min);

    Score {
        best: whole.min(windowed),
        whole,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typo_suggests_intended_city() {
        let engine = SuggestionEngine::default();
        let results = engine.suggest("Londn");
        assert_eq!(results.first().map(String::as_str), Some("London"));
    }

    #[test]
    fn test_prefix_matches() {
        let engine = SuggestionEngine::default();
        let results = engine.suggest("Par");
        assert_eq!(results.first().map(String::as_str), Some("Paris"));
    }

    #[test]
    fn test_matching_ignores_case() {
        let engine = SuggestionEngine::default();
        assert_eq!(engine.suggest("tokyo").first().map(String::as_str), Some("Tokyo"));
    }

    #[test]
    fn test_no_match_within_threshold_is_empty() {
        let engine = SuggestionEngine::default();
        assert!(engine.suggest("xqzvkw").is_empty());
    }

    #[test]
    fn test_empty_query_is_empty() {
        let engine = SuggestionEngine::default();
        assert!(engine.suggest("").is_empty());
        assert!(engine.suggest("   ").is_empty());
        assert!(engine.did_you_mean("").is_empty());
    }

    #[test]
    fn test_results_are_ranked_best_first() {
        static DATASET: &[&str] = &["Londonderry", "London", "Lund"];
        let engine = SuggestionEngine::new(DATASET);
        let results = engine.suggest("London");
        assert_eq!(results[0], "London");
        assert!(results.contains(&"Londonderry".to_string()));
    }

    #[test]
    fn test_full_ties_keep_dataset_order() {
        static DATASET: &[&str] = &["Parma", "Paris"];
        let engine = SuggestionEngine::new(DATASET);
        assert_eq!(engine.suggest("Par"), vec!["Parma".to_string(), "Paris".to_string()]);
    }

    #[test]
    fn test_stricter_threshold_drops_typos() {
        let engine = SuggestionEngine::default().with_threshold(0.0);
        assert!(engine.suggest("Londn").is_empty());
        assert_eq!(engine.suggest("London"), vec!["London".to_string()]);
    }

    #[test]
    fn test_did_you_mean_falls_back_to_closest() {
        let engine = SuggestionEngine::default();
        assert!(engine.suggest("Zzxqville").is_empty());

        let fallback = engine.did_you_mean("Zzxqville");
        assert!(!fallback.is_empty());
        assert!(fallback.len() <= MAX_FALLBACK);
        assert!(fallback.iter().all(|name| CITIES.contains(&name.as_str())));
    }

    #[test]
    fn test_did_you_mean_prefers_close_matches() {
        let engine = SuggestionEngine::default();
        assert_eq!(engine.did_you_mean("Londn"), engine.suggest("Londn"));
    }

    #[test]
    fn test_live_suggestions_are_capped() {
        let engine = SuggestionEngine::default();
        assert!(engine.suggest("a").len() <= MAX_SUGGESTIONS);
    }
}
