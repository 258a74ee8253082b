//! Fuzzy matching utilities
//!
//! Normalized edit-distance similarity between a spoken phrase and
//! canonical item names.

use strsim::normalized_levenshtein;

/// Score given to a phrase that appears verbatim inside a candidate
pub const CONTAINMENT_SCORE: f64 = 0.9;

/// Phrases this short never count as contained in a candidate
const MIN_CONTAINED_LEN: usize = 2;

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub value: String,
    pub score: f64,
}

/// Similarity in `[0, 1]` between a phrase and a candidate name
///
/// `1 - distance / max(len)`, except that a phrase longer than two
/// characters found inside the candidate scores [`CONTAINMENT_SCORE`].
pub fn similarity(phrase: &str, candidate: &str) -> f64 {
    let phrase = phrase.to_lowercase();
    let candidate = candidate.to_lowercase();

    if phrase == candidate {
        return 1.0;
    }
    if phrase.chars().count() > MIN_CONTAINED_LEN && candidate.contains(&phrase) {
        return CONTAINMENT_SCORE;
    }

    normalized_levenshtein(&phrase, &candidate)
}

/// Best scoring candidate; the earliest candidate wins ties
pub fn best_match<'a, I>(phrase: &str, candidates: I) -> Option<FuzzyMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<FuzzyMatch> = None;

    for candidate in candidates {
        let score = similarity(phrase, candidate);
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(FuzzyMatch {
                value: candidate.to_string(),
                score,
            });
        }
    }

    best
}

/// Up to `n` candidates scoring at least `cutoff`, best first
pub fn find_matches<'a, I>(phrase: &str, candidates: I, n: usize, cutoff: f64) -> Vec<FuzzyMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut matches: Vec<FuzzyMatch> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let score = similarity(phrase, candidate);
            (score >= cutoff).then(|| FuzzyMatch {
                value: candidate.to_string(),
                score,
            })
        })
        .collect();

    // Stable sort keeps candidate order among equal scores
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(n);

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_edit_distance() {
        // one substitution over eight characters
        assert!((similarity("turmerik", "turmeric") - 0.875).abs() < 1e-9);
        assert_eq!(similarity("Milk", "milk"), 1.0);
    }

    #[test]
    fn test_similarity_containment() {
        assert_eq!(similarity("basmati", "basmati rice"), CONTAINMENT_SCORE);
        // too short to count as contained
        assert!(similarity("ri", "rice") < CONTAINMENT_SCORE);
        // the candidate inside the phrase is not containment
        assert!(similarity("2 apples", "apples") < 0.85);
    }

    #[test]
    fn test_best_match_prefers_first_on_tie() {
        let candidates = ["rice cakes", "rice noodles"];
        let best = best_match("rice", candidates.iter().copied()).unwrap();
        assert_eq!(best.value, "rice cakes");
        assert_eq!(best.score, CONTAINMENT_SCORE);
    }

    #[test]
    fn test_best_match_empty_candidates() {
        assert!(best_match("milk", std::iter::empty()).is_none());
    }

    #[test]
    fn test_find_matches() {
        let candidates = ["cumin", "cinnamon", "cardamom"];
        let matches = find_matches("cumen", candidates.iter().copied(), 2, 0.5);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].value, "cumin");
        assert!(matches.len() <= 2);
    }
}
