//! Fuzzy header suggestions for fields the alias tables could not map.
//!
//! Suggestions only explain a rejection ("did you mean ...?"); they never
//! feed back into a [`ColumnMapping`](tape_model::ColumnMapping).

use std::cmp::Ordering;

use rapidfuzz::distance::jaro_winkler;
use tape_model::CanonicalField;

use crate::normalize::normalize_text;

/// Default minimum similarity for a suggestion to be reported.
pub const SUGGESTION_MIN_SCORE: f64 = 0.75;

/// A candidate header for an unmapped field.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub column: String,
    /// Best Jaro-Winkler similarity against the field's label or aliases.
    pub score: f64,
    /// The alias or label that produced the score.
    pub matched: String,
}

/// Scores every header against `field` and returns those at or above
/// `min_score`, best first. Ties keep header order.
pub fn suggest_columns(field: CanonicalField, headers: &[String], min_score: f64) -> Vec<Suggestion> {
    let targets: Vec<String> = std::iter::once(field.label())
        .chain(field.aliases().iter().copied())
        .map(normalize_text)
        .collect();

    let mut suggestions: Vec<Suggestion> = headers
        .iter()
        .filter_map(|header| {
            let normalized = normalize_text(header);
            if normalized.is_empty() {
                return None;
            }
            let (score, matched) = targets
                .iter()
                .map(|target| {
                    let score = jaro_winkler::similarity(normalized.chars(), target.chars());
                    (score, target)
                })
                .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal))?;
            (score >= min_score).then(|| Suggestion {
                column: header.clone(),
                score,
                matched: matched.clone(),
            })
        })
        .collect();

    suggestions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    suggestions
}

/// The single best suggestion, if any clears [`SUGGESTION_MIN_SCORE`].
pub fn closest_column(field: CanonicalField, headers: &[String]) -> Option<Suggestion> {
    suggest_columns(field, headers, SUGGESTION_MIN_SCORE)
        .into_iter()
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn near_miss_is_suggested() {
        let suggestion = closest_column(
            CanonicalField::TermMonths,
            &headers(&["Borrower Name", "Trm Months"]),
        )
        .expect("suggestion");
        assert_eq!(suggestion.column, "Trm Months");
        assert!(suggestion.score > 0.9);
    }

    #[test]
    fn unrelated_headers_are_not_suggested() {
        assert!(closest_column(CanonicalField::Principal, &headers(&["zzz", "qqq"])).is_none());
    }

    #[test]
    fn suggestions_sorted_best_first() {
        let suggestions = suggest_columns(
            CanonicalField::Balance,
            &headers(&["Cur Bal", "Current Balanc"]),
            0.5,
        );
        assert_eq!(suggestions[0].column, "Current Balanc");
        assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
