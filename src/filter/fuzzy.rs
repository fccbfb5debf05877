//! Fuzzy matching implementation.
//!
//! Uses SkimMatcherV2 for matching. Unlike a picker that ranks results,
//! scripny keeps catalog order and only uses the matcher as a predicate.

use std::sync::OnceLock;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher as FuzzyMatcherTrait;

/// Shared case-sensitive matcher.
static RESPECT_CASE: OnceLock<SkimMatcherV2> = OnceLock::new();
/// Shared case-insensitive matcher.
static IGNORE_CASE: OnceLock<SkimMatcherV2> = OnceLock::new();

fn global_matcher(case_sensitive: bool) -> &'static SkimMatcherV2 {
    if case_sensitive {
        RESPECT_CASE.get_or_init(|| SkimMatcherV2::default().respect_case())
    } else {
        IGNORE_CASE.get_or_init(|| SkimMatcherV2::default().ignore_case())
    }
}

/// Check if `query` fuzzy-matches `text`.
///
/// An empty query matches everything.
pub fn fuzzy_matches(query: &str, text: &str, case_sensitive: bool) -> bool {
    if query.is_empty() {
        return true;
    }
    global_matcher(case_sensitive)
        .fuzzy_match(text, query)
        .is_some()
}
