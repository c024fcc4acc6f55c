//! Threshold-based selection of likely zero-click keywords.

use zclick_core::{FilterThresholds, ScoredKeyword};

/// Selects the records that plausibly represent zero-click keywords and
/// returns them ranked by score, highest first.
///
/// A record is retained iff all three hold: `impressions >= min_impressions`,
/// `ctr <= max_ctr`, and `zero_click_score >= min_zero_click_score`. The sort
/// is stable, so equal scores keep their original relative order. The input
/// is never mutated; thresholds are never validated — degenerate values give
/// degenerate (empty or full) results, and re-filtering an already filtered
/// set with the same thresholds returns it unchanged.
#[must_use]
pub fn filter_keywords(
    records: &[ScoredKeyword],
    thresholds: &FilterThresholds,
) -> Vec<ScoredKeyword> {
    let mut retained: Vec<ScoredKeyword> = records
        .iter()
        .filter(|r| {
            r.impressions >= thresholds.min_impressions
                && r.ctr <= thresholds.max_ctr
                && r.zero_click_score >= thresholds.min_zero_click_score
        })
        .cloned()
        .collect();

    retained.sort_by(|a, b| b.zero_click_score.total_cmp(&a.zero_click_score));
    retained
}
