//! Zero-click score derivation.

use zclick_core::{KeywordRecord, ScoredKeyword};

/// Share of impressions that produced no click, as a percentage.
///
/// `(impressions - clicks) / impressions * 100` when `impressions > 0`.
/// Zero impressions score exactly `0.0` — no traffic is "no zero-click
/// signal", not a maximal one, so near-zero-traffic keywords never show up
/// as false positives. Pure function of the two counts only.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn zero_click_score(clicks: u64, impressions: u64) -> f64 {
    if impressions == 0 {
        return 0.0;
    }
    // clicks > impressions is not expected upstream; saturate rather than wrap.
    impressions.saturating_sub(clicks) as f64 / impressions as f64 * 100.0
}

/// Rebuilds a record set with the zero-click score populated on every record.
///
/// Order is preserved; an empty set comes back empty. Re-deriving an already
/// scored set yields the same values, since the score depends only on the
/// click and impression counts.
#[must_use]
pub fn score_keywords(records: Vec<KeywordRecord>) -> Vec<ScoredKeyword> {
    records
        .into_iter()
        .map(|record| {
            let zero_click_score = zero_click_score(record.clicks, record.impressions);
            ScoredKeyword {
                keys: record.keys,
                clicks: record.clicks,
                impressions: record.impressions,
                ctr: record.ctr,
                position: record.position,
                zero_click_score,
            }
        })
        .collect()
}
