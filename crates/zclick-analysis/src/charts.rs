//! Chart-input shaping.
//!
//! Three projections feed the rendering layer: an impressions/CTR scatter
//! over the full derived set, the raw zero-click score sequence for a
//! distribution plot, and the top-ranked slice of the filtered set for a
//! horizontal bar chart. All three are pass-through projections — nothing
//! here re-sorts or re-filters what upstream produced. `None` is the
//! explicit "no data" signal for an empty source.

use serde::Serialize;
use zclick_core::ScoredKeyword;

/// How many ranked keywords the top-keywords view carries.
pub const TOP_KEYWORDS_LIMIT: usize = 20;

/// One point of the impressions/CTR scatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub impressions: u64,
    /// CTR as a percentage.
    pub ctr: f64,
    pub label: String,
}

/// Scatter input over the full derived set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterView {
    pub points: Vec<ScatterPoint>,
    /// Required rendering hint: impressions span orders of magnitude, and a
    /// linear x-axis visually collapses low-impression keywords.
    pub log_x_axis: bool,
}

/// The zero-click score of every keyword in the derived set, in set order.
///
/// Deliberately unfiltered: the distribution answers "where do scores
/// cluster overall", not "where does the filtered subset sit".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionView {
    pub scores: Vec<f64>,
}

/// One bar of the ranked top-keywords chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedKeyword {
    pub label: String,
    pub zero_click_score: f64,
}

/// The leading slice of the filtered, descending-sorted set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopKeywordsView {
    pub entries: Vec<RankedKeyword>,
}

/// All three chart inputs for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub scatter: Option<ScatterView>,
    pub distribution: Option<DistributionView>,
    pub top_keywords: Option<TopKeywordsView>,
}

/// Scatter input from the derived (unfiltered) set; `None` when empty.
#[must_use]
pub fn scatter_view(derived: &[ScoredKeyword]) -> Option<ScatterView> {
    if derived.is_empty() {
        return None;
    }
    let points = derived
        .iter()
        .map(|k| ScatterPoint {
            impressions: k.impressions,
            ctr: k.ctr,
            label: k.label(),
        })
        .collect();
    Some(ScatterView {
        points,
        log_x_axis: true,
    })
}

/// Score distribution input from the derived (unfiltered) set, order
/// preserved; `None` when empty.
#[must_use]
pub fn distribution_view(derived: &[ScoredKeyword]) -> Option<DistributionView> {
    if derived.is_empty() {
        return None;
    }
    Some(DistributionView {
        scores: derived.iter().map(|k| k.zero_click_score).collect(),
    })
}

/// The first [`TOP_KEYWORDS_LIMIT`] entries of the filtered set, which is
/// already sorted descending; `None` when the filtered set is empty (an
/// absent chart, not a zero-bar one).
#[must_use]
pub fn top_keywords_view(filtered: &[ScoredKeyword]) -> Option<TopKeywordsView> {
    if filtered.is_empty() {
        return None;
    }
    let entries = filtered
        .iter()
        .take(TOP_KEYWORDS_LIMIT)
        .map(|k| RankedKeyword {
            label: k.label(),
            zero_click_score: k.zero_click_score,
        })
        .collect();
    Some(TopKeywordsView { entries })
}

/// Bundles all three chart views for one run.
#[must_use]
pub fn shape_charts(derived: &[ScoredKeyword], filtered: &[ScoredKeyword]) -> ChartData {
    ChartData {
        scatter: scatter_view(derived),
        distribution: distribution_view(derived),
        top_keywords: top_keywords_view(filtered),
    }
}
