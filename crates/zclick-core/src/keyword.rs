//! Keyword performance records.
//!
//! A [`KeywordRecord`] is one normalized search-analytics row; a
//! [`ScoredKeyword`] is the same row after the zero-click score has been
//! derived. The score lives on a separate type so that filtering and chart
//! shaping can only ever see scored data.

use serde::{Deserialize, Serialize};

/// One row of search performance for a single dimension tuple over a fixed
/// date range.
///
/// `keys` is the ordered list of dimension values exactly as requested in the
/// query (`["query"]` requests yield one element, `["query", "country"]`
/// requests yield two). Nothing in the pipeline branches on its length;
/// single-dimension callers unwrap the single element at the presentation
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keys: Vec<String>,
    pub clicks: u64,
    pub impressions: u64,
    /// Click-through rate as a percentage in `[0, 100]`.
    pub ctr: f64,
    /// Average SERP position, >= 1.0.
    pub position: f64,
}

impl KeywordRecord {
    /// Joined dimension values, for chart labels and table display.
    #[must_use]
    pub fn label(&self) -> String {
        self.keys.join(" / ")
    }
}

/// A [`KeywordRecord`] with its derived zero-click score.
///
/// Higher score = larger share of impressions that produced no click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    pub keys: Vec<String>,
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    pub position: f64,
    /// Percentage in `[0, 100]`; exactly `0.0` when `impressions == 0`.
    pub zero_click_score: f64,
}

impl ScoredKeyword {
    /// Joined dimension values, for chart labels and table display.
    #[must_use]
    pub fn label(&self) -> String {
        self.keys.join(" / ")
    }
}

/// Caller-supplied selection thresholds for the keyword filter.
///
/// Values are taken as-is: out-of-range thresholds (negative, absurdly
/// large) degrade to empty or full results rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterThresholds {
    pub min_impressions: u64,
    /// Maximum CTR, as a percentage.
    pub max_ctr: f64,
    /// Minimum zero-click score, as a percentage.
    pub min_zero_click_score: f64,
}
