//! Zero-click analysis pipeline.
//!
//! Pure transforms over keyword record sets: derive the zero-click score
//! from click/impression counts, filter against caller thresholds with a
//! descending-score ordering, and shape the derived/filtered sets into
//! chart-ready views. No I/O, no shared state; every function builds fresh
//! output and leaves its input untouched.

pub mod charts;
pub mod filter;
pub mod score;

pub use charts::{
    shape_charts, ChartData, DistributionView, RankedKeyword, ScatterPoint, ScatterView,
    TopKeywordsView, TOP_KEYWORDS_LIMIT,
};
pub use filter::filter_keywords;
pub use score::{score_keywords, zero_click_score};
