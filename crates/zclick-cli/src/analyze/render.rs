//! Text rendering of the analysis output: a human-readable summary of the
//! chart views, or tab-delimited rows for export.

use std::fmt::Write as _;

use zclick_analysis::{ChartData, DistributionView, TopKeywordsView};
use zclick_core::ScoredKeyword;

const SCORE_BAR_WIDTH: usize = 40;
const HISTOGRAM_BAR_WIDTH: usize = 30;

/// The filtered set as tab-delimited rows, header first. Dimension values
/// are joined into a single column. `limit` caps the row count; `None`
/// prints every row.
pub(crate) fn tsv(filtered: &[ScoredKeyword], limit: Option<usize>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "query\tclicks\timpressions\tctr\tposition\tzero_click_score"
    );
    for keyword in filtered.iter().take(limit.unwrap_or(usize::MAX)) {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{:.2}\t{:.1}\t{:.1}",
            keyword.label(),
            keyword.clicks,
            keyword.impressions,
            keyword.ctr,
            keyword.position,
            keyword.zero_click_score
        );
    }
    out
}

/// Human-readable run summary: counts, the score distribution as a text
/// histogram, and the top-ranked keywords as horizontal bars. `limit` caps
/// how many ranked bars are shown; `None` shows the whole top view.
pub(crate) fn summary(
    derived: &[ScoredKeyword],
    filtered: &[ScoredKeyword],
    charts: &ChartData,
    limit: Option<usize>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} keywords analyzed, {} matched the zero-click thresholds",
        derived.len(),
        filtered.len()
    );

    if let Some(scatter) = &charts.scatter {
        let _ = writeln!(
            out,
            "scatter: {} points (impressions, log axis) vs CTR %",
            scatter.points.len()
        );
    }

    if let Some(distribution) = &charts.distribution {
        let _ = writeln!(out);
        let _ = writeln!(out, "zero-click score distribution:");
        for line in histogram_lines(distribution) {
            let _ = writeln!(out, "{line}");
        }
    }

    let _ = writeln!(out);
    match &charts.top_keywords {
        Some(top) => {
            let _ = writeln!(out, "top zero-click keywords:");
            for line in ranked_bar_lines(top, limit) {
                let _ = writeln!(out, "{line}");
            }
        }
        None => {
            let _ = writeln!(out, "no keywords matched the thresholds");
        }
    }

    out
}

/// Buckets the score sequence into ten 10-point bins and renders one bar
/// line per bin, scaled to the most populated bin. Scores of exactly 100
/// land in the last bin.
fn histogram_lines(distribution: &DistributionView) -> Vec<String> {
    let mut buckets = [0usize; 10];
    for score in &distribution.scores {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = ((score / 10.0).floor().max(0.0) as usize).min(9);
        buckets[index] += 1;
    }
    let max = buckets.iter().copied().max().unwrap_or(0).max(1);

    buckets
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let bar = "#".repeat(count * HISTOGRAM_BAR_WIDTH / max);
            format!("{:>3}-{:<3} | {bar} {count}", i * 10, (i + 1) * 10)
        })
        .collect()
}

/// One horizontal bar per ranked keyword, bar length proportional to the
/// zero-click score.
fn ranked_bar_lines(top: &TopKeywordsView, limit: Option<usize>) -> Vec<String> {
    top.entries
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|entry| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let width = ((entry.zero_click_score / 100.0) * SCORE_BAR_WIDTH as f64)
                .round()
                .clamp(0.0, SCORE_BAR_WIDTH as f64) as usize;
            format!(
                "{:>5.1}% {:<width$} {}",
                entry.zero_click_score,
                "#".repeat(width),
                entry.label,
                width = SCORE_BAR_WIDTH
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use zclick_analysis::shape_charts;

    fn keyword(label: &str, clicks: u64, impressions: u64, ctr: f64, score: f64) -> ScoredKeyword {
        ScoredKeyword {
            keys: vec![label.to_string()],
            clicks,
            impressions,
            ctr,
            position: 2.5,
            zero_click_score: score,
        }
    }

    #[test]
    fn tsv_has_header_and_one_line_per_keyword() {
        let filtered = vec![
            keyword("best coffee", 10, 1000, 1.0, 99.0),
            keyword("espresso vs latte", 20, 4000, 0.5, 99.5),
        ];
        let text = tsv(&filtered, None);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "query\tclicks\timpressions\tctr\tposition\tzero_click_score"
        );
        assert_eq!(lines[1], "best coffee\t10\t1000\t1.00\t2.5\t99.0");
    }

    #[test]
    fn tsv_of_empty_set_is_just_the_header() {
        let text = tsv(&[], None);
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn tsv_limit_caps_row_count() {
        let filtered = vec![
            keyword("kw-one", 10, 1000, 1.0, 99.0),
            keyword("kw-two", 20, 4000, 0.5, 99.5),
            keyword("kw-three", 30, 9000, 0.3, 99.7),
        ];
        let text = tsv(&filtered, Some(2));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3, "header plus two rows");
        assert!(lines[1].starts_with("kw-one\t"));
        assert!(lines[2].starts_with("kw-two\t"));
    }

    #[test]
    fn tsv_limit_larger_than_set_prints_everything() {
        let filtered = vec![keyword("kw-one", 10, 1000, 1.0, 99.0)];
        let text = tsv(&filtered, Some(50));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn summary_reports_counts_and_top_keywords() {
        let derived = vec![
            keyword("a", 10, 1000, 1.0, 99.0),
            keyword("b", 500, 1000, 50.0, 50.0),
        ];
        let filtered = vec![keyword("a", 10, 1000, 1.0, 99.0)];
        let charts = shape_charts(&derived, &filtered);
        let text = summary(&derived, &filtered, &charts, None);
        assert!(text.contains("2 keywords analyzed, 1 matched"));
        assert!(text.contains("top zero-click keywords:"));
        assert!(text.contains(" a"));
    }

    #[test]
    fn summary_says_so_when_nothing_matched() {
        let derived = vec![keyword("a", 500, 1000, 50.0, 50.0)];
        let charts = shape_charts(&derived, &[]);
        let text = summary(&derived, &[], &charts, None);
        assert!(text.contains("no keywords matched the thresholds"));
    }

    #[test]
    fn summary_limit_caps_ranked_bars() {
        let filtered = vec![
            keyword("kw-one", 10, 1000, 1.0, 99.0),
            keyword("kw-two", 20, 4000, 0.5, 98.0),
            keyword("kw-three", 30, 9000, 0.3, 97.0),
        ];
        let charts = shape_charts(&filtered, &filtered);
        let text = summary(&filtered, &filtered, &charts, Some(2));
        assert!(text.contains("kw-one"));
        assert!(text.contains("kw-two"));
        assert!(
            !text.contains("kw-three"),
            "third bar should be cut by the limit:\n{text}"
        );
    }

    #[test]
    fn histogram_puts_score_100_in_last_bucket() {
        let distribution = DistributionView {
            scores: vec![100.0, 95.0, 5.0],
        };
        let lines = histogram_lines(&distribution);
        assert_eq!(lines.len(), 10);
        assert!(lines[9].ends_with("2"), "last bucket line: {}", lines[9]);
        assert!(lines[0].ends_with("1"), "first bucket line: {}", lines[0]);
    }
}
