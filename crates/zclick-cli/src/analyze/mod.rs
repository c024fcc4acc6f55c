//! The `analyze` subcommand: fetch → normalize → score → filter → shape.
//!
//! Runs the whole pipeline for one site and date window, sequentially and
//! to completion. A fetch failure surfaces as a typed error and a non-zero
//! exit; a legitimately empty result prints a notice and exits zero.

mod render;

use chrono::{Duration, NaiveDate, Utc};
use clap::Args;
use zclick_analysis::{filter_keywords, score_keywords, shape_charts};
use zclick_core::{AppConfig, FilterThresholds};
use zclick_gsc::{normalize_rows, Dimension, SearchAnalyticsQuery};

/// Days the upstream source typically lags before a day's data is final.
/// The default date window ends this far in the past.
const DATA_FINALIZATION_LAG_DAYS: i64 = 3;
const DEFAULT_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Args)]
pub(crate) struct AnalyzeArgs {
    /// Property to analyze (`sc-domain:example.com` or a full URL prefix).
    #[arg(long)]
    site: String,

    /// Inclusive start date (YYYY-MM-DD). Defaults to 30 days before the end date.
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Inclusive end date (YYYY-MM-DD). Defaults to 3 days ago.
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Dimension(s) to group rows by, in order. Defaults to `query`.
    #[arg(long = "dimension")]
    dimensions: Vec<Dimension>,

    /// Minimum impressions for a keyword to count as zero-click.
    #[arg(long, default_value_t = 5000)]
    min_impressions: u64,

    /// Maximum CTR (percentage) for a keyword to count as zero-click.
    #[arg(long, default_value_t = 1.0)]
    max_ctr: f64,

    /// Minimum zero-click score (percentage).
    #[arg(long, default_value_t = 50.0)]
    min_zero_click_score: f64,

    /// Maximum number of TSV rows or ranked bars to print. Unlimited by default.
    #[arg(long)]
    limit: Option<usize>,

    /// Print the filtered set as tab-delimited rows instead of the summary.
    #[arg(long)]
    tsv: bool,
}

pub(crate) async fn run_analyze(config: &AppConfig, args: AnalyzeArgs) -> anyhow::Result<()> {
    let client = crate::build_client(config)?;

    let end_date = args
        .end_date
        .unwrap_or_else(|| Utc::now().date_naive() - Duration::days(DATA_FINALIZATION_LAG_DAYS));
    let start_date = args
        .start_date
        .unwrap_or_else(|| end_date - Duration::days(DEFAULT_WINDOW_DAYS));
    let dimensions = if args.dimensions.is_empty() {
        vec![Dimension::Query]
    } else {
        args.dimensions.clone()
    };

    let query = SearchAnalyticsQuery::new(start_date, end_date, dimensions);
    tracing::debug!(site = %args.site, %start_date, %end_date, "querying search analytics");

    let rows = client.query_search_analytics(&args.site, &query).await?;
    if rows.is_empty() {
        // Empty success, not a failure: nothing matched the range.
        println!(
            "no rows for {} between {start_date} and {end_date}",
            args.site
        );
        return Ok(());
    }

    let derived = score_keywords(normalize_rows(rows));
    let thresholds = FilterThresholds {
        min_impressions: args.min_impressions,
        max_ctr: args.max_ctr,
        min_zero_click_score: args.min_zero_click_score,
    };
    let filtered = filter_keywords(&derived, &thresholds);
    let charts = shape_charts(&derived, &filtered);

    if args.tsv {
        print!("{}", render::tsv(&filtered, args.limit));
    } else {
        print!("{}", render::summary(&derived, &filtered, &charts, args.limit));
    }
    Ok(())
}
