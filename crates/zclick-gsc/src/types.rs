//! Search Console API wire types.
//!
//! Request and response shapes for the `searchAnalytics/query` and `sites`
//! endpoints. Response types use `#[serde(default)]` for keys the API omits
//! entirely when there is no data — a body without `rows` is a legitimate
//! empty result, not a malformed one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum rows the API returns per query. Result sets larger than this are
/// silently truncated upstream; the client does not paginate.
pub const MAX_ROW_LIMIT: u32 = 25_000;

/// A grouping key for search-analytics rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Query,
    Page,
    Country,
    Device,
    Date,
    SearchAppearance,
}

impl std::str::FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "query" => Ok(Dimension::Query),
            "page" => Ok(Dimension::Page),
            "country" => Ok(Dimension::Country),
            "device" => Ok(Dimension::Device),
            "date" => Ok(Dimension::Date),
            "searchappearance" | "search-appearance" => Ok(Dimension::SearchAppearance),
            other => Err(format!("unknown dimension: {other}")),
        }
    }
}

/// Request body for `searchAnalytics/query`.
///
/// Dates are inclusive calendar dates; the API expects `start_date` before
/// `end_date` and returns an empty row set for inverted ranges. Serializes
/// straight to the wire format (camelCase keys, `YYYY-MM-DD` dates).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Non-empty, ordered; row `keys` come back in this order.
    pub dimensions: Vec<Dimension>,
    pub row_limit: u32,
}

impl SearchAnalyticsQuery {
    /// Builds a query with the maximum row limit.
    #[must_use]
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, dimensions: Vec<Dimension>) -> Self {
        Self {
            start_date,
            end_date,
            dimensions,
            row_limit: MAX_ROW_LIMIT,
        }
    }
}

// ---------------------------------------------------------------------------
// searchAnalytics/query
// ---------------------------------------------------------------------------

/// Top-level `searchAnalytics/query` response. The `rows` key is absent when
/// there is no data for the requested range.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub rows: Vec<ApiRow>,
}

/// One raw search-analytics row.
///
/// `ctr` is a fraction in `[0, 1]` on the wire; normalization rescales it to
/// a percentage. `keys` has one value per requested dimension, in request
/// order.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRow {
    #[serde(default)]
    pub keys: Vec<String>,
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    pub position: f64,
}

// ---------------------------------------------------------------------------
// sites
// ---------------------------------------------------------------------------

/// Top-level `sites` listing response. `siteEntry` is absent for accounts
/// with no verified properties.
#[derive(Debug, Deserialize)]
pub struct SitesResponse {
    #[serde(default, rename = "siteEntry")]
    pub site_entry: Vec<SiteEntry>,
}

/// One verified Search Console property.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteEntry {
    #[serde(rename = "siteUrl")]
    pub site_url: String,
    #[serde(default, rename = "permissionLevel")]
    pub permission_level: String,
}
