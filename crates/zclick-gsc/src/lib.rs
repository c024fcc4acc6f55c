//! Typed client for the Google Search Console Search Analytics API.
//!
//! Fetches keyword performance rows (`searchAnalytics/query`) and the list of
//! verified properties (`sites`), and normalizes raw rows into
//! [`zclick_core::KeywordRecord`]s. Authentication is out of scope: callers
//! hand in an already-valid OAuth access token.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::GscClient;
pub use error::GscError;
pub use normalize::normalize_rows;
pub use types::{ApiRow, Dimension, SearchAnalyticsQuery, SiteEntry, MAX_ROW_LIMIT};
