//! HTTP client for the Search Console Search Analytics API.
//!
//! Wraps `reqwest` with bearer-token auth, typed response deserialization,
//! and Google error-envelope handling. Non-2xx responses are surfaced as
//! [`GscError::Api`] with the upstream message when the body carries one.
//!
//! Requests are issued one at a time and awaited to completion; nothing is
//! retried automatically — a failed fetch surfaces once and the caller
//! decides whether to re-invoke.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::GscError;
use crate::types::{ApiRow, QueryResponse, SearchAnalyticsQuery, SiteEntry, SitesResponse};

const DEFAULT_BASE_URL: &str = "https://searchconsole.googleapis.com/webmasters/v3/";

/// Client for the Search Console REST API.
///
/// Holds the HTTP client, OAuth access token, and base URL. Use
/// [`GscClient::new`] for production or [`GscClient::with_base_url`] to point
/// at a mock server in tests. Token acquisition and refresh are the caller's
/// concern; an expired token surfaces as [`GscError::Api`] with HTTP 401.
pub struct GscClient {
    client: Client,
    access_token: String,
    base_url: Url,
}

impl GscClient {
    /// Creates a new client pointed at the production Search Console API.
    ///
    /// # Errors
    ///
    /// Returns [`GscError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(access_token: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, GscError> {
        Self::with_base_url(access_token, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GscError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`GscError::Api`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GscError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // endpoint segments append to the API root rather than replacing the
        // last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GscError::Api {
            status: 0,
            message: format!("invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            base_url,
        })
    }

    /// Fetches keyword performance rows for a site over an inclusive date
    /// range.
    ///
    /// Calls `sites/{site}/searchAnalytics/query`. At most
    /// [`crate::MAX_ROW_LIMIT`] rows come back per call; larger result sets
    /// are silently truncated upstream and no pagination is attempted. A
    /// response without rows is a valid empty result, distinct from an error.
    ///
    /// # Errors
    ///
    /// - [`GscError::Api`] on a non-2xx response (auth, quota, bad request).
    /// - [`GscError::Http`] on network failure.
    /// - [`GscError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn query_search_analytics(
        &self,
        site_url: &str,
        query: &SearchAnalyticsQuery,
    ) -> Result<Vec<ApiRow>, GscError> {
        let url = self.endpoint_url(&["sites", site_url, "searchAnalytics", "query"]);
        let context = format!("searchAnalytics/query(site={site_url})");
        let body = self
            .execute(self.client.post(url).json(query), &context)
            .await?;

        let response: QueryResponse =
            serde_json::from_value(body).map_err(|e| GscError::Deserialize {
                context,
                source: e,
            })?;

        tracing::debug!(
            site = site_url,
            rows = response.rows.len(),
            "fetched search analytics rows"
        );
        Ok(response.rows)
    }

    /// Lists the verified properties the token has access to.
    ///
    /// # Errors
    ///
    /// - [`GscError::Api`] on a non-2xx response.
    /// - [`GscError::Http`] on network failure.
    /// - [`GscError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn list_sites(&self) -> Result<Vec<SiteEntry>, GscError> {
        let url = self.endpoint_url(&["sites"]);
        let body = self.execute(self.client.get(url), "sites").await?;

        let response: SitesResponse =
            serde_json::from_value(body).map_err(|e| GscError::Deserialize {
                context: "sites".to_string(),
                source: e,
            })?;

        Ok(response.site_entry)
    }

    /// Builds an endpoint URL by appending path segments to the base URL.
    ///
    /// Each segment is percent-encoded as a single path segment, so a full
    /// site URL like `https://example.com/` stays one segment rather than
    /// splitting the path.
    fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        url
    }

    /// Sends a request with bearer auth, checks the HTTP status, and parses
    /// the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GscError::Api`] on a non-2xx status (with the message from
    /// Google's error envelope when present), [`GscError::Http`] on network
    /// failure, and [`GscError::Deserialize`] if the body is not valid JSON.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<serde_json::Value, GscError> {
        let response = request.bearer_auth(&self.access_token).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| GscError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    /// Extracts the message from Google's `{"error": {"message": ...}}`
    /// envelope, falling back to the raw status when the body is opaque.
    fn api_error(status: StatusCode, body: &str) -> GscError {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(serde_json::Value::as_str)
                    .map(ToOwned::to_owned)
            })
            .unwrap_or_else(|| format!("HTTP {status}"));

        GscError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
