use thiserror::Error;

/// Errors returned by the Search Console API client.
#[derive(Debug, Error)]
pub enum GscError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-2xx status with a Google error envelope
    /// (`{"error": {"code": ..., "message": ...}}`). Covers auth and quota
    /// failures.
    #[error("Search Console API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
