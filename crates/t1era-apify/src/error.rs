use thiserror::Error;

/// Errors returned by the Apify API client.
#[derive(Debug, Error)]
pub enum ApifyError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid Apify base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The start-run call was rejected, so no run exists to wait on.
    #[error("Apify run failed to start")]
    RunNotStarted { status: u16, message: String },

    /// Any other non-2xx response from the API.
    #[error("Apify API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The run reached a terminal status other than `SUCCEEDED`.
    #[error("Apify run {run_id} finished with status {status}")]
    RunFailed { run_id: String, status: String },

    /// The run succeeded but its dataset holds no items.
    #[error("No data found")]
    EmptyDataset { dataset_id: String },

    #[error("Apify run did not complete within {secs}s")]
    Timeout { secs: u64 },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
