//! Apify API request and response types.
//!
//! The API wraps single-object responses in a `{"data": {...}}` envelope;
//! [`ApiResponse`] captures that pattern. Dataset items come back as a bare
//! JSON array and are left to the caller to interpret.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of posts requested from the scraper per search.
pub const RESULTS_PER_PAGE: u32 = 15;

/// Search term used when the client does not supply one.
pub const DEFAULT_KEYWORDS: &str = "trending";

const SEARCH_SECTION_TOP: &str = "top";

/// Actor input for the TikTok search scraper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TiktokSearchInput {
    pub search: String,
    pub results_per_page: u32,
    pub exclude_pinned_posts: bool,
    pub search_section: String,
}

impl TiktokSearchInput {
    /// Builds the fixed search configuration for `keywords`.
    #[must_use]
    pub fn for_keywords(keywords: &str) -> Self {
        Self {
            search: keywords.to_owned(),
            results_per_page: RESULTS_PER_PAGE,
            exclude_pinned_posts: true,
            search_section: SEARCH_SECTION_TOP.to_owned(),
        }
    }
}

/// Top-level envelope for object responses.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Actor run metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunData {
    pub id: String,
    /// One of `READY`, `RUNNING`, `SUCCEEDED`, `FAILED`, `TIMING-OUT`,
    /// `TIMED-OUT`, `ABORTING`, `ABORTED`.
    pub status: String,
    pub default_dataset_id: String,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunData {
    #[must_use]
    pub fn is_succeeded(&self) -> bool {
        self.status == "SUCCEEDED"
    }

    /// `true` once the run can no longer change status.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status.as_str(),
            "SUCCEEDED" | "FAILED" | "TIMED-OUT" | "ABORTED"
        )
    }

    /// Wall-clock duration of the run, when both timestamps are known.
    #[must_use]
    pub fn duration_ms(&self) -> Option<i64> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some((end - start).num_milliseconds()),
            _ => None,
        }
    }
}
