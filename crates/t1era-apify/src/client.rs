//! HTTP client for the Apify REST API (v2).
//!
//! Covers the three calls one search needs: start an actor run, long-poll it
//! to a terminal status, and read the run's default dataset. The whole
//! sequence is bounded by a single run timeout.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApifyError;
use crate::types::{ApiResponse, RunData, TiktokSearchInput};

/// Seconds the API may hold a `waitForFinish` poll open (API maximum is 60).
const WAIT_FOR_FINISH_SECS: u64 = 60;

/// Per-request ceiling. Must exceed the long-poll window.
const REQUEST_TIMEOUT_SECS: u64 = WAIT_FOR_FINISH_SECS + 30;

/// Client for the Apify REST API, bound to one actor.
///
/// The API root is always passed in, so the same constructor serves the
/// production API and a mock server in tests.
#[derive(Debug, Clone)]
pub struct ApifyClient {
    client: Client,
    token: String,
    actor_id: String,
    base_url: Url,
    run_timeout: Duration,
}

impl ApifyClient {
    /// Creates a client rooted at `base_url` (e.g. `https://api.apify.com/v2`).
    ///
    /// # Errors
    ///
    /// Returns [`ApifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApifyError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute hierarchical URL.
    pub fn with_base_url(
        token: &str,
        actor_id: &str,
        run_timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ApifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("t1era/0.1 (trend-intelligence)")
            .build()?;

        let parsed = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            ApifyError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            }
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApifyError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "URL cannot carry a path".to_owned(),
            });
        }

        Ok(Self {
            client,
            token: token.to_owned(),
            actor_id: actor_id.to_owned(),
            base_url: parsed,
            run_timeout: Duration::from_secs(run_timeout_secs),
        })
    }

    /// Runs the TikTok search actor for `keywords` and returns its dataset.
    ///
    /// Start, wait, and fetch all count against the run timeout.
    ///
    /// # Errors
    ///
    /// - [`ApifyError::RunNotStarted`] if the start call is rejected or
    ///   returns no run.
    /// - [`ApifyError::RunFailed`] if the run ends in a non-success status.
    /// - [`ApifyError::EmptyDataset`] if the run produced no items.
    /// - [`ApifyError::Timeout`] if the sequence exceeds the run timeout.
    /// - [`ApifyError::Http`] / [`ApifyError::Api`] /
    ///   [`ApifyError::Deserialize`] on transport or protocol failures.
    pub async fn search_posts<T: DeserializeOwned>(
        &self,
        keywords: &str,
    ) -> Result<Vec<T>, ApifyError> {
        let input = TiktokSearchInput::for_keywords(keywords);
        tokio::time::timeout(self.run_timeout, self.run_to_completion(&input))
            .await
            .map_err(|_| ApifyError::Timeout {
                secs: self.run_timeout.as_secs(),
            })?
    }

    async fn run_to_completion<T: DeserializeOwned>(
        &self,
        input: &TiktokSearchInput,
    ) -> Result<Vec<T>, ApifyError> {
        let started = self.start_run(input).await?;
        tracing::info!(
            run_id = %started.id,
            actor = %self.actor_id,
            "Apify run started, waiting for completion"
        );

        let run = if started.is_terminal() {
            started
        } else {
            self.wait_for_run(&started.id).await?
        };

        if !run.is_succeeded() {
            return Err(ApifyError::RunFailed {
                run_id: run.id,
                status: run.status,
            });
        }
        tracing::info!(
            run_id = %run.id,
            dataset_id = %run.default_dataset_id,
            duration_ms = run.duration_ms(),
            "Apify run succeeded, fetching dataset"
        );

        let items: Vec<T> = self.get_dataset_items(&run.default_dataset_id).await?;
        if items.is_empty() {
            return Err(ApifyError::EmptyDataset {
                dataset_id: run.default_dataset_id,
            });
        }
        tracing::info!(count = items.len(), "fetched dataset items");
        Ok(items)
    }

    /// Starts one actor run with `input`. Returns as soon as the run exists.
    ///
    /// # Errors
    ///
    /// Returns [`ApifyError::RunNotStarted`] on a non-2xx response or a 2xx
    /// body without run data.
    pub async fn start_run<I: Serialize + Sync>(&self, input: &I) -> Result<RunData, ApifyError> {
        let actor = actor_path_segment(&self.actor_id);
        let url = self.endpoint(&["acts", &actor, "runs"]);

        let response = self.authorized(self.client.post(url)).json(input).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %body, "Apify rejected run start");
            return Err(ApifyError::RunNotStarted {
                status: status.as_u16(),
                message: body,
            });
        }

        // A 2xx without run data still leaves no run to wait on.
        match serde_json::from_str::<ApiResponse<Option<RunData>>>(&body) {
            Ok(ApiResponse { data: Some(run) }) => Ok(run),
            Ok(ApiResponse { data: None }) | Err(_) => {
                tracing::warn!(
                    status = status.as_u16(),
                    body = %body,
                    "Apify start response carried no run data"
                );
                Err(ApifyError::RunNotStarted {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    /// Long-polls a run until it reaches a terminal status.
    ///
    /// # Errors
    ///
    /// Returns [`ApifyError::Api`] on a non-2xx response.
    pub async fn wait_for_run(&self, run_id: &str) -> Result<RunData, ApifyError> {
        let mut url = self.endpoint(&["actor-runs", run_id]);
        url.query_pairs_mut()
            .append_pair("waitForFinish", &WAIT_FOR_FINISH_SECS.to_string());

        loop {
            let response = self
                .authorized(self.client.get(url.clone()))
                .send()
                .await?;
            let response = Self::check_status(response).await?;
            let envelope: ApiResponse<RunData> = Self::decode(response, "get run").await?;

            if envelope.data.is_terminal() {
                return Ok(envelope.data);
            }
            tracing::debug!(run_id, status = %envelope.data.status, "run still in progress");
        }
    }

    /// Fetches every item of a dataset as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApifyError::Api`] on a non-2xx response, or
    /// [`ApifyError::Deserialize`] if the body is not an array of `T`.
    pub async fn get_dataset_items<T: DeserializeOwned>(
        &self,
        dataset_id: &str,
    ) -> Result<Vec<T>, ApifyError> {
        let mut url = self.endpoint(&["datasets", dataset_id, "items"]);
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("clean", "true");

        let response = self.authorized(self.client.get(url)).send().await?;
        let response = Self::check_status(response).await?;
        Self::decode(response, &format!("dataset {dataset_id}")).await
    }

    /// Appends path segments to the API root, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Hierarchical URLs are checked in the constructor, so this never fails.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }

    async fn check_status(response: Response) -> Result<Response, ApifyError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApifyError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(
        response: Response,
        context: &str,
    ) -> Result<T, ApifyError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApifyError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

/// Apify addresses actors as `owner~name` in URL paths; the console form
/// `owner/name` would be split into two segments.
fn actor_path_segment(actor_id: &str) -> String {
    actor_id.replacen('/', "~", 1)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
