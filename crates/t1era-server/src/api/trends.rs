use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use t1era_apify::{ApifyError, DEFAULT_KEYWORDS};
use t1era_trends::{analyze, RawPost, TrendReport};
use thiserror::Error;

use crate::middleware::RequestId;

use super::{AppState, ErrorBody};

#[derive(Debug, Default, Deserialize)]
pub(super) struct AnalyzeRequest {
    #[serde(default)]
    pub keywords: Option<String>,
}

impl AnalyzeRequest {
    /// Parses the raw request body. An empty body is the same as `{}`.
    fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }

    fn keywords(&self) -> &str {
        self.keywords.as_deref().unwrap_or(DEFAULT_KEYWORDS)
    }
}

/// Failure outcomes of a trend analysis request.
#[derive(Debug, Error)]
pub(super) enum AnalyzeError {
    #[error("Server misconfiguration")]
    Misconfigured,

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Upstream(#[from] ApifyError),
}

impl AnalyzeError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(ApifyError::EmptyDataset { .. }) => StatusCode::NOT_FOUND,
            Self::Misconfigured | Self::InvalidBody(_) | Self::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "error processing trend analysis");
        } else {
            tracing::info!(error = %self, "trend analysis returned no result");
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// `POST /api/analyze-trends`: run the scraper for the requested keywords
/// and summarise the posts it returns.
pub(super) async fn analyze_trends(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Json<TrendReport>, AnalyzeError> {
    // Checked before the body so a misconfigured server never calls out.
    let Some(apify) = state.apify.as_ref() else {
        tracing::error!(request_id = %req_id.0, "APIFY_TOKEN is missing");
        return Err(AnalyzeError::Misconfigured);
    };

    let request = AnalyzeRequest::from_body(&body)?;
    let keywords = request.keywords();
    tracing::info!(request_id = %req_id.0, keywords, "received analysis request");

    let posts: Vec<RawPost> = apify.search_posts(keywords).await?;
    let report = analyze(&posts);
    tracing::info!(
        request_id = %req_id.0,
        total_posts = report.niche_stats.total_posts,
        total_views = %report.total_niche_views,
        "analysis complete"
    );

    Ok(Json(report))
}
