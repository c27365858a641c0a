mod trends;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use t1era_apify::{ApifyClient, ApifyError};
use t1era_core::{AppConfig, SERVICE_NAME};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    /// `None` when no Apify token is configured.
    pub apify: Option<ApifyClient>,
}

impl AppState {
    /// Builds the shared Apify client once, if a token is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ApifyError`] if the HTTP client cannot be built or the
    /// configured base URL is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApifyError> {
        let apify = config
            .apify_token
            .as_deref()
            .map(|token| {
                ApifyClient::with_base_url(
                    token,
                    &config.apify_actor_id,
                    config.apify_run_timeout_secs,
                    &config.apify_base_url,
                )
            })
            .transpose()?;
        Ok(Self { apify })
    }
}

/// Error response body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    service: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/analyze-trends", post(trends::analyze_trends))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthData {
            status: "active",
            service: SERVICE_NAME,
        }),
    )
}
