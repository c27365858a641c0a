use std::net::SocketAddr;

/// Human-readable service name reported by the liveness check.
pub const SERVICE_NAME: &str = "T1ERA Trend Intelligence";

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_APIFY_BASE_URL: &str = "https://api.apify.com/v2";
pub const DEFAULT_ACTOR_ID: &str = "clockworks/tiktok-scraper";

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// `None` when `APIFY_TOKEN` is unset or empty. The server still starts;
    /// analysis requests fail with a misconfiguration error.
    pub apify_token: Option<String>,
    pub apify_base_url: String,
    pub apify_actor_id: String,
    pub apify_run_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "apify_token",
                &self.apify_token.as_ref().map(|_| "[redacted]"),
            )
            .field("apify_base_url", &self.apify_base_url)
            .field("apify_actor_id", &self.apify_actor_id)
            .field("apify_run_timeout_secs", &self.apify_run_timeout_secs)
            .finish()
    }
}
