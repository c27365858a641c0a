use crate::app_config::{AppConfig, DEFAULT_ACTOR_ID, DEFAULT_APIFY_BASE_URL, DEFAULT_PORT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::{Ipv4Addr, SocketAddr};

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let port = or_default("PORT", &DEFAULT_PORT.to_string())
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "PORT".to_string(),
            reason: e.to_string(),
        })?;
    let bind_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

    let log_level = or_default("T1ERA_LOG_LEVEL", "info");

    // An empty token is treated the same as a missing one.
    let apify_token = lookup("APIFY_TOKEN")
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let apify_base_url = or_default("APIFY_BASE_URL", DEFAULT_APIFY_BASE_URL);
    let apify_actor_id = or_default("APIFY_ACTOR_ID", DEFAULT_ACTOR_ID);
    if apify_actor_id.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "APIFY_ACTOR_ID".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let apify_run_timeout_secs = parse_u64("APIFY_RUN_TIMEOUT_SECS", "300")?;
    if apify_run_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "APIFY_RUN_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        bind_addr,
        log_level,
        apify_token,
        apify_base_url,
        apify_actor_id,
        apify_run_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
