use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:5000");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.apify_token.is_none());
    assert_eq!(cfg.apify_base_url, "https://api.apify.com/v2");
    assert_eq!(cfg.apify_actor_id, "clockworks/tiktok-scraper");
    assert_eq!(cfg.apify_run_timeout_secs, 300);
}

#[test]
fn build_app_config_reads_port() {
    let mut map = HashMap::new();
    map.insert("PORT", "8080");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
}

#[test]
fn build_app_config_rejects_invalid_port() {
    let mut map = HashMap::new();
    map.insert("PORT", "not-a-port");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PORT"),
        "expected InvalidEnvVar(PORT), got: {result:?}"
    );
}

#[test]
fn build_app_config_reads_token() {
    let mut map = HashMap::new();
    map.insert("APIFY_TOKEN", "apify_api_abc");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.apify_token.as_deref(), Some("apify_api_abc"));
}

#[test]
fn build_app_config_treats_blank_token_as_missing() {
    let mut map = HashMap::new();
    map.insert("APIFY_TOKEN", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.apify_token.is_none());
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("APIFY_RUN_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "APIFY_RUN_TIMEOUT_SECS"),
        "expected InvalidEnvVar(APIFY_RUN_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = HashMap::new();
    map.insert("APIFY_RUN_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn build_app_config_overrides_actor_and_base_url() {
    let mut map = HashMap::new();
    map.insert("APIFY_ACTOR_ID", "someone/other-scraper");
    map.insert("APIFY_BASE_URL", "http://127.0.0.1:9000/v2");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.apify_actor_id, "someone/other-scraper");
    assert_eq!(cfg.apify_base_url, "http://127.0.0.1:9000/v2");
}

#[test]
fn debug_output_redacts_token() {
    let mut map = HashMap::new();
    map.insert("APIFY_TOKEN", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[redacted]"));
}
