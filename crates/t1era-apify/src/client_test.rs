use super::*;

fn test_client(base_url: &str) -> ApifyClient {
    ApifyClient::with_base_url("test-token", "clockworks/tiktok-scraper", 30, base_url)
        .expect("client construction should not fail")
}

#[test]
fn actor_path_segment_replaces_owner_separator() {
    assert_eq!(
        actor_path_segment("clockworks/tiktok-scraper"),
        "clockworks~tiktok-scraper"
    );
}

#[test]
fn actor_path_segment_keeps_tilde_form() {
    assert_eq!(
        actor_path_segment("clockworks~tiktok-scraper"),
        "clockworks~tiktok-scraper"
    );
}

#[test]
fn endpoint_appends_segments_to_base_path() {
    let client = test_client("https://api.apify.com/v2");
    let url = client.endpoint(&["acts", "clockworks~tiktok-scraper", "runs"]);
    assert_eq!(
        url.as_str(),
        "https://api.apify.com/v2/acts/clockworks~tiktok-scraper/runs"
    );
}

#[test]
fn endpoint_strips_trailing_slash() {
    let client = test_client("https://api.apify.com/v2/");
    let url = client.endpoint(&["actor-runs", "abc"]);
    assert_eq!(url.as_str(), "https://api.apify.com/v2/actor-runs/abc");
}

#[test]
fn endpoint_encodes_segment_characters() {
    let client = test_client("https://api.apify.com/v2");
    let url = client.endpoint(&["datasets", "a b/c", "items"]);
    assert_eq!(
        url.as_str(),
        "https://api.apify.com/v2/datasets/a%20b%2Fc/items"
    );
}

#[test]
fn with_base_url_rejects_garbage() {
    let result = ApifyClient::with_base_url("t", "a/b", 30, "not a url");
    assert!(
        matches!(result, Err(ApifyError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl, got: {result:?}"
    );
}

#[test]
fn with_base_url_rejects_non_hierarchical_url() {
    let result = ApifyClient::with_base_url("t", "a/b", 30, "mailto:ops@example.com");
    assert!(matches!(result, Err(ApifyError::InvalidBaseUrl { .. })));
}
