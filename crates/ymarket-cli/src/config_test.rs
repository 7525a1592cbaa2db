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

/// Returns a map with all required env vars populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("YMARKET_OAUTH_TOKEN", "AQAAAAAtest");
    m.insert("YMARKET_OAUTH_CLIENT_ID", "client-42");
    m
}

#[test]
fn build_settings_fails_without_token() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_settings(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "YMARKET_OAUTH_TOKEN"),
        "expected MissingEnvVar(YMARKET_OAUTH_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_settings_fails_without_client_id() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("YMARKET_OAUTH_TOKEN", "AQAAAAAtest");
    let result = build_settings(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "YMARKET_OAUTH_CLIENT_ID"),
        "expected MissingEnvVar(YMARKET_OAUTH_CLIENT_ID), got: {result:?}"
    );
}

#[test]
fn build_settings_applies_defaults() {
    let map = full_env();
    let settings = build_settings(lookup_from_map(&map)).unwrap();
    assert_eq!(settings.oauth_client_id, "client-42");
    assert_eq!(settings.campaign_id, None);
    assert_eq!(settings.api_endpoint, None);
    assert_eq!(settings.user_agent, None);
    assert_eq!(settings.timeout_secs, 20);
    assert_eq!(settings.log_level, "info");
}

#[test]
fn build_settings_reads_overrides() {
    let mut map = full_env();
    map.insert("YMARKET_CAMPAIGN_ID", "21000001");
    map.insert("YMARKET_API_ENDPOINT", "http://127.0.0.1:9000/");
    map.insert("YMARKET_USER_AGENT", "shop-sync/3.1");
    map.insert("YMARKET_TIMEOUT_SECS", "45");
    map.insert("YMARKET_LOG_LEVEL", "ymarket=debug");
    let settings = build_settings(lookup_from_map(&map)).unwrap();
    assert_eq!(settings.campaign_id, Some(21_000_001));
    assert_eq!(
        settings.api_endpoint.as_deref(),
        Some("http://127.0.0.1:9000/")
    );
    assert_eq!(settings.user_agent.as_deref(), Some("shop-sync/3.1"));
    assert_eq!(settings.timeout_secs, 45);
    assert_eq!(settings.log_level, "ymarket=debug");
}

#[test]
fn build_settings_rejects_non_numeric_campaign() {
    let mut map = full_env();
    map.insert("YMARKET_CAMPAIGN_ID", "my-shop");
    let result = build_settings(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YMARKET_CAMPAIGN_ID"),
        "expected InvalidEnvVar(YMARKET_CAMPAIGN_ID), got: {result:?}"
    );
}

#[test]
fn build_settings_rejects_invalid_timeout() {
    for raw in ["soon", "0"] {
        let mut map = full_env();
        map.insert("YMARKET_TIMEOUT_SECS", raw);
        let result = build_settings(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YMARKET_TIMEOUT_SECS"),
            "expected InvalidEnvVar(YMARKET_TIMEOUT_SECS) for {raw:?}, got: {result:?}"
        );
    }
}

#[test]
fn debug_redacts_token() {
    let map = full_env();
    let settings = build_settings(lookup_from_map(&map)).unwrap();
    let debug = format!("{settings:?}");
    assert!(!debug.contains("AQAAAAAtest"), "{debug}");
    assert!(debug.contains("[redacted]"));
}

#[test]
fn campaign_argument_overrides_environment() {
    let mut map = full_env();
    map.insert("YMARKET_CAMPAIGN_ID", "1");
    let settings = build_settings(lookup_from_map(&map)).unwrap();
    assert_eq!(settings.campaign(Some(2)).unwrap(), 2);
    assert_eq!(settings.campaign(None).unwrap(), 1);
}

#[test]
fn campaign_is_required_somewhere() {
    let map = full_env();
    let settings = build_settings(lookup_from_map(&map)).unwrap();
    assert!(matches!(
        settings.campaign(None),
        Err(ConfigError::MissingEnvVar(ref v)) if v == "YMARKET_CAMPAIGN_ID"
    ));
}

#[test]
fn settings_build_a_client() {
    let mut map = full_env();
    map.insert("YMARKET_API_ENDPOINT", "http://127.0.0.1:9000/");
    let settings = build_settings(lookup_from_map(&map)).unwrap();
    let client = settings.client().expect("client should build");
    assert_eq!(client.config().api_endpoint(), "http://127.0.0.1:9000/");
    assert_eq!(client.config().oauth_client_id(), "client-42");
}
