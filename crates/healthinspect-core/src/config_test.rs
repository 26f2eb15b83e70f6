use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

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
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "HEALTHINSPECT_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.inspection_url, DEFAULT_INSPECTION_URL);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "healthinspect/0.1 (food-safety-map)");
    assert_eq!(cfg.fixture_path, Path::new("./fixtures/inspection_page.html"));
    assert_eq!(cfg.output_path, Path::new("my_map.json"));
    assert_eq!(cfg.geocoder_url, DEFAULT_GEOCODER_URL);
    assert!(cfg.geocoder_api_key.is_none());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("HEALTHINSPECT_ENV", "production");
    map.insert("HEALTHINSPECT_INSPECTION_URL", "http://localhost:9000/Results.aspx");
    map.insert("HEALTHINSPECT_REQUEST_TIMEOUT_SECS", "5");
    map.insert("HEALTHINSPECT_OUTPUT_PATH", "/tmp/map.json");
    map.insert("HEALTHINSPECT_GEOCODER_API_KEY", "secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.inspection_url, "http://localhost:9000/Results.aspx");
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_eq!(cfg.output_path, Path::new("/tmp/map.json"));
    assert_eq!(cfg.geocoder_api_key.as_deref(), Some("secret-key"));
}

#[test]
fn build_app_config_treats_empty_api_key_as_absent() {
    let mut map = HashMap::new();
    map.insert("HEALTHINSPECT_GEOCODER_API_KEY", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.geocoder_api_key.is_none());
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("HEALTHINSPECT_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HEALTHINSPECT_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(HEALTHINSPECT_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("HEALTHINSPECT_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HEALTHINSPECT_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(HEALTHINSPECT_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("HEALTHINSPECT_GEOCODER_API_KEY", "secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret-key"), "api key leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
