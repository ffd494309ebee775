//! Tests for config module

use musegraph::config::{Config, DEFAULT_CHICAGO_URL};
use serial_test::serial;
use std::io::Write;

const ENV_VARS: &[&str] = &[
    "MUSEGRAPH_WIKIDATA_ENDPOINT",
    "MUSEGRAPH_CHICAGO_URL",
    "MUSEGRAPH_CLEVELAND_URL",
    "MUSEGRAPH_REQUEST_TIMEOUT",
    "MUSEGRAPH_MAX_RETRIES",
    "MUSEGRAPH_RETRY_DELAY_MS",
    "MUSEGRAPH_RATE_LIMIT",
    "MUSEGRAPH_USER_AGENT",
    "MUSEGRAPH_LOG_LEVEL",
    "MUSEGRAPH_LOG_FORMAT",
];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

#[test]
fn test_config_file_exists() {
    let config_path = std::path::Path::new("config.toml");
    assert!(
        config_path.exists(),
        "config.toml should exist in project root"
    );
}

#[test]
fn test_repository_config_loads() {
    let config = Config::from_file(std::path::Path::new("config.toml"))
        .expect("config.toml should be valid");
    assert_eq!(config.enrichment.max_retries, 1);
    assert_eq!(config.enrichment.chicago_url, DEFAULT_CHICAGO_URL);
}

#[test]
fn test_from_file_partial() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[enrichment]
wikidata_endpoint = "http://localhost:8080/sparql"
request_timeout_secs = 5

[logging]
format = "json"
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.enrichment.wikidata_endpoint, "http://localhost:8080/sparql");
    assert_eq!(config.enrichment.request_timeout_secs, 5);
    assert_eq!(config.enrichment.requests_per_second, 5);
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_from_file_rejects_retry_budget() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[enrichment]\nmax_retries = 3").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("max_retries"));
}

#[test]
fn test_from_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(&dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = Config::from_env().unwrap();
    assert_eq!(config.enrichment.max_retries, 1);
    assert_eq!(config.enrichment.request_timeout_secs, 30);
    assert_eq!(config.logging.level, "info");
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    std::env::set_var("MUSEGRAPH_CHICAGO_URL", "http://localhost:9000/search");
    std::env::set_var("MUSEGRAPH_MAX_RETRIES", "0");
    std::env::set_var("MUSEGRAPH_RATE_LIMIT", "not-a-number");

    let config = Config::from_env().unwrap();
    assert_eq!(config.enrichment.chicago_url, "http://localhost:9000/search");
    assert_eq!(config.enrichment.max_retries, 0);
    assert_eq!(config.enrichment.requests_per_second, 5);
    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_zero_timeout() {
    clear_env();
    std::env::set_var("MUSEGRAPH_REQUEST_TIMEOUT", "0");
    assert!(Config::from_env().is_err());
    clear_env();
}
