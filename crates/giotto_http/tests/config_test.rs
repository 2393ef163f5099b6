use giotto_http::{GiottoConfig, RestConfig};
use std::time::Duration;

#[test]
fn test_default_rest_config() {
    let config = RestConfig::default();
    assert_eq!(config.base_url, "https://discord.com/api/v10");
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.max_rate_limit(), Duration::from_secs(300));
    assert_eq!(config.max_retries, 3);
    assert_eq!(config.retry_backoff_ms, 500);
}

#[test]
fn test_default_gateway_config() {
    let config = GiottoConfig::default();
    assert_eq!(config.gateway.large_threshold, 250);
    assert_eq!(config.gateway.restart_window_secs, 30);
}

#[test]
fn test_from_file_reads_overrides_and_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("giotto.toml");
    std::fs::write(
        &path,
        r#"
[rest]
base_url = "http://localhost:8080/api/v10"
timeout_secs = 5

[gateway]
large_threshold = 50
"#,
    )
    .unwrap();

    let config = GiottoConfig::from_file(&path).unwrap();
    assert_eq!(config.rest.base_url, "http://localhost:8080/api/v10");
    assert_eq!(config.rest.timeout_secs, 5);
    // Unset fields fall back to their defaults.
    assert_eq!(config.rest.max_retries, 3);
    assert_eq!(config.gateway.large_threshold, 50);
    assert_eq!(config.gateway.restart_window_secs, 30);
}

#[test]
fn test_from_file_rejects_missing_file() {
    let result = GiottoConfig::from_file("/nonexistent/giotto.toml");
    assert!(result.is_err());
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = GiottoConfig::default();
    let rendered = toml::to_string(&config).unwrap();
    let parsed: GiottoConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, config);
}
