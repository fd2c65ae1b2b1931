use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.api_timeout, Duration::from_secs(DEFAULT_API_TIMEOUT_SECS));
}

#[test]
fn overrides_are_parsed() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("API_BASE_URL", "https://blog-api.example.test"),
        ("API_TIMEOUT_SECS", "5"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_base_url, "https://blog-api.example.test");
    assert_eq!(cfg.api_timeout, Duration::from_secs(5));
}

#[test]
fn base_url_trailing_slashes_are_trimmed() {
    let cfg = config_from(&[("API_BASE_URL", "http://localhost:5000//")]).unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:5000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", "  "), ("API_BASE_URL", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn base_url_without_http_scheme_is_rejected() {
    let err = config_from(&[("API_BASE_URL", "ftp://files.example.test")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidApiBaseUrl("ftp://files.example.test".to_owned()));
}

#[test]
fn malformed_port_is_rejected() {
    assert_eq!(config_from(&[("PORT", "70000")]).unwrap_err(), ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn zero_or_malformed_timeout_is_rejected() {
    assert!(matches!(config_from(&[("API_TIMEOUT_SECS", "0")]), Err(ConfigError::InvalidTimeout(_))));
    assert!(matches!(config_from(&[("API_TIMEOUT_SECS", "soon")]), Err(ConfigError::InvalidTimeout(_))));
}
