use std::{collections::HashMap, net::SocketAddr, time::Duration};

use playlist_validator::{
    config::{Config, DEFAULT_API_URL, DEFAULT_PORT, DEFAULT_TOKEN_URL},
    error::ConfigError,
};

// Helper function to build a config from key/value pairs
fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

const CREDENTIALS: [(&str, &str); 2] = [
    ("SPOTIFY_CLIENT_ID", "id"),
    ("SPOTIFY_CLIENT_SECRET", "secret"),
];

#[test]
fn test_defaults() {
    let config = config_from(&CREDENTIALS).unwrap();

    assert_eq!(config.credentials.client_id, "id");
    assert_eq!(config.credentials.client_secret, "secret");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.port, 3001);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.request_timeout, Duration::from_secs(10));
}

#[test]
fn test_overrides() {
    let mut pairs = CREDENTIALS.to_vec();
    pairs.extend([
        ("PORT", "8080"),
        ("SERVER_HOST", "127.0.0.1"),
        ("SPOTIFY_API_TOKEN_URL", "http://localhost:9000/token"),
        ("SPOTIFY_API_URL", "http://localhost:9000/v1/"),
        ("SPOTIFY_REQUEST_TIMEOUT_SECS", "3"),
    ]);
    let config = config_from(&pairs).unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.token_url, "http://localhost:9000/token");
    // Trailing slash is dropped so paths can be appended
    assert_eq!(config.api_url, "http://localhost:9000/v1");
    assert_eq!(config.request_timeout, Duration::from_secs(3));
    assert_eq!(
        config.server_addr().unwrap(),
        "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
    );
}

#[test]
fn test_missing_credentials() {
    let err = config_from(&[("SPOTIFY_CLIENT_SECRET", "secret")]).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("SPOTIFY_CLIENT_ID")));

    let err = config_from(&[("SPOTIFY_CLIENT_ID", "id")]).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("SPOTIFY_CLIENT_SECRET")));
}

#[test]
fn test_empty_values_count_as_missing() {
    let err = config_from(&[("SPOTIFY_CLIENT_ID", "  "), ("SPOTIFY_CLIENT_SECRET", "s")])
        .unwrap_err();
    assert!(matches!(err, ConfigError::Missing("SPOTIFY_CLIENT_ID")));

    let mut pairs = CREDENTIALS.to_vec();
    pairs.push(("PORT", ""));
    assert_eq!(config_from(&pairs).unwrap().port, DEFAULT_PORT);
}

#[test]
fn test_invalid_numbers() {
    let mut pairs = CREDENTIALS.to_vec();
    pairs.push(("PORT", "not-a-port"));
    let err = config_from(&pairs).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));

    let mut pairs = CREDENTIALS.to_vec();
    pairs.push(("PORT", "70000"));
    assert!(config_from(&pairs).is_err());

    let mut pairs = CREDENTIALS.to_vec();
    pairs.push(("SPOTIFY_REQUEST_TIMEOUT_SECS", "0"));
    let err = config_from(&pairs).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            var: "SPOTIFY_REQUEST_TIMEOUT_SECS",
            ..
        }
    ));
}

#[test]
fn test_invalid_host() {
    let mut pairs = CREDENTIALS.to_vec();
    pairs.push(("SERVER_HOST", "not an ip"));
    let config = config_from(&pairs).unwrap();
    assert!(matches!(
        config.server_addr(),
        Err(ConfigError::Invalid {
            var: "SERVER_HOST",
            ..
        })
    ));
}

#[test]
fn test_debug_redacts_secret() {
    let config = config_from(&CREDENTIALS).unwrap();
    let debug = format!("{:?}", config);
    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("\"secret\""));
}
