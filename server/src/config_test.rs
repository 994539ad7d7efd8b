use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn empty_environment_uses_defaults() {
    assert_eq!(config_from(&[]).unwrap(), ServerConfig::default());
}

#[test]
fn password_is_trimmed() {
    let config = config_from(&[("APP_PASSWORD", "  hunter2 \n")]).unwrap();
    assert_eq!(config.app_password.as_deref(), Some("hunter2"));
}

#[test]
fn blank_password_is_unset() {
    let config = config_from(&[("APP_PASSWORD", "   ")]).unwrap();
    assert_eq!(config.app_password, None);
}

#[test]
fn numeric_values_are_parsed() {
    let config = config_from(&[
        ("PORT", "8080"),
        ("AUTH_MAX_FAILURES", "3"),
        ("AUTH_FAILURE_WINDOW_SECS", "60"),
        ("SESSION_TTL_SECS", "86400"),
    ])
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.max_failures, 3);
    assert_eq!(config.failure_window, Duration::from_secs(60));
    assert_eq!(config.session_ttl, Duration::from_secs(86_400));
}

#[test]
fn invalid_port_is_an_error() {
    assert_eq!(
        config_from(&[("PORT", "http")]),
        Err(ConfigError::Invalid { key: "PORT", value: "http".to_owned() })
    );
}

#[test]
fn cookie_secure_accepts_bool_words() {
    for (raw, expected) in [("1", true), ("TRUE", true), (" yes ", true), ("off", false), ("0", false)] {
        let config = config_from(&[("COOKIE_SECURE", raw)]).unwrap();
        assert_eq!(config.cookie_secure, expected, "{raw:?}");
    }
}

#[test]
fn cookie_secure_rejects_garbage() {
    assert!(matches!(
        config_from(&[("COOKIE_SECURE", "maybe")]),
        Err(ConfigError::Invalid { key: "COOKIE_SECURE", .. })
    ));
}

#[test]
fn proxy_headers_are_untrusted_by_default() {
    assert!(!config_from(&[]).unwrap().trust_proxy_headers);
    assert!(config_from(&[("TRUST_PROXY_HEADERS", "true")]).unwrap().trust_proxy_headers);
    assert!(matches!(
        config_from(&[("TRUST_PROXY_HEADERS", "sometimes")]),
        Err(ConfigError::Invalid { key: "TRUST_PROXY_HEADERS", .. })
    ));
}

#[test]
fn parse_bool_unknown_is_none() {
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("enabled"), None);
}
