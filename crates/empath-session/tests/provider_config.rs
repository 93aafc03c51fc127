use empath_session::ProviderConfig;

#[test]
fn config_parses_from_toml() {
    let toml_str = r#"
        url = "wss://api.example.com/v0/chat"
        api_key = "key"
        secret_key = "secret"
        config_id = "prod-voice"
    "#;

    let config: ProviderConfig = toml::from_str(toml_str).expect("parse TOML");
    assert_eq!(config.url, "wss://api.example.com/v0/chat");
    assert_eq!(config.api_key, "key");
    assert_eq!(config.secret_key, "secret");
    assert_eq!(config.config_id.as_deref(), Some("prod-voice"));
    assert_eq!(config.chat_ttl_seconds, 3600);
}

#[test]
fn missing_ttl_uses_default() {
    let toml_str = r#"
        url = "wss://api.example.com/v0/chat"
        api_key = "key"
        secret_key = "secret"
    "#;

    let config: ProviderConfig = toml::from_str(toml_str).expect("parse TOML");
    assert_eq!(config.chat_ttl_seconds, 3600);
    assert!(config.config_id.is_none());
}

#[test]
fn explicit_ttl_overrides_default() {
    let toml_str = r#"
        url = "wss://api.example.com/v0/chat"
        api_key = "key"
        secret_key = "secret"
        chat_ttl_seconds = 120
    "#;

    let config: ProviderConfig = toml::from_str(toml_str).expect("parse TOML");
    assert_eq!(config.chat_ttl_seconds, 120);
}

#[test]
fn secret_key_is_never_serialized() {
    let config = ProviderConfig::new("wss://api.example.com/v0/chat", "key", "secret");
    let json = serde_json::to_value(&config).expect("serialize");

    assert_eq!(json["api_key"], "key");
    assert!(json.get("secret_key").is_none());
}

#[test]
fn debug_output_redacts_the_secret() {
    let config = ProviderConfig::new("wss://api.example.com/v0/chat", "key", "hunter2");
    let debug = format!("{config:?}");

    assert!(debug.contains("[REDACTED]"));
    assert!(!debug.contains("hunter2"));
}
