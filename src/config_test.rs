use super::*;

#[test]
fn from_json_none_uses_defaults() {
    let cfg = SiteConfig::from_json(None).unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.contact_endpoint, "contact_submit.php");
    assert_eq!(cfg.submit_timeout_ms, 15_000);
    assert_eq!(cfg.mobile_breakpoint_px, 900);
    assert_eq!(cfg.typing.phrases.len(), 4);
    assert_eq!(cfg.typing.phrases[0], "I build responsive websites.");
}

#[test]
fn from_json_blank_uses_defaults() {
    let cfg = SiteConfig::from_json(Some("  \n ")).unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn from_json_partial_override_keeps_other_defaults() {
    let cfg = SiteConfig::from_json(Some(r#"{ "contactEndpoint": "/api/contact", "typing": { "holdDelayMs": 1200 } }"#))
        .unwrap();
    assert_eq!(cfg.contact_endpoint, "/api/contact");
    assert_eq!(cfg.submit_timeout_ms, DEFAULT_SUBMIT_TIMEOUT_MS);
    assert_eq!(cfg.typing.hold_delay_ms, 1200);
    assert_eq!(cfg.typing.type_delay_ms, DEFAULT_TYPE_DELAY_MS);
    assert_eq!(cfg.typing.phrases.len(), DEFAULT_PHRASES.len());
}

#[test]
fn from_json_ignores_unknown_keys() {
    let cfg = SiteConfig::from_json(Some(r#"{ "theme": "dark", "mobileBreakpointPx": 720 }"#)).unwrap();
    assert_eq!(cfg.mobile_breakpoint_px, 720);
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = SiteConfig::from_json(Some("{ contactEndpoint: ")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("config parse failed:"));
}

#[test]
fn from_json_rejects_empty_endpoint() {
    let err = SiteConfig::from_json(Some(r#"{ "contactEndpoint": "  " }"#)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn from_json_rejects_zero_timeout() {
    let err = SiteConfig::from_json(Some(r#"{ "submitTimeoutMs": 0 }"#)).unwrap_err();
    assert_eq!(err.to_string(), "invalid config: submitTimeoutMs must be positive");
}

#[test]
fn from_json_rejects_empty_phrases() {
    let err = SiteConfig::from_json(Some(r#"{ "typing": { "phrases": [] } }"#)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid("typing.phrases must not be empty")));
}
