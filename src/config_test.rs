#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_scroll_matches_stock_thresholds() {
    let scroll = ScrollConfig::default();
    assert_eq!(scroll.reveal_ratio, 0.1);
    assert_eq!(scroll.activate_ratio, 0.25);
    assert_eq!(scroll.exit_ratio, 0.2);
    assert_eq!(scroll.debounce_ms, 100);
    assert_eq!(scroll.root_margin, "0px 0px -10% 0px");
    assert_eq!(scroll.thresholds, vec![0.0, 0.1, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(scroll.activation, ActivationMode::Exclusive);
}

#[test]
fn default_typing_has_five_phrases() {
    let typing = TypingConfig::default();
    assert_eq!(typing.phrases.len(), 5);
    assert_eq!(typing.phrases[0], "IoT Engineer");
    assert_eq!((typing.type_ms, typing.delete_ms, typing.hold_ms, typing.next_phrase_ms), (100, 50, 2000, 500));
}

#[test]
fn default_config_validates() {
    assert!(FolioConfig::default().validate().is_ok());
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = FolioConfig::from_json("{}").unwrap();
    assert_eq!(config, FolioConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = FolioConfig::from_json(
        r#"{ "scroll": { "debounce_ms": 250, "activation": "compatible" }, "contact": { "email_to": "me@example.com" } }"#,
    )
    .unwrap();
    assert_eq!(config.scroll.debounce_ms, 250);
    assert_eq!(config.scroll.activation, ActivationMode::Compatible);
    assert_eq!(config.scroll.reveal_ratio, 0.1);
    assert_eq!(config.contact.email_to, "me@example.com");
    assert_eq!(config.contact.footer, "Sent via Portfolio Contact Form");
    assert_eq!(config.typing, TypingConfig::default());
}

#[test]
fn malformed_json_is_parse_error() {
    let err = FolioConfig::from_json("{ scroll: }").unwrap_err();
    assert_eq!(err.code(), "E_CONFIG_PARSE");
}

#[test]
fn unknown_activation_mode_is_parse_error() {
    let err = FolioConfig::from_json(r#"{ "scroll": { "activation": "sometimes" } }"#).unwrap_err();
    assert_eq!(err.code(), "E_CONFIG_PARSE");
}

// =============================================================
// validate
// =============================================================

#[test]
fn ratio_out_of_range_is_invalid() {
    let err = FolioConfig::from_json(r#"{ "scroll": { "exit_ratio": 1.5 } }"#).unwrap_err();
    assert_eq!(err.code(), "E_CONFIG_INVALID");
    assert!(err.to_string().contains("scroll.exit_ratio"));
}

#[test]
fn activate_below_reveal_is_invalid() {
    let err = FolioConfig::from_json(r#"{ "scroll": { "reveal_ratio": 0.5, "activate_ratio": 0.3 } }"#).unwrap_err();
    assert_eq!(err.code(), "E_CONFIG_INVALID");
}

#[test]
fn zero_center_band_is_invalid() {
    let err = FolioConfig::from_json(r#"{ "scroll": { "center_band": 0.0 } }"#).unwrap_err();
    assert!(err.to_string().contains("center_band"));
}

#[test]
fn empty_or_out_of_range_thresholds_are_invalid() {
    assert!(FolioConfig::from_json(r#"{ "scroll": { "thresholds": [] } }"#).is_err());
    assert!(FolioConfig::from_json(r#"{ "scroll": { "thresholds": [0.0, 2.0] } }"#).is_err());
}

#[test]
fn inverted_hero_range_is_invalid() {
    let err = FolioConfig::from_json(r#"{ "hero": { "fade_start_px": 500, "fade_end_px": 100 } }"#).unwrap_err();
    assert!(err.to_string().contains("hero.fade_end_px"));
}

#[test]
fn nan_hero_fade_is_invalid() {
    let mut config = FolioConfig::default();
    config.hero.fade_end_px = f64::NAN;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("hero.fade_end_px"));
}

#[test]
fn non_finite_offsets_are_invalid() {
    let mut config = FolioConfig::default();
    config.hero.lift_px = f64::INFINITY;
    assert!(config.validate().unwrap_err().to_string().contains("hero.lift_px"));

    let mut config = FolioConfig::default();
    config.header.shadow_after_px = f64::NAN;
    assert!(config.validate().unwrap_err().to_string().contains("header.shadow_after_px"));
}

#[test]
fn empty_phrase_is_invalid() {
    let err = FolioConfig::from_json(r#"{ "typing": { "phrases": ["ok", ""] } }"#).unwrap_err();
    assert!(err.to_string().contains("typing.phrases"));
}

#[test]
fn empty_phrase_list_is_allowed() {
    let config = FolioConfig::from_json(r#"{ "typing": { "phrases": [] } }"#).unwrap();
    assert!(config.typing.phrases.is_empty());
}
