use super::*;

#[test]
fn missing_element_message_names_selector() {
    let err = FolioError::missing("#contact-form");
    assert_eq!(err.to_string(), "element not found: #contact-form");
    assert_eq!(err.code(), "E_MISSING_ELEMENT");
}

#[test]
fn config_parse_converts_from_serde_json() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let err = FolioError::from(parse.unwrap_err());
    assert_eq!(err.code(), "E_CONFIG_PARSE");
    assert!(err.to_string().starts_with("config parse failed:"));
}

#[test]
fn codes_are_distinct() {
    let codes = [
        FolioError::NoWindow.code(),
        FolioError::NoDocument.code(),
        FolioError::missing("x").code(),
        FolioError::Js("boom".into()).code(),
        FolioError::ConfigInvalid("bad".into()).code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        for (j, b) in codes.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

// =============================================================
// best_effort
// =============================================================

#[test]
fn best_effort_passes_success_through() {
    let read: Result<Option<String>, FolioError> = Ok(Some("dark".to_owned()));
    assert_eq!(best_effort("stored theme", read), Some(Some("dark".to_owned())));
}

#[test]
fn best_effort_discards_failure() {
    let blocked: Result<Option<String>, FolioError> = Err(FolioError::Js("SecurityError".into()));
    assert_eq!(best_effort("localStorage", blocked), None);
}

#[test]
fn best_effort_accepts_convertible_errors() {
    let parse: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("{");
    assert!(best_effort("config", parse).is_none());
}
