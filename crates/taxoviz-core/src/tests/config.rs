use crate::*;
use serde_json::json;

#[test]
fn dotted_getters_read_nested_values() {
    let cfg = VizConfig::from_value(json!({
        "radial": { "hubRadius": 64, "hubLabel": "Places" },
        "theme": { "transparent": true }
    }));
    assert_eq!(cfg.get_f64("radial.hubRadius"), Some(64.0));
    assert_eq!(cfg.get_str("radial.hubLabel"), Some("Places"));
    assert_eq!(cfg.get_bool("theme.transparent"), Some(true));
    assert_eq!(cfg.get_f64("radial.missing"), None);
}

#[test]
fn set_value_creates_and_replaces_intermediate_objects() {
    let mut cfg = VizConfig::from_value(json!({ "radial": 3 }));
    cfg.set_value("radial.nodeRadius", json!(12));
    assert_eq!(cfg.as_value(), &json!({ "radial": { "nodeRadius": 12 } }));

    let mut cfg = VizConfig::from_value(json!("not an object"));
    cfg.set_value("theme.hubFill", json!("#000"));
    assert_eq!(cfg.get_str("theme.hubFill"), Some("#000"));
}

#[test]
fn overrides_parse_json_scalars_and_fall_back_to_strings() {
    let mut cfg = VizConfig::default();
    cfg.apply_override("radial.hubRadius=40").unwrap();
    cfg.apply_override("theme.hubFill=#123456").unwrap();
    cfg.apply_override("radial.hubLabel = \"Activities\"").unwrap();
    assert_eq!(cfg.get_f64("radial.hubRadius"), Some(40.0));
    assert_eq!(cfg.get_str("theme.hubFill"), Some("#123456"));
    assert_eq!(cfg.get_str("radial.hubLabel"), Some("Activities"));
}

#[test]
fn malformed_overrides_are_rejected() {
    let mut cfg = VizConfig::default();
    assert!(matches!(
        cfg.apply_override("radial.hubRadius"),
        Err(Error::InvalidOverride { .. })
    ));
    assert!(cfg.apply_override("radial..x=1").is_err());
    assert!(cfg.apply_override("=1").is_err());
}

#[test]
fn deep_merge_keeps_untouched_keys() {
    let mut cfg = VizConfig::from_value(json!({
        "radial": { "hubRadius": 50, "nodeRadius": 30 }
    }));
    cfg.deep_merge(&json!({ "radial": { "nodeRadius": 24 }, "theme": { "lineWidth": 1 } }));
    assert_eq!(
        cfg.as_value(),
        &json!({
            "radial": { "hubRadius": 50, "nodeRadius": 24 },
            "theme": { "lineWidth": 1 }
        })
    );
}

#[test]
fn config_documents_load_from_yaml() {
    let cfg = VizConfig::from_document("radial:\n  childSpread: 1.5\n", DocumentFormat::Yaml)
        .unwrap();
    assert_eq!(cfg.get_f64("radial.childSpread"), Some(1.5));
}
