// Host-side tests for configuration overrides and the marker payload shape.

use globe_core::*;

#[test]
fn defaults_are_valid() {
    let cfg = GlobeConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.controller.dead_zone, 10.0);
    assert_eq!(cfg.tessellation.initial_resolution, 0);
    assert_eq!(cfg.tessellation.detailed_resolution, 3);
    assert!(!cfg.markers.is_empty());
}

#[test]
fn empty_object_is_the_default_config() {
    assert_eq!(GlobeConfig::from_json("{}").unwrap(), GlobeConfig::default());
}

#[test]
fn partial_override_keeps_other_fields() {
    let cfg = GlobeConfig::from_json(
        r#"{"host":{"width":800,"autoRotate":false},"palette":{"highlight":"red"}}"#,
    )
    .unwrap();
    let defaults = GlobeConfig::default();
    assert_eq!(cfg.host.width, 800);
    assert!(!cfg.host.auto_rotate);
    assert_eq!(cfg.host.height, defaults.host.height);
    assert_eq!(cfg.palette.highlight, "red");
    assert_eq!(cfg.palette.default, defaults.palette.default);
    assert_eq!(cfg.controller, defaults.controller);
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        GlobeConfig::from_json("{\"host\":"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn invalid_values_are_rejected() {
    for json in [
        r#"{"controller":{"dead_zone":-1.0}}"#,
        r#"{"host":{"width":0}}"#,
        r#"{"tessellation":{"initial_resolution":4,"detailed_resolution":2}}"#,
    ] {
        assert!(
            matches!(GlobeConfig::from_json(json), Err(ConfigError::Invalid(_))),
            "accepted {json}"
        );
    }
}

#[test]
fn overridden_dead_zone_reaches_the_controller() {
    let cfg = GlobeConfig::from_json(r#"{"controller":{"dead_zone":30.0}}"#).unwrap();
    let mut c = RegionHighlightController::new(RegionCatalog::default(), &cfg.controller);
    assert_eq!(c.on_wheel(25.0), WheelOutcome::Ignored);
    assert!(matches!(c.on_wheel(31.0), WheelOutcome::Rotated { .. }));
}

#[test]
fn markers_serialize_with_host_accessor_names() {
    let v = serde_json::to_value(&default_markers()[0]).unwrap();
    for key in [
        "lat",
        "lng",
        "color",
        "radius",
        "maxR",
        "propagationSpeed",
        "repeatPeriod",
        "ringColor",
    ] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn host_options_serialize_camel_case() {
    let v = serde_json::to_value(HostOptions::default()).unwrap();
    assert_eq!(v["cameraZ"], 270.0);
    assert_eq!(v["showAtmosphere"], false);
    assert!(v.get("polygonsUrl").is_some());
}
