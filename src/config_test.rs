#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_design_values() {
    let config = GridConfig::default();
    assert_eq!(config.grid_spacing, 150.0);
    assert_eq!(config.sample_step, 15.0);
    assert_eq!(config.influence_radius, 350.0);
    assert_eq!(config.max_displacement, 25.0);
    assert_eq!(config.parallax_factor, 0.3);
    assert_eq!(config.pointer_smoothing, 0.15);
    assert_eq!(config.intro_delay_ms, 2500);
    assert_eq!(config.fade_in_start, 0.3);
    assert_eq!(config.fade_in_end, 0.8);
}

#[test]
fn default_validates() {
    assert!(GridConfig::default().validate().is_ok());
}

#[test]
fn frame_interval_at_sixty_fps() {
    let interval = GridConfig::default().frame_interval_ms();
    assert!((interval - 16.666_666).abs() < 1e-3);
}

#[test]
fn empty_object_yields_defaults() {
    let config = GridConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(config, GridConfig::default());
}

#[test]
fn partial_object_overrides_only_named_fields() {
    let config = GridConfig::from_json(r#"{ "gridSpacing": 120, "introDelayMs": 0 }"#).expect("should parse");
    assert_eq!(config.grid_spacing, 120.0);
    assert_eq!(config.intro_delay_ms, 0);
    assert_eq!(config.influence_radius, 350.0);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = GridConfig::from_json("{ gridSpacing").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_key_is_parse_error() {
    let err = GridConfig::from_json(r#"{ "gridSize": 100 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn zero_spacing_is_rejected() {
    let err = GridConfig::from_json(r#"{ "gridSpacing": 0 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "gridSpacing", .. }));
}

#[test]
fn negative_step_is_rejected() {
    let err = GridConfig::from_json(r#"{ "sampleStep": -5 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "sampleStep", .. }));
}

#[test]
fn smoothing_above_one_is_rejected() {
    let err = GridConfig::from_json(r#"{ "pointerSmoothing": 1.5 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "pointerSmoothing", .. }));
}

#[test]
fn smoothing_of_one_is_allowed() {
    assert!(GridConfig::from_json(r#"{ "pointerSmoothing": 1.0 }"#).is_ok());
}

#[test]
fn inverted_fade_range_is_rejected() {
    let err = GridConfig::from_json(r#"{ "fadeInStart": 0.9, "fadeInEnd": 0.5 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "fadeInEnd", .. }));
}

#[test]
fn invalid_error_message_names_field() {
    let err = ConfigError::Invalid { field: "targetFps", reason: "must be a positive number" };
    assert_eq!(err.to_string(), "targetFps: must be a positive number");
}

#[test]
fn field_carries_radius_and_displacement() {
    let field = GridConfig::default().field();
    assert_eq!(field.radius, 350.0);
    assert_eq!(field.max_displacement, 25.0);
}
