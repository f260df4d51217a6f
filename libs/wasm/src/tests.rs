//! Tests for the WASM-facing helpers.

use super::*;

/// Confirms conversions route through the unit converter.
#[test]
fn test_conversions_match_units_crate() {
    assert_eq!(convert_length_internal(1.0, "km", "m").unwrap(), 1000.0);
    assert_eq!(convert_area_internal(5.0, "m2", "m2").unwrap(), 5.0);
    assert_eq!(convert_volume_internal(1.0, "m3", "mm3").unwrap(), 1e9);
}

/// Ensures invalid units surface explicit errors.
#[test]
fn test_conversions_reject_invalid_units() {
    let err = convert_area_internal(5.0, "m2", "km2").unwrap_err();
    assert!(matches!(err, BindingError::Unit(_)));
    assert!(err.to_string().contains("km2"));
}

#[test]
fn test_unit_codes_lists_length_units_in_order() {
    let json = unit_codes_internal("length").unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let codes: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|unit| unit["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["km", "hm", "dam", "m", "dm", "cm", "mm", "inch"]);
}

#[test]
fn test_unit_codes_rejects_unknown_dimension() {
    let err = unit_codes_internal("time").unwrap_err();
    assert!(matches!(err, BindingError::UnknownDimension(name) if name == "time"));
}

#[test]
fn test_body_kinds_describes_every_body() {
    let json = body_kinds_internal().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            { "id": "sphere", "name": "esfera", "displayName": "Esfera", "parameters": ["radio"] },
            { "id": "cube", "name": "cubo", "displayName": "Cubo", "parameters": ["lado"] }
        ])
    );
}

/// Tests a full session through the handle.
#[test]
fn test_handle_session_produces_results_json() {
    let mut handle = CalculatorHandle::new();
    handle.select_internal("cube").unwrap();
    let json = handle.change_value_internal("lado", "2").unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["volume"], 8.0);
    assert_eq!(parsed["surfaceText"], "24");
    assert_eq!(handle.display_name().as_deref(), Some("Cubo"));
    assert_eq!(handle.image_path().as_deref(), Some("images/cubo.png"));
}

#[test]
fn test_handle_applies_units() {
    let mut handle = CalculatorHandle::new();
    handle.set_units_internal("cm", "m2", "l").unwrap();
    handle.select_internal("cubo").unwrap();
    handle.change_value_internal("lado", "100").unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&handle.results_internal().unwrap()).unwrap();
    assert_eq!(parsed["volume"], 1000.0);
}

#[test]
fn test_handle_reports_errors() {
    let mut handle = CalculatorHandle::new();
    assert!(handle.results_internal().is_err());
    assert!(handle.select_internal("torus").is_err());
    assert!(handle.set_units_internal("m", "km2", "m3").is_err());

    handle.select_internal("sphere").unwrap();
    assert!(handle.change_value_internal("radio", "abc").is_err());
}

#[test]
fn test_handle_parameters_json() {
    let mut handle = CalculatorHandle::new();
    assert_eq!(handle.parameters_json_internal().unwrap(), "[]");
    handle.select_internal("sphere").unwrap();
    handle.change_value_internal("radio", "1.5").unwrap();
    assert_eq!(handle.parameters_json_internal().unwrap(), r#"[["radio",1.5]]"#);
}

#[test]
fn test_format_value_matches_session_formatting() {
    assert_eq!(format_value(8.0), "8");
}

#[test]
fn test_handle_exposes_labels() {
    let handle = CalculatorHandle::new();
    assert_eq!(handle.title(), "Calculadora de volumen");
    assert!(handle.greeting().contains("volumen"));
}
